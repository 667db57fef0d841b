//! One-shot subcommands: load once, print, exit.

use anyhow::{Context, Result, anyhow};
use moviedesk::{EMPTY_LIST, GenreFilter, Movie, MovieApi, MovieController, SortKey};

pub async fn list<A: MovieApi>(
    mut controller: MovieController<A>,
    query: &str,
    genre: &str,
    sort: SortKey,
) -> Result<()> {
    load(&mut controller).await?;

    controller.set_query(query);
    controller.set_genre_filter(GenreFilter::from_label(genre));
    controller.set_sort(sort);

    for line in list_lines(&controller.visible()) {
        println!("{line}");
    }
    Ok(())
}

fn list_lines(visible: &[&Movie]) -> Vec<String> {
    if visible.is_empty() {
        return vec![EMPTY_LIST.to_string()];
    }

    visible
        .iter()
        .map(|movie| {
            format!(
                "#{:<5} {} ({})  [{}]  ★ {}",
                movie.id,
                movie.title,
                movie.year,
                movie.genre,
                movie.rating_label()
            )
        })
        .collect()
}

pub async fn stats<A: MovieApi>(mut controller: MovieController<A>) -> Result<()> {
    load(&mut controller).await?;

    let stats = controller.stats();
    println!("Movies:     {}", stats.count);
    println!("Avg rating: {}", stats.average_label());
    Ok(())
}

pub async fn health<A: MovieApi>(controller: MovieController<A>) -> Result<()> {
    let health = controller
        .api()
        .health()
        .await
        .context("health check failed")?;

    match health.db {
        Some(db) => println!("status: {}, db: {}", health.status, db),
        None => println!("status: {}", health.status),
    }
    Ok(())
}

async fn load<A: MovieApi>(controller: &mut MovieController<A>) -> Result<()> {
    if let Err(err) = controller.load().await {
        let status = controller
            .status()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(anyhow!("{status} ({err})"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedesk::{ViewFilters, view::derive_visible};

    #[test]
    fn test_list_lines_for_unmatched_genre() {
        let movies = vec![Movie::new(1, "A", 2000, "Drama", Some(5.0))];
        let filters = ViewFilters {
            genre: GenreFilter::from_label("Comedy"),
            ..Default::default()
        };

        let visible = derive_visible(&movies, &filters);

        assert!(visible.is_empty());
        assert_eq!(list_lines(&visible), vec![EMPTY_LIST.to_string()]);
    }

    #[test]
    fn test_list_lines_format() {
        let movies = vec![
            Movie::new(1, "Heat", 1995, "Crime", Some(8.3)),
            Movie::new(2, "Alien", 1979, "Horror", None),
        ];
        let visible: Vec<&Movie> = movies.iter().collect();

        assert_eq!(
            list_lines(&visible),
            vec![
                "#1     Heat (1995)  [Crime]  ★ 8.3".to_string(),
                "#2     Alien (1979)  [Horror]  ★ N/A".to_string(),
            ]
        );
    }
}
