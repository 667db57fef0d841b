use super::sort::{SortKey, locale_cmp, sort_movies};
use crate::core::Movie;
use std::collections::BTreeSet;
use std::fmt;

/// Label of the pass-all entry in the genre selector
pub const ALL_GENRES: &str = "All";

/// Shown in place of the list when no movie passes the filters
pub const EMPTY_LIST: &str = "No movies found. Try adding one or adjusting filters.";

/// Genre selector state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    /// `"All"` maps to [`GenreFilter::All`], anything else is an exact genre
    pub fn from_label(label: &str) -> Self {
        if label == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => movie.genre == *genre,
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str(ALL_GENRES),
            GenreFilter::Only(genre) => f.write_str(genre),
        }
    }
}

/// UI-only filter state. Never sent to the server, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilters {
    pub query: String,
    pub genre: GenreFilter,
    pub sort: SortKey,
}

impl ViewFilters {
    /// Case-insensitive substring match on title, genre or year
    ///
    /// A blank query matches everything. A non-blank query is used as typed,
    /// surrounding whitespace included.
    pub fn matches_query(&self, movie: &Movie) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();

        movie.title.to_lowercase().contains(&needle)
            || movie.genre.to_lowercase().contains(&needle)
            || movie.year.to_string().contains(&needle)
    }
}

/// The list shown to the user
///
/// Text filter, then genre filter, then a stable sort. The input slice is
/// only borrowed; calling this twice with the same arguments yields the same
/// list.
pub fn derive_visible<'a>(movies: &'a [Movie], filters: &ViewFilters) -> Vec<&'a Movie> {
    let mut list: Vec<&Movie> = movies
        .iter()
        .filter(|movie| filters.matches_query(movie))
        .filter(|movie| filters.genre.matches(movie))
        .collect();

    sort_movies(&mut list, filters.sort);
    list
}

/// Entries of the genre selector: `"All"`, then each distinct genre
pub fn genre_options(movies: &[Movie]) -> Vec<String> {
    let distinct: BTreeSet<&str> = movies
        .iter()
        .map(|movie| movie.genre.as_str())
        .filter(|genre| !genre.is_empty())
        .collect();

    let mut genres: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    genres.sort_by(|a, b| locale_cmp(a, b));

    let mut options = Vec::with_capacity(genres.len() + 1);
    options.push(ALL_GENRES.to_string());
    options.extend(genres);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<Movie> {
        vec![
            Movie::new(1, "Interstellar", 2014, "Sci-Fi", Some(8.7)),
            Movie::new(2, "Heat", 1995, "Crime", None),
            Movie::new(3, "Arrival", 2016, "sci-fi", Some(7.9)),
            Movie::new(4, "The Thing", 1982, "Horror", Some(8.2)),
        ]
    }

    fn ids(list: &[&Movie]) -> Vec<i64> {
        list.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn test_empty_query_passes_all() {
        let movies = collection();
        let filters = ViewFilters::default();

        assert_eq!(ids(&derive_visible(&movies, &filters)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_blank_query_passes_all() {
        let movies = collection();
        let filters = ViewFilters {
            query: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(derive_visible(&movies, &filters).len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let movies = collection();
        let filters = ViewFilters {
            query: "SCI".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&derive_visible(&movies, &filters)), vec![3, 1]);
    }

    #[test]
    fn test_query_matches_title_genre_or_year() {
        let movies = collection();

        let by_title = ViewFilters {
            query: "thing".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_visible(&movies, &by_title)), vec![4]);

        let by_genre = ViewFilters {
            query: "crim".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_visible(&movies, &by_genre)), vec![2]);

        let by_year = ViewFilters {
            query: "199".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_visible(&movies, &by_year)), vec![2]);
    }

    #[test]
    fn test_genre_filter_is_exact() {
        let movies = collection();
        let filters = ViewFilters {
            genre: GenreFilter::from_label("Sci-Fi"),
            ..Default::default()
        };

        assert_eq!(ids(&derive_visible(&movies, &filters)), vec![1]);
    }

    #[test]
    fn test_unknown_genre_yields_empty_list() {
        let movies = vec![Movie::new(1, "A", 2000, "Drama", Some(5.0))];
        let filters = ViewFilters {
            genre: GenreFilter::Only("Comedy".to_string()),
            ..Default::default()
        };

        assert!(derive_visible(&movies, &filters).is_empty());
    }

    #[test]
    fn test_derivation_is_pure() {
        let movies = collection();
        let before = movies.clone();
        let filters = ViewFilters {
            query: "i".to_string(),
            genre: GenreFilter::All,
            sort: SortKey::Title,
        };

        let first = ids(&derive_visible(&movies, &filters));
        let second = ids(&derive_visible(&movies, &filters));

        assert_eq!(first, second);
        assert_eq!(movies, before);
    }

    #[test]
    fn test_genre_options() {
        let movies = collection();
        assert_eq!(
            genre_options(&movies),
            vec!["All", "Crime", "Horror", "sci-fi", "Sci-Fi"]
        );
        assert_eq!(genre_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_genre_options_ignore_accents() {
        let movies = vec![
            Movie::new(1, "Unforgiven", 1992, "Western", Some(7.9)),
            Movie::new(2, "Ben-Hur", 1959, "Épopée", Some(8.1)),
            Movie::new(3, "Amadeus", 1984, "Drame", None),
        ];

        assert_eq!(genre_options(&movies), vec!["All", "Drame", "Épopée", "Western"]);
    }

    #[test]
    fn test_genre_filter_label_round_trip() {
        assert_eq!(GenreFilter::from_label("All"), GenreFilter::All);
        assert_eq!(GenreFilter::Only("Drama".to_string()).to_string(), "Drama");
    }
}
