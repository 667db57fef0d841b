use crate::core::Movie;

/// Shown instead of an average when no movie has a rating
pub const NO_AVERAGE: &str = "—";

/// Header figures over the whole collection, filters ignored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    /// Mean over rated movies only
    pub average: Option<f64>,
}

impl Stats {
    pub fn from_movies(movies: &[Movie]) -> Self {
        let (sum, rated) = movies
            .iter()
            .filter_map(|movie| movie.rating)
            .fold((0.0_f64, 0_usize), |(sum, rated), rating| (sum + rating, rated + 1));

        Self {
            count: movies.len(),
            average: (rated > 0).then(|| sum / rated as f64),
        }
    }

    /// One decimal, or the placeholder
    pub fn average_label(&self) -> String {
        match self.average {
            Some(average) => format!("{:.1}", average),
            None => NO_AVERAGE.to_string(),
        }
    }
}
