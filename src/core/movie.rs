use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned movie identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A movie record as returned by `GET /api/movies`
///
/// The server owns these records; the client only keeps the last list it
/// fetched and never patches it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: Option<f64>,
}

impl Movie {
    pub fn new(id: i64, title: &str, year: i32, genre: &str, rating: Option<f64>) -> Self {
        Self {
            id: MovieId(id),
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            rating,
        }
    }

    /// Rating as shown in the list, `N/A` when not rated
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => rating.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Body of `POST /api/movies` and `PUT /api/movies/{id}`
///
/// `year` and `rating` serialize as `null` when the form could not
/// produce a number for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub year: Option<i32>,
    pub genre: String,
    pub rating: Option<f64>,
}
