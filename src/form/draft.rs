use crate::core::{ClientError, Movie, MoviePayload, Result};

pub const DEFAULT_YEAR: &str = "2020";
pub const DEFAULT_RATING: &str = "7";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and Genre are required.";

/// Editable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Year,
    Genre,
    Rating,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Year,
        DraftField::Genre,
        DraftField::Rating,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Year => "Year",
            DraftField::Genre => "Genre",
            DraftField::Rating => "Rating (0-10)",
        }
    }
}

/// Unsaved form values, kept as the text the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub year: String,
    pub genre: String,
    /// Empty means "not rated"
    pub rating: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: DEFAULT_YEAR.to_string(),
            genre: String::new(),
            rating: DEFAULT_RATING.to_string(),
        }
    }
}

impl FormDraft {
    /// Draft prefilled from an existing movie
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.to_string(),
            genre: movie.genre.clone(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Year => &self.year,
            DraftField::Genre => &self.genre,
            DraftField::Rating => &self.rating,
        }
    }

    /// Store raw input; ratings go through [`clamp_rating`]
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Title => self.title = value.to_string(),
            DraftField::Year => self.year = value.to_string(),
            DraftField::Genre => self.genre = value.to_string(),
            DraftField::Rating => self.rating = clamp_rating(value),
        }
    }

    /// Validate and normalize into a request body
    ///
    /// Title and genre are trimmed and must not end up empty. Year and rating
    /// become `None` when they are not numbers.
    pub fn to_payload(&self) -> Result<MoviePayload> {
        let title = self.title.trim();
        let genre = self.genre.trim();

        if title.is_empty() || genre.is_empty() {
            return Err(ClientError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(MoviePayload {
            title: title.to_string(),
            year: parse_year(&self.year),
            genre: genre.to_string(),
            rating: parse_rating(&self.rating),
        })
    }
}

/// Whole numbers only, written either way: `1999` or `1999.0`
fn parse_year(raw: &str) -> Option<i32> {
    let year = raw.trim().parse::<f64>().ok()?;
    if year.fract() != 0.0 || year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return None;
    }
    Some(year as i32)
}

fn parse_rating(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Keep rating input inside `[0, 10]`
///
/// Empty stays empty, text that is not a number is cleared, numbers outside
/// the range snap to the nearest bound. In-range input is kept as typed so a
/// partial value like `7.` can still be completed.
pub fn clamp_rating(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_finite() => String::new(),
        Ok(n) if n < 0.0 => "0".to_string(),
        Ok(n) if n > 10.0 => "10".to_string(),
        Ok(_) => trimmed.to_string(),
        Err(_) => String::new(),
    }
}
