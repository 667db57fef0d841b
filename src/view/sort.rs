// ============================================================================
// src/view/sort.rs - Ordering of the visible movie list
// ============================================================================
//
// All orderings are applied with a stable sort, so movies that compare equal
// keep the relative order they had in the fetched collection.
//
// ============================================================================

use crate::core::Movie;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort order selectable in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest id first
    #[default]
    Newest,
    /// Title ascending, locale-style
    Title,
    /// Highest rating first, unrated last
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::Title, SortKey::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Title => "title",
            SortKey::Rating => "rating",
        }
    }

    /// Next key in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            SortKey::Newest => SortKey::Title,
            SortKey::Title => SortKey::Rating,
            SortKey::Rating => SortKey::Newest,
        }
    }

    pub fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortKey::Newest => b.id.cmp(&a.id),
            SortKey::Title => locale_cmp(&a.title, &b.title),
            SortKey::Rating => compare_ratings_desc(a.rating, b.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "title" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!(
                "unknown sort key '{}', expected one of: newest, title, rating",
                other
            )),
        }
    }
}

/// Descending by rating; a missing rating ranks below every rated movie
fn compare_ratings_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => b.total_cmp(&a),
    }
}

/// Locale-style string comparison
///
/// Three levels, each consulted only when the previous one ties:
/// letters ignoring case and accents, then accents ("resume" < "résumé"),
/// then case, lowercase before uppercase at the first differing position
/// ("ant" < "Ant" < "Zeta").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a = CollationKey::new(a);
    let b = CollationKey::new(b);

    a.base()
        .cmp(b.base())
        .then_with(|| a.accents.cmp(&b.accents))
        .then_with(|| case_cmp(&a.letters, &b.letters))
}

/// A string split into base letters and the combining marks on each
struct CollationKey {
    /// Base characters after canonical decomposition, case preserved
    letters: Vec<char>,
    /// Combining marks that followed each base character
    accents: Vec<String>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut letters = Vec::new();
        let mut accents: Vec<String> = Vec::new();

        for c in s.nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = accents.last_mut() {
                    marks.push(c);
                }
                continue;
            }
            letters.push(c);
            accents.push(String::new());
        }

        Self { letters, accents }
    }

    fn base(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().flat_map(|c| c.to_lowercase())
    }
}

fn case_cmp(a: &[char], b: &[char]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(y),
        };
    }
    a.len().cmp(&b.len())
}

/// Stable sort of borrowed movies by `key`
pub fn sort_movies(movies: &mut [&Movie], key: SortKey) {
    movies.sort_by(|a, b| key.compare(a, b));
}
