use moviedesk::view::ALL_GENRES;

/// Suggests genres already present in the collection while typing the
/// Genre field, so new entries reuse existing spellings.
pub struct GenreCompleter {
    min_prefix: usize,
}

impl GenreCompleter {
    pub fn new() -> Self {
        Self { min_prefix: 1 }
    }

    /// `options` is the genre selector list, "All" included
    pub fn get_suggestions(&self, input: &str, options: &[String]) -> Vec<String> {
        let input = input.trim();
        if input.chars().count() < self.min_prefix {
            return Vec::new();
        }
        let needle = input.to_lowercase();

        options
            .iter()
            .filter(|genre| genre.as_str() != ALL_GENRES)
            .filter(|genre| genre.as_str() != input)
            .filter(|genre| genre.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }
}
