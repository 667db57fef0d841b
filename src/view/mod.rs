//! Client-side derivation of what the list and header show.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{ALL_GENRES, EMPTY_LIST, GenreFilter, ViewFilters, derive_visible, genre_options};
pub use sort::{SortKey, locale_cmp};
pub use stats::{NO_AVERAGE, Stats};
