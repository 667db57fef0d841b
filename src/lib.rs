// ============================================================================
// moviedesk Library
// ============================================================================
//
// Client for the movies REST API: fetch the collection, derive the visible
// list and header statistics locally, and turn form drafts into
// POST/PUT/DELETE calls followed by a full reload.
//
// ============================================================================

pub mod api;
pub mod controller;
pub mod core;
pub mod form;
pub mod view;

// Re-export main types for convenience
pub use api::{ApiConfig, HealthStatus, HttpMovieApi, MovieApi};
pub use controller::{FormMode, MovieController, Status};
pub use crate::core::{ClientError, Movie, MovieId, MoviePayload, Result};
pub use form::{DraftField, FormDraft};
pub use view::{EMPTY_LIST, GenreFilter, SortKey, Stats, ViewFilters};

/// Controller wired to the HTTP backend
///
/// # Examples
///
/// ```no_run
/// use moviedesk::{ApiConfig, connect};
///
/// # async fn run() -> moviedesk::Result<()> {
/// let mut controller = connect(ApiConfig::default())?;
/// controller.load().await?;
/// println!("{} movies", controller.stats().count);
/// # Ok(())
/// # }
/// ```
pub fn connect(config: ApiConfig) -> Result<MovieController<HttpMovieApi>> {
    Ok(MovieController::new(HttpMovieApi::new(config)?))
}
