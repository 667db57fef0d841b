// ============================================================================
// src/controller/controller.rs - View-state controller
// ============================================================================
//
// Owns the fetched collection and all UI state. Every write is followed by a
// full reload of GET /api/movies; mutation responses are never merged into
// the local list.
//
// Form state machine:
//   Create      --start_edit(m)-->            Editing(m.id)
//   Editing(id) --submit ok / reset_form-->   Create
//   Editing(id) --reload without id-->        Create
//
// ============================================================================

use super::state::FormMode;
use super::status::Status;
use crate::api::MovieApi;
use crate::core::{Movie, MovieId, Result};
use crate::form::{DraftField, FormDraft};
use crate::view::{self, GenreFilter, SortKey, Stats, ViewFilters};
use tracing::{debug, info, warn};

pub struct MovieController<A: MovieApi> {
    api: A,
    movies: Vec<Movie>,
    filters: ViewFilters,
    draft: FormDraft,
    mode: FormMode,
    pending_delete: Option<MovieId>,
    status: Option<Status>,
}

impl<A: MovieApi> MovieController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            movies: Vec::new(),
            filters: ViewFilters::default(),
            draft: FormDraft::default(),
            mode: FormMode::Create,
            pending_delete: None,
            status: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Last successfully fetched collection, in server order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn filters(&self) -> &ViewFilters {
        &self.filters
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Movie awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<MovieId> {
        self.pending_delete
    }

    // ------------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------------

    pub fn visible(&self) -> Vec<&Movie> {
        view::derive_visible(&self.movies, &self.filters)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_movies(&self.movies)
    }

    pub fn genre_options(&self) -> Vec<String> {
        view::genre_options(&self.movies)
    }

    pub fn find(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    // ------------------------------------------------------------------------
    // Remote operations
    // ------------------------------------------------------------------------

    /// Replace the collection with the server's list
    ///
    /// On failure the previous collection stays in place and the status line
    /// reports the backend as unreachable.
    pub async fn load(&mut self) -> Result<()> {
        self.status = Some(Status::Loading);

        match self.api.list().await {
            Ok(movies) => {
                info!(count = movies.len(), "collection loaded");
                self.movies = movies;
                self.status = None;
                self.drop_vanished_references();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load movies");
                self.status = Some(Status::BackendUnreachable);
                Err(err)
            }
        }
    }

    /// Create or update from the current draft
    ///
    /// Validation failures touch nothing but the status line and send no
    /// request. A failed request leaves the draft and edit marker as they
    /// were.
    pub async fn submit(&mut self) -> Result<()> {
        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "draft rejected");
                self.status = Some(Status::MissingFields);
                return Err(err);
            }
        };

        let sent = match self.mode {
            FormMode::Create => {
                self.status = Some(Status::Creating);
                self.api.create(&payload).await
            }
            FormMode::Editing(id) => {
                self.status = Some(Status::Updating);
                self.api.update(id, &payload).await
            }
        };

        if let Err(err) = sent {
            warn!(error = %err, mode = ?self.mode, "failed to save movie");
            self.status = Some(Status::RequestFailed);
            return Err(err);
        }

        info!(title = %payload.title, mode = ?self.mode, "movie saved");
        self.reset_form();
        self.load().await
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: MovieId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Send the confirmed delete, then reload
    ///
    /// The reload happens whatever status the server answered with. Without a
    /// pending confirmation this is a no-op.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        self.status = Some(Status::Deleting);
        if let Err(err) = self.api.delete(id).await {
            warn!(error = %err, %id, "failed to delete movie");
            self.status = Some(Status::DeleteFailed);
            return Err(err);
        }

        info!(%id, "movie deleted");
        self.load().await
    }

    // ------------------------------------------------------------------------
    // Local state
    // ------------------------------------------------------------------------

    /// Switch the form to update mode for `movie`
    pub fn start_edit(&mut self, movie: &Movie) {
        self.mode = FormMode::Editing(movie.id);
        self.draft = FormDraft::from_movie(movie);
    }

    /// Back to an empty create form ("Clear" / "Cancel")
    pub fn reset_form(&mut self) {
        self.draft = FormDraft::default();
        self.mode = FormMode::Create;
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.draft.set(field, value);
    }

    pub fn set_query(&mut self, query: &str) {
        self.filters.query = query.to_string();
    }

    pub fn set_genre_filter(&mut self, genre: GenreFilter) {
        self.filters.genre = genre;
    }

    /// Select the next entry of [`Self::genre_options`], wrapping to "All"
    pub fn cycle_genre_filter(&mut self) {
        let options = self.genre_options();
        let current = self.filters.genre.to_string();
        let next = options
            .iter()
            .position(|option| *option == current)
            .map(|idx| (idx + 1) % options.len())
            .unwrap_or(0);

        self.filters.genre = GenreFilter::from_label(&options[next]);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filters.sort = sort;
    }

    pub fn cycle_sort(&mut self) {
        self.filters.sort = self.filters.sort.next();
    }

    /// Forget the edit marker and delete confirmation when their movie is gone
    fn drop_vanished_references(&mut self) {
        if let FormMode::Editing(id) = self.mode {
            if self.find(id).is_none() {
                info!(%id, "edited movie no longer exists, leaving edit mode");
                self.reset_form();
            }
        }

        if let Some(id) = self.pending_delete {
            if self.find(id).is_none() {
                self.pending_delete = None;
            }
        }
    }
}
