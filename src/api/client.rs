use crate::core::{Movie, MovieId, MoviePayload, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Answer of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub db: Option<String>,
}

/// The REST contract the controller depends on
///
/// Mutation responses carry no information the client uses: every write is
/// followed by a fresh [`MovieApi::list`].
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// `GET /api/movies`
    async fn list(&self) -> Result<Vec<Movie>>;

    /// `POST /api/movies`
    async fn create(&self, payload: &MoviePayload) -> Result<()>;

    /// `PUT /api/movies/{id}`
    async fn update(&self, id: MovieId, payload: &MoviePayload) -> Result<()>;

    /// `DELETE /api/movies/{id}`
    ///
    /// Only transport failures are errors. Any HTTP answer, 404 included,
    /// counts as done.
    async fn delete(&self, id: MovieId) -> Result<()>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}
