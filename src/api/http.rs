//! `reqwest` implementation of [`MovieApi`].
//!
//! List, create and update treat any non-2xx answer as a failure, the same
//! way a refused connection is. Delete only fails when the request never
//! got an answer.

use super::client::{HealthStatus, MovieApi};
use super::config::ApiConfig;
use crate::core::{Movie, MovieId, MoviePayload, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

pub struct HttpMovieApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpMovieApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn list(&self) -> Result<Vec<Movie>> {
        let url = self.config.movies_url();
        debug!(%url, "GET movies");

        let movies = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Movie>>()
            .await?;

        debug!(count = movies.len(), "movies received");
        Ok(movies)
    }

    async fn create(&self, payload: &MoviePayload) -> Result<()> {
        let url = self.config.movies_url();
        debug!(%url, title = %payload.title, "POST movie");

        self.client
            .post(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: MovieId, payload: &MoviePayload) -> Result<()> {
        let url = self.config.movie_url(id);
        debug!(%url, title = %payload.title, "PUT movie");

        self.client
            .put(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<()> {
        let url = self.config.movie_url(id);
        debug!(%url, "DELETE movie");

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            warn!(%url, status = response.status().as_u16(), "delete answered with an error status");
        }
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.health_url();
        debug!(%url, "GET health");

        let health = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<HealthStatus>()
            .await?;
        Ok(health)
    }
}
