use crate::core::{ClientError, MovieId, Result};
use std::time::Duration;

/// Address the original page talked to; there is no environment override.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Movies API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, without a trailing path
    pub base_url: String,

    /// Per-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `GET`/`POST` target
    pub fn movies_url(&self) -> String {
        format!("{}/api/movies", self.base_url)
    }

    /// `PUT`/`DELETE` target
    pub fn movie_url(&self, id: MovieId) -> String {
        format!("{}/api/movies/{}", self.base_url, id)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::config(format!("invalid base url '{}': {}", self.base_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::config(format!(
                "base url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(ClientError::config("base url has no host"));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ClientError::config("timeout must be > 0"));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
