pub mod client;
pub mod config;
pub mod http;

pub use client::{HealthStatus, MovieApi};
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use http::HttpMovieApi;
