pub mod error;
pub mod movie;

pub use error::{ClientError, Result};
pub use movie::{Movie, MovieId, MoviePayload};
