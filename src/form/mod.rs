pub mod draft;

pub use draft::{DraftField, FormDraft, REQUIRED_FIELDS_MESSAGE, clamp_rating};
