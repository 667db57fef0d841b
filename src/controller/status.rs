use crate::form::REQUIRED_FIELDS_MESSAGE;
use std::fmt;

/// One-line message under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Creating,
    Updating,
    Deleting,
    MissingFields,
    BackendUnreachable,
    RequestFailed,
    DeleteFailed,
}

impl Status {
    /// A request is in flight
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            Status::Loading | Status::Creating | Status::Updating | Status::Deleting
        )
    }

    pub fn is_error(&self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Loading => "Loading...",
            Status::Creating => "Creating...",
            Status::Updating => "Updating...",
            Status::Deleting => "Deleting...",
            Status::MissingFields => REQUIRED_FIELDS_MESSAGE,
            Status::BackendUnreachable => "Cannot reach backend. Is the movies API running?",
            Status::RequestFailed => "Request failed. Check backend logs.",
            Status::DeleteFailed => "Delete failed. Check backend logs.",
        };
        f.write_str(text)
    }
}
