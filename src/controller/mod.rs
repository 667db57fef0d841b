pub mod controller;
pub mod state;
pub mod status;

pub use controller::MovieController;
pub use state::FormMode;
pub use status::Status;
