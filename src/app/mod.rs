pub mod bootstrap;
pub mod exit;

pub use bootstrap::{build_app, AppState};
pub use exit::ExitStatus;
