//! Store named Git identities and switch the global `user.name`/`user.email` between them.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod git;
pub mod menu;
pub mod profile;
pub mod prompt;
pub mod storage;

pub use app::App;
pub use error::AppError;
pub use profile::Profile;
pub use storage::ProfileStore;
