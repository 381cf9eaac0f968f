use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization or deserialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when a Git command exits unsuccessfully
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// Error when the git executable cannot be started
    #[error("git executable not found, is git installed?")]
    GitNotFound,
    /// Error when a Git config key has no value
    #[error("git config key '{0}' is not set")]
    GitKeyUnset(String),
    /// Error when the home directory cannot be resolved
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Error wrapped with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Prefixes the error with the operation it failed in
    pub fn context(self, context: impl Into<String>) -> Self {
        AppError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
