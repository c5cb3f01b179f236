use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to serialize JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Git operation failed. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Git error: {0}.")]
    GitError(String),

    #[error("Failed to read user input. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// The project name contains characters outside `[A-Za-z0-9_-]`.
    #[error("Invalid project name '{name}': only letters, digits, '-' and '_' are allowed.")]
    InvalidProjectName { name: String },

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExists { output_dir: String },

    #[error("Cannot process the path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
