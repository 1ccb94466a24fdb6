use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize synthesis request. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// Represents violations of the exclusion manifest path invariant
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// When the synthesis tool has executed but finished with an error.
    #[error("Synthesis tool '{program}' failed with status: {status}")]
    SynthExecutionError { program: String, status: ExitStatus },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
