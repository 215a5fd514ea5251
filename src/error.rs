//! Error handling for stencil.
//! Defines the crate error type and the result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or validating template definitions.
///
/// Per-definition errors (`ParseError`, `WriteError`, `IoError`) are reported
/// and skipped by the pipelines; `DiscoveryError` and `SchemaError` abort the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The definition source is not well-formed YAML or does not fit the
    /// expected shape.
    #[error("Failed to parse '{path}': {message}.")]
    ParseError { path: String, message: String },

    /// The built-in schema could not be compiled.
    #[error("Schema error: {0}.")]
    SchemaError(String),

    /// Definition sources could not be enumerated.
    #[error("Failed to discover templates in '{root}': {message}.")]
    DiscoveryError { root: String, message: String },

    /// An artifact could not be written.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}.")]
    SerializeError(#[from] serde_json::Error),

    /// One or more definition files failed validation.
    #[error("{files} template definition(s) failed validation.")]
    ValidationFailed { files: usize },
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a `ParseError` from any displayable parser error.
    pub fn parse<P: Into<String>, E: std::fmt::Display>(path: P, err: E) -> Self {
        Error::ParseError { path: path.into(), message: err.to_string() }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
