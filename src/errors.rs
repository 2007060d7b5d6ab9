//! Errors raised while listing files
//!
//! Walking a directory can only fail with an IO error. The BucketFS listing
//! API adds two more cases: an empty base path and a file name lookup that
//! matched nothing.

use thiserror::Error;

/// Crate error types
///
/// The walker itself only ever produces [`AppError::Io`]; the other variants
/// come from the BucketFS listing API.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The BucketFS base path was empty
    #[error("BucketFS base path is empty")]
    EmptyBasePath,
    /// No file with the requested name exists below the base path
    #[error("File {name:?} not found in BucketFS")]
    FileNotFound { name: String },
}

impl AppError {
    /// Whether this error is an IO error of kind `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}
