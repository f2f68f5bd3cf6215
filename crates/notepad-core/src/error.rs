//! Error types for the core crate.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid source {0:?} - expected one of \"34\", \"56\", \"78\", \"LR\"")]
    InvalidSource(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
