//! Error types for Aislemap Core

use thiserror::Error;

use crate::limits::ValidationError;

/// Result type alias using Aislemap's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Aislemap error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Invalid distance for path {from} -> {to}: distance must be positive")]
    InvalidDistance { from: String, to: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Layout error: {0}")]
    Layout(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Layout(err.to_string())
    }
}
