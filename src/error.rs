//! Error types for the locationiq crate

use thiserror::Error;

/// Main error type for geocoding operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid server response from: {url}")]
    InvalidServerResponse { url: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for geocoding operations
pub type Result<T> = std::result::Result<T, Error>;
