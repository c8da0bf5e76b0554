//! Error types for the Medium publish run
//!
//! The run has a binary taxonomy: skips are ordinary outcomes handled in
//! `run`, so the only errors here are the fatal API-client ones.

use thiserror::Error;

/// Medium API client errors
#[derive(Debug, Error)]
pub enum MediumError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Medium user id not found")]
    MissingUserId,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}
