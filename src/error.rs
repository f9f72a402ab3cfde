//! Error types for the tracker library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("kalshi api error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("replay error: {0}")]
    Replay(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
