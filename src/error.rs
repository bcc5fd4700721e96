//! Error types for the Jira client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jira API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed payload: missing `{0}`")]
    MissingField(String),

    #[error("Malformed payload: unexpected type for `{0}`")]
    InvalidField(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
