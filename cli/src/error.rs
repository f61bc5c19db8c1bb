use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummaryError>;

/// Failures that end a summary run.
///
/// Missing columns and malformed cells are not errors; they degrade the
/// affected summary fields to their defaults instead.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("no player named {0:?} in the roster")]
    PlayerNotFound(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read roster file {path}: {source}")]
    Roster {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
