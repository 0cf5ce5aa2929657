//! Error types for the Spectre stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid player id: {id}")]
    InvalidPlayerId { id: String },

    #[error("Export error: {message}")]
    Export { message: String },
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Export {
            message: err.to_string(),
        }
    }
}
