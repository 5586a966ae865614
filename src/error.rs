//! Error types for the FPL planner

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entry ID not provided and {env_var} environment variable not set")]
    MissingEntryId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: u32 },

    #[error("Invalid swap '{input}', expected OUT:IN")]
    InvalidSwap { input: String },

    #[error("FPL API returned no data")]
    NoData,
}
