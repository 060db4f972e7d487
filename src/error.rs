use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeebError {
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Query: {0}")]
    InvalidQuery(String),

    #[error("Unknown Layout: {0}")]
    UnknownLayout(String),
}

pub type KbResult<T> = Result<T, KeebError>;
