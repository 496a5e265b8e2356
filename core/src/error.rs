use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    #[error("Ledger format error: {0}")]
    Format(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Required column '{name}' missing from ledger")]
    MissingColumn { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
