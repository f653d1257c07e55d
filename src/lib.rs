use thiserror::Error;

pub type Result<T> = std::result::Result<T, UidexError>;

#[derive(Error, Debug)]
pub enum UidexError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Embedding provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Incompatible index file: {0}")]
    IndexSchema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod builder;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod embeddings;
pub mod extract;
pub mod index;
pub mod props;
pub mod retrieval;
