// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500, 403

    #[error("Partition not found: {0}")]
    PartitionNotFound(String),

    #[error("Failed to decode parquet partition: {0}")]
    Parquet(#[from] polars::prelude::PolarsError),

    #[error("Unexpected partition schema: {0}")]
    Schema(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
