//! Error types for promotional-media-service
//!
//! Repository inserts never produce these: they hand back the `Database`
//! collaborator's own error. `AppError` covers configuration, connection
//! setup and schema checks.

use db_pool::DbConfigError;
use thiserror::Error;

/// Result type for promotional-media-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection settings missing or malformed
    #[error("Configuration error: {0}")]
    Config(#[from] DbConfigError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Live table columns differ from the compiled layout
    #[error("Schema mismatch for {table}: expected columns {expected:?}, found {actual:?}")]
    SchemaMismatch {
        table: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
}
