//! Configuration management for promotional-media-service
//!
//! Loads configuration from environment variables (a `.env` file is read
//! first by the binary, when present).

use crate::db::query::PROMOTIONAL_POST_MEDIA;
use crate::error::Result;
use db_pool::DbConfig;

/// Name used for log labeling
pub const SERVICE_NAME: &str = "promotional-media-service";

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DbConfig,
    /// Table inspected by the schema tool (`DAO_TABLE_NAME`)
    pub table: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            database: DbConfig::from_env(SERVICE_NAME)?,
            table: std::env::var("DAO_TABLE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| PROMOTIONAL_POST_MEDIA.table.to_string()),
        })
    }
}
