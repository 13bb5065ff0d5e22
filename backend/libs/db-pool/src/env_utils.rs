//! Environment variable parsing utilities
//!
//! Small helpers used by [`crate::DbConfig::from_env`] so that a missing or
//! malformed variable surfaces as a [`DbConfigError`] instead of a panic.

use crate::DbConfigError;
use std::str::FromStr;

/// Parse an environment variable with a default fallback
///
/// Missing or unparsable values fall back to `default`.
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable, treating an empty value as unset
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read a required environment variable
pub fn env_required(key: &'static str) -> Result<String, DbConfigError> {
    env_non_empty(key).ok_or(DbConfigError::Missing(key))
}

/// Parse an optional environment variable, failing on malformed values
///
/// Unlike [`parse_env_with_default`] a present-but-invalid value is an error.
pub fn parse_env_optional<T: FromStr>(key: &'static str) -> Result<Option<T>, DbConfigError> {
    match env_non_empty(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DbConfigError::Invalid { key, value: raw }),
    }
}
