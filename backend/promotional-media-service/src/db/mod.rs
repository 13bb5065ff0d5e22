//! Database access layer
//!
//! This module provides:
//! - The `Database` collaborator trait repositories execute statements through
//! - A MySQL implementation of that trait over a sqlx pool
//! - SQL text builders for the table layouts
//! - The promotional post media repository
//! - `INFORMATION_SCHEMA` introspection used to check live layouts

use async_trait::async_trait;

pub mod mysql;
pub mod promotional_post_media_repo;
pub mod query;
pub mod schema;

pub use mysql::MySqlDatabase;

/// A positional statement parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Int(i64),
    UInt(u64),
    Bool(bool),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<u64> for SqlValue {
    fn from(value: u64) -> Self {
        SqlValue::UInt(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// What the driver reports after executing a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOutcome {
    /// Auto-increment id generated by an insert (first row for multi-row inserts)
    pub insert_id: u64,
    pub rows_affected: u64,
}

/// Executes parameterized SQL on behalf of repositories.
///
/// Implementations own connection handling, timeouts and cancellation.
/// Repositories hand back `Self::Error` untouched, so callers see exactly
/// what the driver raised.
#[async_trait]
pub trait Database: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute `sql` with `params` bound to its `?` placeholders in order.
    async fn execute_query(
        &self,
        sql: &str,
        params: Vec<SqlValue>,
    ) -> Result<QueryOutcome, Self::Error>;
}
