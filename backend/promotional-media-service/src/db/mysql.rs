//! MySQL implementation of the `Database` collaborator
use super::{Database, QueryOutcome, SqlValue};
use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use tracing::debug;

/// Executes statements on a shared sqlx MySQL pool
#[derive(Clone, Debug)]
pub struct MySqlDatabase {
    pool: MySqlPool,
}

impl MySqlDatabase {
    /// Create a new collaborator over the given pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Database for MySqlDatabase {
    type Error = sqlx::Error;

    async fn execute_query(
        &self,
        sql: &str,
        params: Vec<SqlValue>,
    ) -> Result<QueryOutcome, sqlx::Error> {
        let param_count = params.len();
        let mut query = sqlx::query(sql);
        for value in params {
            query = match value {
                SqlValue::Null => query.bind(None::<i64>),
                SqlValue::Int(v) => query.bind(v),
                SqlValue::UInt(v) => query.bind(v),
                SqlValue::Bool(v) => query.bind(v),
                SqlValue::Text(v) => query.bind(v),
            };
        }

        let result = query.execute(&self.pool).await?;

        debug!(
            params = param_count,
            rows_affected = result.rows_affected(),
            last_insert_id = result.last_insert_id(),
            "Statement executed"
        );

        Ok(QueryOutcome {
            insert_id: result.last_insert_id(),
            rows_affected: result.rows_affected(),
        })
    }
}
