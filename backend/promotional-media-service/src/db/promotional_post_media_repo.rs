//! Promotional post media repository - inserts into `PromotionalPostMedia`
//!
//! Errors from the `Database` collaborator are returned as-is: no retry,
//! no wrapping.

use super::query::{insert_statement, PROMOTIONAL_POST_MEDIA};
use super::{Database, SqlValue};
use crate::models::PromotionalPostMedia;
use tracing::debug;

/// Insert a single record
/// Returns the id the database generated for it
pub async fn insert_one<D>(db: &D, record: &PromotionalPostMedia) -> Result<u64, D::Error>
where
    D: Database + ?Sized,
{
    insert_rows(db, std::slice::from_ref(record)).await
}

/// Insert records with one multi-row statement, preserving their order
///
/// Returns the id reported by the driver (MySQL: the first inserted row),
/// or `None` without touching the database when `records` is empty.
pub async fn insert_many<D>(
    db: &D,
    records: &[PromotionalPostMedia],
) -> Result<Option<u64>, D::Error>
where
    D: Database + ?Sized,
{
    if records.is_empty() {
        debug!("No promotional post media to insert");
        return Ok(None);
    }

    insert_rows(db, records).await.map(Some)
}

async fn insert_rows<D>(db: &D, records: &[PromotionalPostMedia]) -> Result<u64, D::Error>
where
    D: Database + ?Sized,
{
    let sql = insert_statement(&PROMOTIONAL_POST_MEDIA, records.len());

    let mut params = Vec::with_capacity(records.len() * PROMOTIONAL_POST_MEDIA.columns.len());
    for record in records {
        push_row(&mut params, record);
    }

    let outcome = db.execute_query(&sql, params).await?;

    debug!(
        rows = records.len(),
        insert_id = outcome.insert_id,
        "Promotional post media inserted"
    );

    Ok(outcome.insert_id)
}

// Must follow PROMOTIONAL_POST_MEDIA.columns
fn push_row(params: &mut Vec<SqlValue>, record: &PromotionalPostMedia) {
    params.extend([
        SqlValue::from(record.id),
        SqlValue::from(record.post_id),
        SqlValue::from(record.created_by.as_str()),
        SqlValue::from(record.updated_by.as_str()),
        SqlValue::from(record.created_at),
        SqlValue::from(record.updated_at),
        SqlValue::from(record.title.as_str()),
        SqlValue::from(record.content.as_str()),
        SqlValue::from(record.is_highlighted),
        SqlValue::from(record.source.as_str()),
        SqlValue::from(record.media_type.as_str()),
        SqlValue::from(record.mime_type.as_str()),
        SqlValue::from(record.media_url.as_str()),
        SqlValue::from(record.thumbnail_url.as_str()),
        SqlValue::from(record.active),
    ]);
}
