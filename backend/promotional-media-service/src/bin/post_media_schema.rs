//! Inspect a table and print the SQL its repository would run.
//!
//! For `PromotionalPostMedia` the live columns are also checked against the
//! compiled insert layout; a mismatch exits non-zero.

use anyhow::{bail, Context};
use db_pool::create_pool;
use promotional_media_service::db::query::{
    insert_statement, list_query, TableLayout, PROMOTIONAL_POST_MEDIA,
};
use promotional_media_service::db::schema::{list_columns, verify_layout};
use promotional_media_service::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.database.log_config();

    let pool = create_pool(config.database.clone())
        .await
        .context("Failed to connect to MySQL")?;

    let columns = list_columns(&pool, &config.database.database, &config.table)
        .await
        .with_context(|| format!("Failed to list columns of {}", config.table))?;
    pool.close().await;

    if columns.is_empty() {
        bail!(
            "Table {}.{} not found or has no columns",
            config.database.database,
            config.table
        );
    }

    info!(table = %config.table, columns = columns.len(), "Table inspected");

    println!("{}", config.table);
    for column in &columns {
        println!(
            "  {:<16} {:<40} {:?}{}",
            column.name,
            column.column_type,
            column.kind,
            if column.nullable { " NULL" } else { "" }
        );
    }

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let layout = TableLayout::new(&config.table, &names);
    println!();
    println!("{}", list_query(&layout));
    println!("{}", insert_statement(&layout, 1));

    if config.table == PROMOTIONAL_POST_MEDIA.table {
        verify_layout(&PROMOTIONAL_POST_MEDIA, &columns)?;
        println!();
        println!("Layout matches the PromotionalPostMedia record");
    }

    Ok(())
}
