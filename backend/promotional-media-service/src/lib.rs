//! Promotional Media Service
//!
//! Persistence for promotional media attached to posts: the record model,
//! the `PromotionalPostMedia` insert repository and the MySQL collaborator
//! it runs on.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

// Public re-exports
pub use config::Config;
pub use db::promotional_post_media_repo::{insert_many, insert_one};
pub use db::{Database, MySqlDatabase, QueryOutcome, SqlValue};
pub use error::{AppError, Result};
pub use models::{MediaSource, MediaType, ParseEnumError, PromotionalPostMedia};
