//! Table introspection through `INFORMATION_SCHEMA`
//!
//! Reads the live column list of a table so it can be compared against the
//! layout a repository binds against.

use super::query::TableLayout;
use crate::error::{AppError, Result};
use sqlx::mysql::MySqlPool;
use tracing::{debug, info, warn};

/// How a MySQL column type is carried on the Rust side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// `tinyint`, used as a 0/1 flag
    Flag,
    /// `int` / `bigint`
    Integer,
    /// `float`
    Float,
    /// `varchar`, `char`, `date`, `text`, `json`
    Text,
    /// `enum(...)` with its allowed values
    Enum(Vec<String>),
    /// Any other type, kept verbatim
    Unknown(String),
}

impl ColumnKind {
    /// Classify a `COLUMN_TYPE` value such as `int(11) unsigned` or `enum('a','b')`
    pub fn from_mysql_type(column_type: &str) -> Self {
        let raw = column_type.trim();
        let base = raw
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match base.as_str() {
            "tinyint" => ColumnKind::Flag,
            "int" | "bigint" => ColumnKind::Integer,
            "float" => ColumnKind::Float,
            "varchar" | "char" | "date" | "text" | "json" => ColumnKind::Text,
            "enum" => ColumnKind::Enum(parse_enum_values(raw)),
            _ => ColumnKind::Unknown(raw.to_string()),
        }
    }
}

fn parse_enum_values(column_type: &str) -> Vec<String> {
    let Some(start) = column_type.find('(') else {
        return Vec::new();
    };
    let Some(end) = column_type.rfind(')') else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    column_type[start + 1..end]
        .split(',')
        .map(|value| value.trim().trim_matches('\'').to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// One column as reported by `INFORMATION_SCHEMA.COLUMNS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Normalized with [`to_camel_case`]
    pub name: String,
    pub column_type: String,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub default: Option<String>,
}

impl ColumnSchema {
    pub fn new(
        name: &str,
        column_type: &str,
        is_nullable: &str,
        default: Option<String>,
    ) -> Self {
        Self {
            name: to_camel_case(name),
            column_type: column_type.to_string(),
            kind: ColumnKind::from_mysql_type(column_type),
            nullable: is_nullable.eq_ignore_ascii_case("YES"),
            default,
        }
    }
}

/// Normalize a column name to camelCase
///
/// Two-character names are lowercased entirely (`ID` -> `id`); longer names
/// only get their first character lowercased (`PostID` -> `postID`).
pub fn to_camel_case(name: &str) -> String {
    if name.chars().count() == 2 {
        return name.to_lowercase();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// List the columns of `database`.`table` in ordinal order
pub async fn list_columns(
    pool: &MySqlPool,
    database: &str,
    table: &str,
) -> std::result::Result<Vec<ColumnSchema>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, String, String, Option<String>)>(
        r#"
        SELECT CAST(COLUMN_NAME AS CHAR),
               CAST(COLUMN_TYPE AS CHAR),
               CAST(IS_NULLABLE AS CHAR),
               CAST(COLUMN_DEFAULT AS CHAR)
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
        ORDER BY ORDINAL_POSITION
        "#,
    )
    .bind(database)
    .bind(table)
    .fetch_all(pool)
    .await?;

    debug!(table, columns = rows.len(), "Columns listed");

    Ok(rows
        .into_iter()
        .map(|(name, column_type, is_nullable, default)| {
            ColumnSchema::new(&name, &column_type, &is_nullable, default)
        })
        .collect())
}

/// Check that the live columns match `layout` name-for-name, in order
pub fn verify_layout(layout: &TableLayout<'_>, columns: &[ColumnSchema]) -> Result<()> {
    let matches = columns.len() == layout.columns.len()
        && columns
            .iter()
            .zip(layout.columns)
            .all(|(column, expected)| column.name == *expected);

    if matches {
        info!(table = layout.table, "Table layout verified");
        return Ok(());
    }

    let actual: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
    warn!(table = layout.table, ?actual, "Table layout mismatch");

    Err(AppError::SchemaMismatch {
        table: layout.table.to_string(),
        expected: layout.columns.iter().map(|c| c.to_string()).collect(),
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::query::PROMOTIONAL_POST_MEDIA;

    fn columns(names: &[&str]) -> Vec<ColumnSchema> {
        names
            .iter()
            .map(|name| ColumnSchema::new(name, "varchar(255)", "NO", None))
            .collect()
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("ID"), "id");
        assert_eq!(to_camel_case("Id"), "id");
        assert_eq!(to_camel_case("PostID"), "postID");
        assert_eq!(to_camel_case("MediaUrl"), "mediaUrl");
        assert_eq!(to_camel_case("active"), "active");
        assert_eq!(to_camel_case("X"), "x");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_classify_scalar_types() {
        assert_eq!(ColumnKind::from_mysql_type("tinyint(1)"), ColumnKind::Flag);
        assert_eq!(ColumnKind::from_mysql_type("int(11)"), ColumnKind::Integer);
        assert_eq!(
            ColumnKind::from_mysql_type("bigint unsigned"),
            ColumnKind::Integer
        );
        assert_eq!(
            ColumnKind::from_mysql_type("int(10) unsigned"),
            ColumnKind::Integer
        );
        assert_eq!(ColumnKind::from_mysql_type("float"), ColumnKind::Float);
        assert_eq!(ColumnKind::from_mysql_type("VARCHAR(255)"), ColumnKind::Text);
        assert_eq!(ColumnKind::from_mysql_type("json"), ColumnKind::Text);
        assert_eq!(
            ColumnKind::from_mysql_type("datetime"),
            ColumnKind::Unknown("datetime".to_string())
        );
    }

    #[test]
    fn test_classify_enum_values() {
        assert_eq!(
            ColumnKind::from_mysql_type("enum('youtube','facebook','kisan-network')"),
            ColumnKind::Enum(vec![
                "youtube".to_string(),
                "facebook".to_string(),
                "kisan-network".to_string(),
            ])
        );
        assert_eq!(ColumnKind::from_mysql_type("enum"), ColumnKind::Enum(vec![]));
    }

    #[test]
    fn test_column_schema_normalizes() {
        let column = ColumnSchema::new("PostID", "int(11)", "YES", Some("0".to_string()));
        assert_eq!(column.name, "postID");
        assert_eq!(column.kind, ColumnKind::Integer);
        assert!(column.nullable);
        assert_eq!(column.default.as_deref(), Some("0"));
    }

    #[test]
    fn test_verify_layout_accepts_exact_match() {
        let live = columns(PROMOTIONAL_POST_MEDIA.columns);
        assert!(verify_layout(&PROMOTIONAL_POST_MEDIA, &live).is_ok());
    }

    #[test]
    fn test_verify_layout_rejects_reordered_columns() {
        let mut names = PROMOTIONAL_POST_MEDIA.columns.to_vec();
        names.swap(1, 2);
        let live = columns(&names);

        match verify_layout(&PROMOTIONAL_POST_MEDIA, &live) {
            Err(AppError::SchemaMismatch {
                table,
                expected,
                actual,
            }) => {
                assert_eq!(table, "PromotionalPostMedia");
                assert_eq!(expected[1], "postID");
                assert_eq!(actual[1], "createdBy");
            }
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_layout_rejects_missing_table() {
        assert!(verify_layout(&PROMOTIONAL_POST_MEDIA, &[]).is_err());
    }
}
