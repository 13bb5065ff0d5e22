//! SQL text builders for table layouts
//!
//! Statements use MySQL `?` placeholders. A multi-row insert expands to one
//! `(?, ..., ?)` group per row so every value is bound positionally.

/// A table name plus its columns in binding order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout<'a> {
    pub table: &'a str,
    pub columns: &'a [&'a str],
}

/// Layout of the `PromotionalPostMedia` table, in insert order
pub const PROMOTIONAL_POST_MEDIA: TableLayout<'static> = TableLayout {
    table: "PromotionalPostMedia",
    columns: &[
        "id",
        "postID",
        "createdBy",
        "updatedBy",
        "createdAt",
        "updatedAt",
        "title",
        "content",
        "isHighlighted",
        "source",
        "mediaType",
        "mimeType",
        "mediaUrl",
        "thumbnailUrl",
        "active",
    ],
};

impl<'a> TableLayout<'a> {
    pub fn new(table: &'a str, columns: &'a [&'a str]) -> Self {
        Self { table, columns }
    }

    /// Alias used by list queries: the table's first character, lowercased
    pub fn alias(&self) -> String {
        self.table
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}

/// `INSERT INTO <table>(<cols>) VALUES (?, ...), ...` with `rows` groups
pub fn insert_statement(layout: &TableLayout<'_>, rows: usize) -> String {
    let group = format!("({})", vec!["?"; layout.columns.len()].join(", "));
    let groups = vec![group.as_str(); rows].join(", ");

    format!(
        "INSERT INTO {}({}) VALUES {}",
        layout.table,
        layout.columns.join(", "),
        groups
    )
}

/// `SELECT a.col, ... FROM <table> a` over every column of the layout
pub fn list_query(layout: &TableLayout<'_>) -> String {
    let alias = layout.alias();
    let columns = layout
        .columns
        .iter()
        .map(|column| format!("{}.{}", alias, column))
        .collect::<Vec<_>>()
        .join(", ");

    format!("SELECT {} FROM {} {}", columns, layout.table, alias)
}
