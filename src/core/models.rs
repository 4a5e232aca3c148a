//! Shared data models: the structured [`Table`] and the [`FetchResult`] envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::FetchError;

/// An ordered collection of rows sharing one aligned header row.
///
/// Every row has exactly [`Table::width`] cells, and so does the header.
/// Deserializing re-applies [`Table::aligned`], so the width invariant holds
/// for tables read back from JSON too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableParts")]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct TableParts {
    #[serde(default)]
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl From<TableParts> for Table {
    fn from(p: TableParts) -> Self {
        Self::aligned(p.headers, p.rows)
    }
}

impl Table {
    /// Builds a table, aligning headers and rows to the widest row.
    ///
    /// Excess headers are dropped, missing ones are synthesized as `Column {i}`
    /// (with `i` the zero-based column index) and short rows are padded with
    /// empty cells. With no rows at all the header row defines the width.
    #[must_use]
    pub fn aligned(mut headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(headers.len());

        headers.truncate(width);
        headers.extend((headers.len()..width).map(|i| format!("Column {i}")));

        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self { headers, rows }
    }

    /// The header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows, header excluded.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a column index by header name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Consumes the table and returns `(headers, rows)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

/// The uniform outcome of every fetch operation.
///
/// Built only through its constructors, so the following always hold:
/// - `success()` implies `error()` is `None`;
/// - `!success()` implies `table()`, `raw()` and `json()` are `None` and
///   `error()` is a non-empty message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FetchResult {
    /// A successful structured-table result.
    #[must_use]
    pub const fn from_table(table: Table) -> Self {
        Self {
            success: true,
            table: Some(table),
            raw: None,
            json: None,
            error: None,
        }
    }

    /// A successful free-text result.
    #[must_use]
    pub const fn from_text(blocks: Vec<String>) -> Self {
        Self {
            success: true,
            table: None,
            raw: Some(blocks),
            json: None,
            error: None,
        }
    }

    /// A successful API result: the decoded payload plus its tabular view, if any.
    #[must_use]
    pub const fn from_json(json: Value, table: Option<Table>) -> Self {
        Self {
            success: true,
            table,
            raw: None,
            json: Some(json),
            error: None,
        }
    }

    /// A failed result carrying the full description of `err`.
    #[must_use]
    pub fn failure(err: &FetchError) -> Self {
        let mut message = err.describe();
        if message.is_empty() {
            message = "unknown error".to_string();
        }
        Self {
            success: false,
            table: None,
            raw: None,
            json: None,
            error: Some(message),
        }
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn raw(&self) -> Option<&[String]> {
        self.raw.as_deref()
    }

    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Takes the table out of the result, e.g. for export.
    #[must_use]
    pub fn into_table(self) -> Option<Table> {
        self.table
    }
}
