use crate::core::{FetchError, FetchResult, Table};

/// Which tier of the extraction policy produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A table carrying one of the client's targeted ids.
    Targeted,
    /// The first table on the page with data rows.
    Generic,
}

/// What the extractor found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A structured table.
    Table {
        /// The aligned table.
        table: Table,
        /// The tier that found it.
        strategy: Strategy,
    },
    /// Readable text blocks, in document order, when no table was usable.
    Text(Vec<String>),
}

impl From<Extraction> for FetchResult {
    fn from(e: Extraction) -> Self {
        match e {
            Extraction::Table { table, .. } => Self::from_table(table),
            Extraction::Text(blocks) => Self::from_text(blocks),
        }
    }
}

impl From<Result<Extraction, FetchError>> for FetchResult {
    fn from(r: Result<Extraction, FetchError>) -> Self {
        match r {
            Ok(e) => e.into(),
            Err(err) => Self::failure(&err),
        }
    }
}
