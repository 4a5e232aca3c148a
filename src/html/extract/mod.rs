mod helpers;
mod strategies;

pub use strategies::TEXT_BLOCK_LIMIT;

use scraper::Html;
use strategies::{try_generic, try_targeted, try_text};

use super::model::{Extraction, Strategy};
use crate::core::FetchError;

/// Runs the extraction policy over an HTML document.
///
/// In priority order: a table carrying one of `targeted_ids`, then the first
/// generic table with data rows, then the page's readable text blocks.
///
/// # Errors
///
/// Returns `FetchError::NoContent` when none of the three yields anything.
pub fn extract(html: &str, targeted_ids: &[String]) -> Result<Extraction, FetchError> {
    let doc = Html::parse_document(html);

    /* Strategy A: known site-specific table */
    if let Some(table) = try_targeted(&doc, targeted_ids) {
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = table.len(), cols = table.width(), "targeted table hit");
        return Ok(Extraction::Table {
            table,
            strategy: Strategy::Targeted,
        });
    }

    /* Strategy B: first generic table with data rows */
    if let Some(table) = try_generic(&doc) {
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = table.len(), cols = table.width(), "generic table hit");
        return Ok(Extraction::Table {
            table,
            strategy: Strategy::Generic,
        });
    }

    /* Strategy C: free text */
    if let Some(blocks) = try_text(&doc) {
        #[cfg(feature = "tracing")]
        tracing::debug!(blocks = blocks.len(), "no usable table; falling back to text");
        return Ok(Extraction::Text(blocks));
    }

    Err(FetchError::NoContent)
}
