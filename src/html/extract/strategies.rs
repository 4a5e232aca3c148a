use scraper::{ElementRef, Html};

use super::helpers::{
    cells_named, elements, is_header_row, is_tag, is_within, owned, row_cells, text_of,
};
use crate::core::Table;

/// How many block-level elements the text fallback keeps when a page has no
/// paragraphs.
pub const TEXT_BLOCK_LIMIT: usize = 10;

const BLOCK_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "li", "blockquote", "pre"];

/// Strategy A: a table carrying one of the known site-specific ids.
///
/// Headers are the `th` cells of the table's `thead`, or of its first row when
/// that row holds only `th` cells. Every other row is data, `td` and `th` cells
/// alike. Ids are tried in order; the first one yielding a header and a row wins.
pub(crate) fn try_targeted(doc: &Html, ids: &[String]) -> Option<Table> {
    for id in ids {
        let Some(table) = elements(doc)
            .find(|el| is_tag(el, "table") && el.value().id() == Some(id.as_str()))
        else {
            continue;
        };
        if let Some(found) = targeted_table(table) {
            return Some(found);
        }
    }
    None
}

fn targeted_table(table: ElementRef<'_>) -> Option<Table> {
    let rows = owned(table, "tr");
    let thead = owned(table, "thead").into_iter().next();

    let (headers, header_row) = match thead {
        Some(thead) => {
            let headers: Vec<String> = owned(table, "th")
                .into_iter()
                .filter(|th| is_within(*th, thead))
                .map(text_of)
                .collect();
            (headers, None)
        }
        None => match rows.iter().find(|tr| !row_cells(**tr).is_empty()) {
            Some(first) if is_header_row(*first) => {
                (cells_named(*first, &["th"]), Some(first.id()))
            }
            _ => (Vec::new(), None),
        },
    };

    let body: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|tr| thead.is_none_or(|h| !is_within(*tr, h)))
        .filter(|tr| Some(tr.id()) != header_row)
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    if headers.is_empty() || body.is_empty() {
        return None;
    }
    Some(Table::aligned(headers, body))
}

/// Strategy B: the first table, in document order, that has data rows.
pub(crate) fn try_generic(doc: &Html) -> Option<Table> {
    elements(doc)
        .filter(|el| is_tag(el, "table"))
        .find_map(generic_table)
}

/// Headers come from the table's own `thead` when it has one, otherwise from
/// its first non-empty row. Returns `None` when no data rows remain.
pub(crate) fn generic_table(table: ElementRef<'_>) -> Option<Table> {
    let rows = owned(table, "tr");

    let (headers, body): (Vec<String>, Vec<Vec<String>>) =
        if let Some(thead) = owned(table, "thead").into_iter().next() {
            let mut headers: Vec<String> = owned(table, "th")
                .into_iter()
                .filter(|th| is_within(*th, thead))
                .map(text_of)
                .collect();
            if headers.is_empty() {
                headers = owned(table, "td")
                    .into_iter()
                    .filter(|td| is_within(*td, thead))
                    .map(text_of)
                    .collect();
            }
            let body = rows
                .into_iter()
                .filter(|tr| !is_within(*tr, thead))
                .map(row_cells)
                .filter(|cells| !cells.is_empty())
                .collect();
            (headers, body)
        } else {
            let mut all = rows
                .into_iter()
                .map(row_cells)
                .filter(|cells| !cells.is_empty());
            let headers = all.next().unwrap_or_default();
            (headers, all.collect())
        };

    if body.is_empty() {
        return None;
    }
    Some(Table::aligned(headers, body))
}

/// Strategy C: readable text blocks in document order.
///
/// Paragraphs first; a page without any gets its first few headings, list
/// items and quotes instead. A block nested in another block is already part
/// of the outer one's text and is skipped.
pub(crate) fn try_text(doc: &Html) -> Option<Vec<String>> {
    let paragraphs: Vec<String> = elements(doc)
        .filter(|el| is_tag(el, "p"))
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect();
    if !paragraphs.is_empty() {
        return Some(paragraphs);
    }

    let blocks: Vec<String> = elements(doc)
        .filter(is_block)
        .filter(|el| !el.ancestors().filter_map(ElementRef::wrap).any(|a| is_block(&a)))
        .map(text_of)
        .filter(|t| !t.is_empty())
        .take(TEXT_BLOCK_LIMIT)
        .collect();
    (!blocks.is_empty()).then_some(blocks)
}

fn is_block(el: &ElementRef<'_>) -> bool {
    BLOCK_TAGS.iter().any(|tag| is_tag(el, tag))
}
