use std::collections::HashSet;

use polars::prelude::*;

use crate::core::Table;

/// Trait for converting extracted data structures into Polars DataFrames.
///
/// A DataFrame is the usual hand-off point to spreadsheet writers and
/// further analysis.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Returns a `PolarsError` if the frame cannot be assembled.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Table {
    /// One `String` column per header, in header order.
    ///
    /// Polars needs unique column names while scraped headers often repeat or
    /// are blank: a blank header becomes `Column {i}` and a repeated one gets a
    /// `_1`, `_2`, ... suffix.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = unique_names(self.headers())
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<String> = self.rows().iter().map(|row| row[idx].clone()).collect();
                Column::new(name.as_str().into(), values)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}

fn unique_names(headers: &[String]) -> Vec<String> {
    let mut used = HashSet::new();
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let base = if h.trim().is_empty() {
                format!("Column {i}")
            } else {
                h.clone()
            };
            let mut name = base.clone();
            let mut n = 1;
            while !used.insert(name.clone()) {
                name = format!("{base}_{n}");
                n += 1;
            }
            name
        })
        .collect()
}
