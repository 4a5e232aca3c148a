//! Centralized constants for the default UA and extraction targets.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Table ids checked by targeted extraction before any generic table scan.
///
/// `main_table_countries_today` is the live per-country statistics table on
/// worldometers.info.
pub(crate) const DEFAULT_TARGETED_TABLE_IDS: &[&str] = &["main_table_countries_today"];
