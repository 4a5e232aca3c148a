//! tabfetch: pull tabular data out of web pages and JSON APIs.
//!
//! Two independent operations share one result envelope, [`FetchResult`]:
//!
//! - [`scrape_html`] fetches a page and looks for a table: first one carrying a
//!   known site-specific id, then any table with data rows, and finally falls
//!   back to the page's readable text.
//! - [`fetch_api`] calls a JSON endpoint (optionally with a bearer token and
//!   query parameters) and reshapes record-like payloads into a table.
//!
//! Both never fail: transport, status and parse problems come back as a
//! `FetchResult` with `success() == false` and a human-readable `error()`.
//! The builders ([`HtmlBuilder`], [`ApiBuilder`]) expose the typed
//! `Result<_, FetchError>` path for callers that want it.
//!
//! ```no_run
//! # async fn demo() {
//! let client = tabfetch::FetchClient::default();
//! let result = tabfetch::scrape_html(&client, "https://example.com/prices").await;
//! if let Some(table) = result.table() {
//!     println!("{} columns, {} rows", table.width(), table.len());
//! }
//! # }
//! ```

pub mod api;
pub mod core;
pub mod html;

pub use api::{ApiBuilder, ApiResponse, fetch_api, tabulate};
pub use crate::core::{ErrorKind, FetchClient, FetchClientBuilder, FetchError, FetchResult, Table};
pub use html::{Extraction, HtmlBuilder, Strategy, extract, scrape_html};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;

/// Installs a `tracing` subscriber honouring `RUST_LOG`. Intended for demos and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
