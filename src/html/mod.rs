//! HTML table extraction: fetch a page and pull out its table, or its text.

mod extract;
mod fetch;
mod model;

pub use extract::{TEXT_BLOCK_LIMIT, extract};
pub use model::{Extraction, Strategy};

use crate::core::{FetchClient, FetchError, FetchResult};

/// A builder for scraping one web page.
pub struct HtmlBuilder {
    client: FetchClient,
    url: String,
}

impl HtmlBuilder {
    /// Creates a new `HtmlBuilder` for a given page URL.
    pub fn new(client: &FetchClient, url: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            url: url.into(),
        }
    }

    /// Fetches the page and runs the extraction policy.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the URL is invalid, the request fails or
    /// returns a non-2xx status, or the page holds no table and no text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.url)))]
    pub async fn fetch(self) -> Result<Extraction, FetchError> {
        let body = fetch::fetch_page(&self.client, &self.url).await?;
        extract(&body, self.client.targeted_table_ids())
    }

    /// Like [`fetch`](Self::fetch), but folds every outcome into a [`FetchResult`].
    pub async fn run(self) -> FetchResult {
        self.fetch().await.into()
    }
}

/// Scrapes `url` and returns the uniform result envelope. Never fails.
pub async fn scrape_html(client: &FetchClient, url: &str) -> FetchResult {
    HtmlBuilder::new(client, url).run().await
}
