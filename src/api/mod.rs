//! JSON API fetching: one GET, decoded and, when record-shaped, tabulated.

mod fetch;
mod model;
mod tabulate;

pub use model::ApiResponse;
pub use tabulate::tabulate;

use crate::core::{FetchClient, FetchError, FetchResult};

/// A builder for one call against a JSON endpoint.
pub struct ApiBuilder {
    client: FetchClient,
    url: String,
    api_key: Option<String>,
    params: Vec<(String, String)>,
}

impl ApiBuilder {
    /// Creates a new `ApiBuilder` for a given endpoint URL.
    pub fn new(client: &FetchClient, url: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            url: url.into(),
            api_key: None,
            params: Vec::new(),
        }
    }

    /// Sends `key` as a bearer token. An empty key sends no `Authorization` header.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Appends one query-string parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends several query-string parameters, in iteration order.
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the URL is invalid, the request fails or
    /// returns a non-2xx status, or the body is not valid JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.url)))]
    pub async fn fetch(self) -> Result<ApiResponse, FetchError> {
        let json = fetch::fetch_json(
            &self.client,
            &self.url,
            self.api_key.as_deref(),
            &self.params,
        )
        .await?;
        let table = tabulate(&json);

        #[cfg(feature = "tracing")]
        tracing::debug!(tabular = table.is_some(), "api response decoded");

        Ok(ApiResponse { json, table })
    }

    /// Like [`fetch`](Self::fetch), but folds every outcome into a [`FetchResult`].
    pub async fn run(self) -> FetchResult {
        self.fetch().await.into()
    }
}

/// Calls `url` once and returns the uniform result envelope. Never fails.
///
/// `api_key`, when present and non-empty, is sent as a bearer token; `params`
/// are appended to the query string.
pub async fn fetch_api(
    client: &FetchClient,
    url: &str,
    api_key: Option<&str>,
    params: &[(&str, &str)],
) -> FetchResult {
    let mut builder = ApiBuilder::new(client, url).params(params.iter().copied());
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    builder.run().await
}
