//! Public client surface + builder.
//! Defaults (UA, targeted table ids) live in `constants`.

mod constants;

use crate::core::FetchError;
use constants::{DEFAULT_TARGETED_TABLE_IDS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Shared configuration for every fetch: the HTTP client and the extraction targets.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    targeted_table_ids: Vec<String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FetchClient {
    /// Create a new builder.
    pub fn builder() -> FetchClientBuilder {
        FetchClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Table ids tried, in order, by targeted extraction.
    pub fn targeted_table_ids(&self) -> &[String] {
        &self.targeted_table_ids
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FetchClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    targeted_table_ids: Option<Vec<String>>,
}

impl FetchClientBuilder {
    /// Override the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Add one table id to the targeted-extraction list (after the defaults).
    #[must_use]
    pub fn targeted_table_id(mut self, id: impl Into<String>) -> Self {
        self.targeted_table_ids
            .get_or_insert_with(default_targeted_ids)
            .push(id.into());
        self
    }

    /// Replace the targeted-extraction list entirely. An empty list disables
    /// targeted extraction.
    #[must_use]
    pub fn targeted_table_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targeted_table_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the underlying HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn build(self) -> Result<FetchClient, FetchError> {
        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FetchClient {
            http,
            targeted_table_ids: self
                .targeted_table_ids
                .unwrap_or_else(default_targeted_ids),
        })
    }
}

fn default_targeted_ids() -> Vec<String> {
    DEFAULT_TARGETED_TABLE_IDS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
