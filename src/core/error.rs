use std::error::Error as _;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An error occurred during an HTTP request (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page was fetched but held neither a usable table nor readable text.
    #[error("No structured or readable content found")]
    NoContent,
}

/// Coarse classification of a [`FetchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, DNS failure, invalid URL or a non-2xx status.
    Transport,
    /// Malformed JSON.
    Parse,
    /// The request succeeded but nothing usable was found.
    NoData,
}

impl FetchError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Url(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::Json(_) => ErrorKind::Parse,
            Self::NoContent => ErrorKind::NoData,
        }
    }

    /// Renders the error and its whole source chain as one human-readable line.
    ///
    /// `reqwest` keeps the useful part of a transport failure (e.g. "Connection
    /// refused") several levels down the source chain, so the plain `Display`
    /// output alone is rarely enough for an end user.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = match self {
            Self::Http(e) if e.is_connect() => format!("connection failed: {self}"),
            Self::Http(e) if e.is_timeout() => format!("request timed out: {self}"),
            _ => self.to_string(),
        };

        let mut source = self.source();
        // `Http`/`Url`/`Json` already print their direct source via `{0}`.
        if let Some(first) = source
            && out.ends_with(&first.to_string())
        {
            source = first.source();
        }
        while let Some(cause) = source {
            let text = cause.to_string();
            if !out.contains(&text) {
                out.push_str(": ");
                out.push_str(&text);
            }
            source = cause.source();
        }
        out
    }
}
