use serde_json::Value;

use crate::core::{FetchError, FetchResult, Table};

/// A decoded API payload plus its tabular view, when it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The response body as JSON.
    pub json: Value,
    /// The payload reshaped into rows, for objects and lists of objects.
    pub table: Option<Table>,
}

impl From<ApiResponse> for FetchResult {
    fn from(r: ApiResponse) -> Self {
        Self::from_json(r.json, r.table)
    }
}

impl From<Result<ApiResponse, FetchError>> for FetchResult {
    fn from(r: Result<ApiResponse, FetchError>) -> Self {
        match r {
            Ok(resp) => resp.into(),
            Err(err) => Self::failure(&err),
        }
    }
}
