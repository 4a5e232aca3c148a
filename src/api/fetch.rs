use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::core::{FetchClient, FetchError, net};

/// One GET against a JSON endpoint; the body must decode as JSON.
///
/// `params` are appended after any query already present in `url`.
pub(super) async fn fetch_json(
    client: &FetchClient,
    url: &str,
    api_key: Option<&str>,
    params: &[(String, String)],
) -> Result<Value, FetchError> {
    let mut url = Url::parse(url)?;
    if !params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params {
            qp.append_pair(k, v);
        }
    }

    let mut req = client
        .http()
        .get(url.clone())
        .header(ACCEPT, "application/json");
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        req = req.bearer_auth(key);
    }

    let resp = req.send().await?;

    if !resp.status().is_success() {
        return Err(FetchError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "api", &net::fixture_name(&url), "json").await?;
    Ok(serde_json::from_str(&body)?)
}
