use reqwest::header::ACCEPT;
use url::Url;

use crate::core::{FetchClient, FetchError, net};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// One GET for the page body; any non-2xx status is an error.
pub(super) async fn fetch_page(client: &FetchClient, url: &str) -> Result<String, FetchError> {
    let url = Url::parse(url)?;

    let resp = client
        .http()
        .get(url.clone())
        .header(ACCEPT, ACCEPT_HTML)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(FetchError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "html", &net::fixture_name(&url), "html").await?;
    Ok(body)
}
