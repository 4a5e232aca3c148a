#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `TABFETCH_RECORD=1`, the body is saved as a fixture via `fixtures`
/// under `<endpoint>/<name>.<ext>`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _name: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("TABFETCH_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _name, _ext, &text)
        {
            tracing::warn!(endpoint = _endpoint, name = _name, error = %e, "failed to record fixture");
        }
    }

    Ok(text)
}

/// Turns a URL into a file-name-safe fixture key (`example.com/a/b` -> `example.com_a_b`).
pub(crate) fn fixture_name(url: &url::Url) -> String {
    let mut name = String::new();
    name.push_str(url.host_str().unwrap_or("local"));
    for seg in url.path_segments().into_iter().flatten().filter(|s| !s.is_empty()) {
        name.push('_');
        name.push_str(seg);
    }
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}
