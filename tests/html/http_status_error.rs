use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn scrape_returns_status_error_on_non_2xx() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("<p>not found</p>");
    });

    let client = common::client();
    let err = tabfetch::HtmlBuilder::new(&client, server.url("/missing"))
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        tabfetch::FetchError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.contains("/missing"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn scrape_envelope_on_server_error_has_only_the_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boom");
        then.status(503).body("<table><tr><th>a</th></tr><tr><td>1</td></tr></table>");
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/boom")).await;

    assert!(!result.success());
    assert!(result.table().is_none());
    assert!(result.raw().is_none());
    let err = result.error().unwrap();
    assert!(err.contains("503"), "unexpected error text: {err}");
}
