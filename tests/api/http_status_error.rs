use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn api_returns_status_error_on_non_2xx() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/2.5/weather");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"cod":401,"message":"Invalid API key"}"#);
    });

    let client = common::client();
    let err = tabfetch::ApiBuilder::new(&client, server.url("/data/2.5/weather"))
        .api_key("wrong")
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        tabfetch::FetchError::Status { status, url } => {
            assert_eq!(status, 401);
            assert!(url.contains("/data/2.5/weather"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_envelope_on_server_error_has_only_the_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/flaky");
        then.status(500).body("[]");
    });

    let result = tabfetch::fetch_api(&common::client(), &server.url("/flaky"), None, &[]).await;

    assert!(!result.success());
    assert!(result.json().is_none());
    assert!(result.table().is_none());
    assert!(!result.error().unwrap().is_empty());
}
