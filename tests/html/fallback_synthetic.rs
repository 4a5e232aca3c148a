use httpmock::{Method::GET, MockServer};
use tabfetch::{ErrorKind, FetchError, HtmlBuilder};

use crate::common;

fn page(body: &str) -> String {
    format!("<!doctype html><html><head><title>t</title></head><body>{body}</body></html>")
}

#[tokio::test]
async fn rows_wider_than_headers_get_synthetic_columns() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/wide");
        then.status(200).body(page(
            "<table><thead><tr><th>name</th></tr></thead>
             <tbody><tr><td>a</td><td>1</td><td>x</td></tr><tr><td>b</td><td>2</td></tr></tbody></table>",
        ));
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/wide")).await;

    let table = result.table().unwrap();
    assert_eq!(table.headers(), ["name", "Column 1", "Column 2"]);
    assert!(table.rows().iter().all(|r| r.len() == 3));
}

#[tokio::test]
async fn headers_wider_than_rows_are_truncated() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/narrow");
        then.status(200).body(page(
            "<table><tr><th>a</th><th>b</th><th>c</th><th>d</th></tr><tr><td>1</td><td>2</td></tr></table>",
        ));
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/narrow")).await;

    let table = result.table().unwrap();
    assert_eq!(table.headers(), ["a", "b"]);
    assert_eq!(table.rows(), [vec!["1".to_string(), "2".to_string()]]);
}

#[tokio::test]
async fn header_only_tables_fall_back_to_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty-table");
        then.status(200).body(page(
            "<table><thead><tr><th>a</th></tr></thead><tbody></tbody></table><p>Nothing to show yet.</p>",
        ));
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/empty-table")).await;

    assert!(result.success());
    assert!(result.table().is_none());
    assert_eq!(result.raw().unwrap(), ["Nothing to show yet."]);
}

#[tokio::test]
async fn list_items_stand_in_for_missing_paragraphs() {
    let server = MockServer::start();
    let items: String = (1..=12).map(|i| format!("<li>step {i}</li>")).collect();
    server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200).body(page(&format!("<h2>Steps</h2><ol>{items}</ol>")));
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/list")).await;

    let raw = result.raw().unwrap();
    assert_eq!(raw.len(), tabfetch::html::TEXT_BLOCK_LIMIT);
    assert_eq!(raw[0], "Steps");
    assert_eq!(raw[1], "step 1");
}

#[tokio::test]
async fn page_without_content_is_a_no_data_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blank");
        then.status(200).body(page("<div><span></span></div><script>var x = 1;</script>"));
    });

    let client = common::client();
    let err = HtmlBuilder::new(&client, server.url("/blank"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::NoContent));
    assert_eq!(err.kind(), ErrorKind::NoData);

    let result = tabfetch::scrape_html(&client, &server.url("/blank")).await;
    assert!(!result.success());
    assert!(result.table().is_none() && result.raw().is_none());
    assert_eq!(
        result.error(),
        Some("No structured or readable content found")
    );
}
