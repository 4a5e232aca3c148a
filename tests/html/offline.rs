use httpmock::{Method::GET, MockServer};
use tabfetch::{Extraction, HtmlBuilder, Strategy};

use crate::common;

#[tokio::test]
async fn generic_table_with_header_section() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/catalog");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::read_fixture("html/catalog.html"));
    });

    let client = common::client();
    let result = tabfetch::scrape_html(&client, &server.url("/catalog")).await;
    mock.assert();

    assert!(result.success());
    assert!(result.error().is_none() && result.raw().is_none());
    let table = result.table().unwrap();
    assert_eq!(table.headers(), ["Part", "Material", "Price"]);
    assert_eq!(table.width(), 3);
    assert_eq!(table.len(), 4);
    assert_eq!(table.rows()[0], ["Hex bolt", "Steel", "0.12"]);
}

#[tokio::test]
async fn targeted_table_beats_earlier_generic_tables() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/coronavirus/");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::read_fixture("html/stats_page.html"));
    });

    let client = common::client();
    let extraction = HtmlBuilder::new(&client, server.url("/coronavirus/"))
        .fetch()
        .await
        .unwrap();
    mock.assert();

    let Extraction::Table { table, strategy } = extraction else {
        panic!("expected a table");
    };
    assert_eq!(strategy, Strategy::Targeted);
    assert_eq!(
        table.headers(),
        ["#", "Country, Other", "Total Cases", "New Cases"]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0], ["1", "USA", "111,820,082", "+1,204"]);
    assert_eq!(table.rows()[1][3], "");
}

#[tokio::test]
async fn without_targeted_ids_the_first_table_is_used() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/coronavirus/");
        then.status(200)
            .body(common::read_fixture("html/stats_page.html"));
    });

    let client = tabfetch::FetchClient::builder()
        .targeted_table_ids(Vec::<String>::new())
        .build()
        .unwrap();
    let extraction = HtmlBuilder::new(&client, server.url("/coronavirus/"))
        .fetch()
        .await
        .unwrap();

    let Extraction::Table { table, strategy } = extraction else {
        panic!("expected a table");
    };
    assert_eq!(strategy, Strategy::Generic);
    assert_eq!(table.headers(), ["Home", "About"]);
    assert_eq!(table.rows(), [vec!["News".to_string(), "Contact".to_string()]]);
}

#[tokio::test]
async fn custom_targeted_id_is_honoured() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200).body(
            r#"<table><tr><th>a</th></tr><tr><td>1</td></tr></table>
               <table id="prices"><tr><th>sku</th><th>eur</th></tr><tr><td>X1</td><td>9</td></tr></table>"#,
        );
    });

    let client = tabfetch::FetchClient::builder()
        .targeted_table_id("prices")
        .build()
        .unwrap();
    let result = tabfetch::scrape_html(&client, &server.url("/page")).await;

    let table = result.table().unwrap();
    assert_eq!(table.headers(), ["sku", "eur"]);
    assert_eq!(table.rows()[0], ["X1", "9"]);
}

#[tokio::test]
async fn paragraphs_come_back_as_raw_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/notes");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::read_fixture("html/article.html"));
    });

    let client = common::client();
    let result = tabfetch::scrape_html(&client, &server.url("/notes")).await;

    assert!(result.success());
    assert!(result.table().is_none());
    assert_eq!(
        result.raw().unwrap(),
        [
            "The survey started at dawn.",
            "Teams split along the northern ridge.",
            "Weather held until noon.",
            "Samples were logged on site.",
            "Two instruments needed recalibration.",
            "All teams returned by dusk.",
        ]
    );
}

#[tokio::test]
async fn repeated_scrapes_are_identical() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/catalog");
        then.status(200)
            .body(common::read_fixture("html/catalog.html"));
    });

    let client = common::client();
    let first = tabfetch::scrape_html(&client, &server.url("/catalog")).await;
    let second = tabfetch::scrape_html(&client, &server.url("/catalog")).await;

    mock.assert_calls(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ua")
            .header("user-agent", "Mozilla/5.0 (tabfetch-test)");
        then.status(200).body("<p>ok</p>");
    });

    let client = tabfetch::FetchClient::builder()
        .user_agent("Mozilla/5.0 (tabfetch-test)")
        .build()
        .unwrap();
    let result = tabfetch::scrape_html(&client, &server.url("/ua")).await;

    mock.assert();
    assert_eq!(result.raw().unwrap(), ["ok"]);
}

#[tokio::test]
async fn sends_browser_user_agent_by_default() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ua-default").header(
            "user-agent",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
        );
        then.status(200).body("<p>ok</p>");
    });

    let result = tabfetch::scrape_html(&common::client(), &server.url("/ua-default")).await;

    mock.assert();
    assert!(result.success());
}
