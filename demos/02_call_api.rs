use tabfetch::FetchClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tabfetch::init_tracing();

    let client = FetchClient::default();

    // 1. A public endpoint, no key required.
    let result = tabfetch::fetch_api(
        &client,
        "https://api.coingecko.com/api/v3/coins/markets",
        None,
        &[("vs_currency", "usd"), ("per_page", "5"), ("page", "1")],
    )
    .await;

    if let Some(err) = result.error() {
        println!("Error: {err}");
    } else if let Some(table) = result.table() {
        let wanted = ["id", "symbol", "current_price"];
        let cols: Vec<usize> = wanted.iter().filter_map(|c| table.column_index(c)).collect();
        println!("--- {} markets ---", table.len());
        for row in table.rows() {
            let cells: Vec<&str> = cols.iter().map(|&i| row[i].as_str()).collect();
            println!("  {}", cells.join("  "));
        }
    }
    println!();

    // 2. An authenticated endpoint; the key comes from the environment.
    if let Ok(key) = std::env::var("WEATHER_API_KEY") {
        let resp = tabfetch::ApiBuilder::new(&client, "https://api.openweathermap.org/data/2.5/weather")
            .api_key(key)
            .param("q", "London")
            .fetch()
            .await?;
        println!("{}", serde_json::to_string_pretty(&resp.json)?);
    }

    Ok(())
}
