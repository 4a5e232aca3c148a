use std::time::Duration;

use tabfetch::{Extraction, FetchClient, HtmlBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tabfetch::init_tracing();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.worldometers.info/coronavirus/".to_string());

    // 1. A client with a 10-second timeout and one extra targeted table id.
    let client = FetchClient::builder()
        .timeout(Duration::from_secs(10))
        .targeted_table_id("example_prices")
        .build()?;

    // 2. The typed path: tells which tier of the policy found what.
    match HtmlBuilder::new(&client, &url).fetch().await? {
        Extraction::Table { table, strategy } => {
            println!("--- {strategy:?} table: {} x {} ---", table.len(), table.width());
            println!("{}", table.headers().join(" | "));
            for row in table.rows().iter().take(10) {
                println!("{}", row.join(" | "));
            }
        }
        Extraction::Text(blocks) => {
            println!("--- No table found, {} text blocks ---", blocks.len());
            for block in blocks {
                println!("* {block}");
            }
        }
    }
    println!();

    // 3. The envelope path, as a UI layer would consume it.
    let result = tabfetch::scrape_html(&client, &url).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
