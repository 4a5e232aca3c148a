use tabfetch::{FetchClient, ToDataFrame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FetchClient::default();
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.worldometers.info/coronavirus/".to_string());

    let result = tabfetch::scrape_html(&client, &url).await;
    match result.into_table() {
        Some(table) => {
            let df = table.to_dataframe()?;
            let (rows, cols) = df.shape();
            println!("DataFrame: {rows} rows x {cols} columns");
            for name in df.get_column_names() {
                println!("  {name}");
            }
        }
        None => println!("No table on {url}"),
    }

    Ok(())
}
