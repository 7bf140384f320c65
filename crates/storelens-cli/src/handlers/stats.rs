use crate::types::OutputFormat;
use crate::views;
use anyhow::Result;
use storelens_client::CatalogClient;
use storelens_engine::{category_histogram, price_histogram, summarize};
use tokio::runtime::Runtime;

pub fn handle(runtime: &Runtime, client: &CatalogClient, format: OutputFormat) -> Result<()> {
    let items = runtime.block_on(client.fetch_all())?;

    let stats = summarize(&items);
    let prices = price_histogram(&items);
    let categories = category_histogram(&items);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "stats": stats,
                "price_histogram": prices,
                "category_histogram": categories,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => views::stats::print_stats(&stats, &prices, &categories),
    }

    Ok(())
}
