use crate::types::OutputFormat;
use crate::views;
use anyhow::Result;
use storelens_client::CatalogClient;
use storelens_engine::filter_products;
use tokio::runtime::Runtime;

pub fn handle(
    runtime: &Runtime,
    client: &CatalogClient,
    query: &str,
    category: &str,
    format: OutputFormat,
) -> Result<()> {
    let items = runtime.block_on(client.fetch_all())?;
    let filtered = filter_products(&items, query, category);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "total": filtered.len(),
                "products": filtered,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => views::products::print_products(&filtered),
    }

    Ok(())
}
