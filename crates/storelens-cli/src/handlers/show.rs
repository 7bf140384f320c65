use crate::types::OutputFormat;
use crate::views;
use anyhow::{Result, bail};
use storelens_client::CatalogClient;
use tokio::runtime::Runtime;

pub fn handle(runtime: &Runtime, client: &CatalogClient, id: &str, format: OutputFormat) -> Result<()> {
    let product = runtime.block_on(client.fetch_one(id))?;

    let Some(product) = product else {
        // The fetch itself succeeded; the id just doesn't name a product.
        bail!("Product {} not found", id);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&product)?),
        OutputFormat::Plain => views::detail::print_detail(&product),
    }

    Ok(())
}
