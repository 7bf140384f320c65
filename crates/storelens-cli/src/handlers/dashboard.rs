use crate::ui;
use anyhow::Result;
use storelens_client::CatalogClient;
use tokio::runtime::Runtime;

pub fn handle(runtime: &Runtime, client: CatalogClient) -> Result<()> {
    ui::tui::run(runtime, client)
}
