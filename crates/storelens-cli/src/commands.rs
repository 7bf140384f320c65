use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use storelens_client::CatalogClient;

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = CatalogClient::new(&cli.base_url)?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => handlers::dashboard::handle(&runtime, client),

        Commands::Products { query, category } => {
            handlers::products::handle(&runtime, &client, &query, &category, cli.format)
        }

        Commands::Stats => handlers::stats::handle(&runtime, &client, cli.format),

        Commands::Show { id } => handlers::show::handle(&runtime, &client, &id, cli.format),
    }
}
