use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use storelens_client::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "storelens")]
#[command(about = "Explore a product catalog: stats, charts, search, detail", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive terminal dashboard (default when no command is given)
    Dashboard,

    /// List catalog products, optionally narrowed by search text and category
    Products {
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Summary statistics and price/category distributions
    Stats,

    /// Show one product by id
    Show {
        /// Product identifier, forwarded verbatim to the catalog
        id: String,
    },
}
