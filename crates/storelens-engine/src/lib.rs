// Engine module - Pure catalog computations (statistics, distributions, filtering)
// This layer sits between fetched products (types) and CLI presentation

pub mod filter;
pub mod summary;

pub use filter::{categories, filter_products};
pub use summary::{CategoryCount, PriceBucket, Stats, category_histogram, price_histogram, summarize};
