pub mod dashboard;
pub mod products;
pub mod show;
pub mod stats;
