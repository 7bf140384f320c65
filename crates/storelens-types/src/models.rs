use serde::{Deserialize, Serialize};

/// One catalog entry, deserialized verbatim from the upstream JSON.
///
/// The upstream source is trusted: ids are assumed unique within a fetched
/// list and prices non-negative. Nothing here validates those invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Absent for products nobody has rated yet.
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}
