use storelens_types::Product;

/// Sentinel category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Narrow a product list by free-text search and category.
///
/// The category condition is an exact, case-sensitive match (disabled by
/// [`ALL_CATEGORIES`]). The text condition lower-cases the trimmed query and
/// keeps items whose lower-cased title or description contains it; an empty
/// query passes everything. Both conditions are ANDed and input order is
/// preserved.
pub fn filter_products(items: &[Product], query: &str, category: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| {
            if category != ALL_CATEGORIES && item.category != category {
                return false;
            }
            if needle.is_empty() {
                return true;
            }
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Distinct category values in first-seen order, preceded by [`ALL_CATEGORIES`].
pub fn categories(items: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !out[1..].contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}
