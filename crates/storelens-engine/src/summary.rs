use serde::{Deserialize, Serialize};
use storelens_types::Product;

/// Summary statistics over one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub avg_price: f64,
    pub median_price: f64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Fixed half-open price intervals, last one unbounded above.
const PRICE_BUCKETS: [(&str, f64, f64); 4] = [
    ("$0-25", 0.0, 25.0),
    ("$25-50", 25.0, 50.0),
    ("$50-100", 50.0, 100.0),
    ("$100+", 100.0, f64::INFINITY),
];

pub fn summarize(items: &[Product]) -> Stats {
    if items.is_empty() {
        // All-zero by policy: avoids divide-by-zero, renders as "0" cards.
        return Stats {
            total: 0,
            avg_price: 0.0,
            median_price: 0.0,
            avg_rating: 0.0,
        };
    }

    let mut prices: Vec<f64> = items.iter().map(|p| p.price).filter(|p| p.is_finite()).collect();
    prices.sort_by(|a, b| a.total_cmp(b));

    let avg_price = if prices.is_empty() {
        0.0
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    };

    let median_price = median_of_sorted(&prices);

    // Missing ratings count as 0.0 rather than being excluded from the mean.
    let rating_sum: f64 = items
        .iter()
        .map(|p| p.rating.as_ref().map(|r| r.rate).unwrap_or(0.0))
        .sum();
    let avg_rating = rating_sum / items.len() as f64;

    Stats {
        total: items.len(),
        avg_price,
        median_price,
        avg_rating,
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Count items per fixed price interval, in declared bucket order.
/// Every item lands in exactly one bucket (`min <= price < max`).
pub fn price_histogram(items: &[Product]) -> Vec<PriceBucket> {
    PRICE_BUCKETS
        .iter()
        .map(|(label, min, max)| PriceBucket {
            label: (*label).to_string(),
            count: items.iter().filter(|p| p.price >= *min && p.price < *max).count(),
        })
        .collect()
}

/// Count items per distinct category, in first-seen order of the input.
pub fn category_histogram(items: &[Product]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|c| c.category == item.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: item.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}
