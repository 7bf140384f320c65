pub mod detail;
pub mod products;
pub mod stats;
pub mod tui;

/// Truncate and normalize a string for one-line display.
/// - Replaces newlines with spaces and collapses runs of whitespace
/// - Respects UTF-8 character boundaries
pub(crate) fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Fixed-width block bar, filled proportionally to `value / max`.
pub(crate) fn block_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Rating column text: "4.1 (200)", or a dash when the product has none.
pub(crate) fn rating_text(rating: Option<&storelens_types::Rating>) -> String {
    match rating {
        Some(r) => format!("{} ({})", r.rate, r.count),
        None => "-".to_string(),
    }
}
