use super::{rating_text, truncate_for_display};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use storelens_types::Product;

const ID_WIDTH: usize = 5;
const CATEGORY_WIDTH: usize = 18;
const PRICE_WIDTH: usize = 9;
const RATING_WIDTH: usize = 11;
const FALLBACK_TERM_WIDTH: usize = 100;

pub fn print_products(items: &[Product]) {
    if items.is_empty() {
        println!("No products match your query");
        return;
    }

    let term_width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(FALLBACK_TERM_WIDTH);
    let fixed = ID_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH + RATING_WIDTH + 8;
    let title_width = term_width.saturating_sub(fixed).clamp(20, 60);

    let header = format!(
        "{:<idw$}  {:<tw$}  {:<cw$}  {:>pw$}  {:<rw$}",
        "ID",
        "TITLE",
        "CATEGORY",
        "PRICE",
        "RATING",
        idw = ID_WIDTH,
        tw = title_width,
        cw = CATEGORY_WIDTH,
        pw = PRICE_WIDTH,
        rw = RATING_WIDTH,
    );
    if std::io::stdout().is_terminal() {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "-".repeat(header.chars().count()));

    for product in items {
        println!(
            "{:<idw$}  {:<tw$}  {:<cw$}  {:>pw$}  {:<rw$}",
            product.id,
            truncate_for_display(&product.title, title_width),
            truncate_for_display(&product.category, CATEGORY_WIDTH),
            format!("${:.2}", product.price),
            rating_text(product.rating.as_ref()),
            idw = ID_WIDTH,
            tw = title_width,
            cw = CATEGORY_WIDTH,
            pw = PRICE_WIDTH,
            rw = RATING_WIDTH,
        );
    }

    println!();
    println!("{} products", items.len());
}
