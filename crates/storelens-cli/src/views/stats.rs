use super::block_bar;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use storelens_engine::{CategoryCount, PriceBucket, Stats};

const BAR_WIDTH: usize = 24;

pub fn print_stats(stats: &Stats, prices: &[PriceBucket], categories: &[CategoryCount]) {
    section("Catalog summary");
    println!("  {:<16} {}", "Total products", stats.total);
    println!("  {:<16} ${:.2}", "Average price", stats.avg_price);
    println!("  {:<16} ${:.2}", "Median price", stats.median_price);
    println!("  {:<16} {:.2}", "Average rating", stats.avg_rating);

    if stats.total == 0 {
        return;
    }

    let price_max = prices.iter().map(|b| b.count).max().unwrap_or(0);
    println!();
    section("Price distribution");
    for bucket in prices {
        println!(
            "  {:<8} {} {}",
            bucket.label,
            block_bar(bucket.count, price_max, BAR_WIDTH),
            bucket.count
        );
    }

    let label_width = categories.iter().map(|c| c.category.chars().count()).max().unwrap_or(0);
    println!();
    section("Category distribution");
    for entry in categories {
        let share = entry.count as f64 / stats.total as f64 * 100.0;
        println!(
            "  {:<lw$} {} {} ({:.0}%)",
            entry.category,
            block_bar(entry.count, stats.total, BAR_WIDTH),
            entry.count,
            share,
            lw = label_width,
        );
    }
}

fn section(title: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}
