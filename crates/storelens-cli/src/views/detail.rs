use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use storelens_types::Product;

pub fn print_detail(product: &Product) {
    if std::io::stdout().is_terminal() {
        println!("{}", product.title.bold());
    } else {
        println!("{}", product.title);
    }
    println!("  {:<10} {}", "Category", product.category);
    println!("  {:<10} ${:.2}", "Price", product.price);
    match &product.rating {
        Some(rating) => println!("  {:<10} {} ({} reviews)", "Rating", rating.rate, rating.count),
        None => println!("  {:<10} not yet rated", "Rating"),
    }
    println!("  {:<10} {}", "Image", product.image);
    println!();
    println!("{}", product.description);
}
