//! Terminal rendering for catalog pages and variant details.

use artos_commerce::card::VariantSelection;
use artos_commerce::catalog::{Page, Product, Variant};
use artos_commerce::price::format_usd;

/// Print a catalog page as a list of product cards with a pagination
/// footer.
pub fn page(page: &Page<Product>) {
    println!("Total items: {}", page.total_items);
    println!();

    if page.is_empty() {
        println!("No products found.");
    } else {
        for product in &page.items {
            // Products without variants are not renderable as cards.
            if let Ok(selection) = VariantSelection::new(product.clone()) {
                card(&selection);
            }
        }
    }

    println!();
    println!("Page {} of {}", page.current_page, page.total_pages);
}

fn card(selection: &VariantSelection) {
    let card = selection.card();
    println!("- {} ({})", card.display_name, card.display_price);
    if let Some(src) = &card.main_image {
        println!("  image: {}", src);
    }
    if !card.options.is_empty() {
        let tags: Vec<&str> = card.options.iter().map(|o| o.name.as_str()).collect();
        println!("  options: {}", tags.join(", "));
    }
    println!("  stock: {}", card.stock_label);
}

/// Print the detail view for a single variant.
pub fn variant(variant: &Variant) {
    println!("{}", variant.name);
    println!("Price: {}", format_usd(variant.price));
    println!("SKU: {}", variant.sku);
    println!("Stock: {}", variant.stock_label());
    if !variant.product_options.is_empty() {
        let tags: Vec<&str> = variant
            .product_options
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        println!("Options: {}", tags.join(", "));
    }
    if let Some(link) = variant.primary_file() {
        println!("Image: {}", link.file.path);
    }
}
