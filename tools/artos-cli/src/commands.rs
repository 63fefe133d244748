//! CLI command implementations.

use anyhow::Result;
use clap::Args;

use artos_commerce::ids::VariantId;
use artos_data::{CatalogBrowser, StoreClient};

use crate::render;

#[derive(Args)]
pub struct ProductsArgs {
    /// Page to display (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Products per page
    #[arg(long, default_value_t = 9)]
    pub limit: u32,
}

pub async fn products(client: StoreClient, args: ProductsArgs) -> Result<()> {
    let mut browser = CatalogBrowser::new(client, args.limit);

    // Land on page 1 first so the navigation bounds are known, then move
    // to the requested page.
    browser.go_to(1).await;
    if args.page != 1 && !browser.go_to(args.page).await {
        println!(
            "Page {} is out of range (1..={}).",
            args.page,
            browser.current().total_pages
        );
        return Ok(());
    }

    render::page(browser.current());
    Ok(())
}

#[derive(Args)]
pub struct VariantArgs {
    /// Variant identifier
    pub id: String,
}

pub async fn variant(client: StoreClient, args: VariantArgs) -> Result<()> {
    match client.fetch_variant(&VariantId::new(args.id)).await {
        Some(variant) => render::variant(&variant),
        None => println!("Variant not found."),
    }
    Ok(())
}
