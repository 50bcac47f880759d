//! Catalog Browsing Example
//!
//! Walks the shop listing against a running backend:
//! 1. Load categories and the first page
//! 2. Narrow by search text and tag
//! 3. Open the first product's detail
//!
//! Run: cargo run --example browse_catalog -- [search] [tag] [sort]

use storefront_client::logger::init_logger;
use storefront_client::{
    ClientConfig, FilterChange, ProductDetail, ProductListing, SortOption, StorefrontClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = ClientConfig::from_env();
    let client = StorefrontClient::from_config(&config)?;

    println!("\n🛍  Storefront catalog ({})", config.api_url());
    println!("=====================================\n");

    let health = client.health().await?;
    println!("Backend status: {}", health.status);

    let mut listing = ProductListing::new(config.page_size);
    listing.load_categories(&client).await;
    println!(
        "Categories: {}",
        listing
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut args = std::env::args().skip(1);
    if let Some(search) = args.next() {
        listing.apply(FilterChange::Search(search));
    }
    if let Some(tag) = args.next() {
        listing.apply(FilterChange::AddTag(tag));
    }
    if let Some(sort) = args.next() {
        match SortOption::ALL.iter().find(|s| s.as_str() == sort) {
            Some(option) => {
                listing.apply(FilterChange::Sort(*option));
            }
            None => {
                println!("Unknown sort '{}'. Available:", sort);
                for option in SortOption::ALL {
                    println!("  {:<12} {}", option.as_str(), option.label());
                }
            }
        }
    }
    println!("Sorted by: {}", listing.query().sort().label());
    listing.refresh(&client).await;

    if let Some(error) = listing.last_error() {
        anyhow::bail!("listing failed: {}", error);
    }

    if let Some(meta) = listing.meta() {
        println!(
            "\nPage {}/{} ({} products)",
            meta.page,
            meta.last_page(),
            meta.total_items
        );
    }
    for product in listing.items() {
        println!("  • {:<32} {} {}", product.name, product.price, product.currency);
    }
    if let Some(tags) = listing.facets().tags() {
        println!("Tags on this page: {:?}", tags);
    }

    let Some(first) = listing.items().first() else {
        println!("\nNo products match.");
        return Ok(());
    };

    let mut detail = ProductDetail::new();
    detail.load(&client, &first.slug).await?;
    if let Some(product) = detail.product() {
        println!("\n📦 {}", product.name);
        println!("   Variants: {}", product.variants.len());
        println!("   Images:   {}", product.images.len());
        if let Some(price) = detail.unit_price() {
            println!("   Price:    {} {}", price, product.currency);
        }
    }

    Ok(())
}
