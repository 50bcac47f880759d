//! Admin Dashboard Example
//!
//! Loads every dashboard section and prints a short report. Notices are
//! drained from the notice channel after each step.
//!
//! Run: STOREFRONT_API_TOKEN=... cargo run --example admin_dashboard

use storefront_client::logger::init_logger_with_level;
use storefront_client::{AdminDashboard, ClientConfig, Notice, Notifier, StorefrontClient};
use tokio::sync::mpsc::UnboundedReceiver;

fn print_notices(rx: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = rx.try_recv() {
        match notice {
            Notice::Success(msg) => println!("  ✅ {}", msg),
            Notice::Error(msg) => println!("  ❌ {}", msg),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger_with_level(Some("warn"), false);

    let config = ClientConfig::from_env();
    if config.token.is_none() {
        anyhow::bail!("STOREFRONT_API_TOKEN is required for admin endpoints");
    }
    let client = StorefrontClient::from_config(&config)?;

    let (notifier, mut rx) = Notifier::channel();
    let mut dashboard = AdminDashboard::new(client, notifier);

    println!("\n🛠  Admin dashboard");
    println!("=====================================\n");

    let failed = dashboard.load_all().await;
    print_notices(&mut rx);
    if failed > 0 {
        println!("  {} section(s) unavailable\n", failed);
    }

    if let Some(summary) = dashboard.summary() {
        println!("Products:   {}", summary.products);
        println!("Orders:     {} ({} in 30d)", summary.orders, summary.orders_30d);
        println!("Users:      {}", summary.users);
        println!("Sales 30d:  {}", summary.sales_30d);
    }

    println!("\nLow stock:");
    for item in dashboard.low_stock() {
        println!("  • {:<32} {}", item.name, item.stock_quantity);
    }

    println!("\nCoupons:");
    for coupon in dashboard.coupons().iter() {
        let state = if coupon.active { "active" } else { "inactive" };
        println!("  • {:<16} {}", coupon.code, state);
    }

    println!("\nRecent product changes: {}", dashboard.product_audit().len());
    println!("Recent content changes: {}", dashboard.content_audit().len());

    Ok(())
}
