//! # Marketplace Walkthrough
//!
//! Drives one session end to end against a fresh store and prints the
//! resulting state as JSON.
//!
//! ## Usage
//! ```bash
//! # Defaults (config file from the platform config dir, if any)
//! cargo run -p farmlink-store --bin farmlink-demo
//!
//! # Explicit config file, no simulated auth delay
//! FARMLINK_AUTH_DELAY_MS=0 cargo run -p farmlink-store --bin farmlink-demo -- --config ./farmlink.toml
//! ```

use std::env;
use std::path::PathBuf;

use farmlink_core::{Money, NewProduct, Role};
use farmlink_store::{MockAuth, SharedStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("FarmLink marketplace walkthrough");
                println!();
                println!("Usage: farmlink-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file (default: platform config dir)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = StoreConfig::load_or_default(config_path);
    let store = SharedStore::new(&config);
    let auth = MockAuth::new(store.clone(), &config);

    // Vendor lists a product.
    let vendor = auth
        .sign_up(
            "Hillside Apiary",
            "hello@hillside.farm",
            "honeybee",
            Some(Role::Vendor),
        )
        .await?;
    let honey = store.add_product(NewProduct {
        name: "Wildflower Honey".to_string(),
        category: "Pantry".to_string(),
        price: Money::from_cents(1250),
        quantity: 24,
        image: String::new(),
    })?;
    auth.sign_out();

    // Shop owner fills a mixed-vendor cart and checks out.
    let owner = auth.sign_in("sam@cornershop.com", "anything").await?;
    for product in store.products().iter().take(2) {
        store.add_to_cart(product, 2)?;
    }
    store.add_to_cart(&honey, 3)?;

    let shop = store.shop_dashboard()?;
    info!(
        owner = %owner.name,
        items = shop.cart_item_count,
        total = %config.format_currency(shop.cart_total),
        "Cart ready"
    );

    let orders = store.place_order()?;
    for order in &orders {
        info!(
            order_id = %order.id,
            vendor_id = %order.vendor_id,
            total = %config.format_currency(order.total),
            "Order created"
        );
    }
    store.send_message(&vendor.id, "Can you deliver the honey on Friday?")?;

    // Vendor checks in.
    store.set_user(Some(vendor));
    let dashboard = store.vendor_dashboard()?;
    info!(
        products = dashboard.products.len(),
        orders = dashboard.orders.len(),
        unread = dashboard.unread_messages,
        revenue = %config.format_currency(dashboard.total_revenue),
        "Vendor dashboard"
    );

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,farmlink_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
