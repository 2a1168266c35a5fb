//! Order book demo
//!
//! Opens a store from a YAML configuration, records a few purchases and
//! prints the list tabs the way a list screen would show them.
//!
//! ```sh
//! cargo run --example order_book
//! SHOPPIER_CONFIG=shoppier.yaml cargo run --example order_book
//! ```

use anyhow::Context;
use shoppier::prelude::*;
use tracing_subscriber::EnvFilter;

const PHOTO: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

fn print_tab(title: &str, orders: &[Order], currency: &str) {
    println!("\n{} ({})", title, orders.len());
    for card in OrderCard::from_orders(orders, currency) {
        println!(
            "  {:<12} {:>10}  {}  [{} bytes]",
            card.name,
            card.price_label,
            card.stamp,
            card.thumbnail.len()
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Without a config file the demo writes to a throwaway directory
    let scratch = tempfile::tempdir()?;
    let config = match std::env::var("SHOPPIER_CONFIG") {
        Ok(path) => StoreConfig::from_yaml_file(&path)
            .with_context(|| format!("loading {}", path))?,
        Err(_) => StoreConfig::lmdb(scratch.path()),
    };

    let store = config.open()?;
    tracing::info!(backend = store.backend_name(), "store ready");

    let now = Utc::now();
    let bag = store
        .create("Bag A", "199,90", Some(now.subtracting(2)), Some(PHOTO.to_vec()))
        .await?;
    let shoes = store
        .create("Sneakers", " 749.5 ", Some(now.subtracting(1)), Some(PHOTO.to_vec()))
        .await?;
    let scarf = store
        .create("Scarf", "abc", None, Some(PHOTO.to_vec()))
        .await?;

    if let Err(err) = store.create("Hat", "20", None, None).await {
        println!("rejected Hat: {} ({})", err, err.error_code());
    }

    store.set_status(&bag.id, OrderStatus::Closed).await?;
    store.delete(&scarf.id).await?;

    print_tab("Open", &store.list(StatusFilter::Open).await?, &config.currency);
    print_tab("Closed", &store.list(StatusFilter::Closed).await?, &config.currency);

    let this_month = store.placed_within(DateRange::month(now)).await?;
    println!("\n{} order(s) placed in {}", this_month.len(), now.full_month_name());

    let found = store.search("name", &shoes.name).await?;
    println!("search name={} -> {} match(es)", shoes.name, found.len());

    Ok(())
}
