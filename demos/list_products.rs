//! Fetches the product collection and prints the derived list under a few
//! filter and sort selections.
//!
//! Points at `http://localhost:3000/api` unless `PRODUCT_API_URL` is set;
//! when the API is unreachable the fallback dataset is shown instead.

use catalog_client::{ApiClient, Product, ProductListController, SortDirection, SortKey};

fn print_products(heading: &str, products: &[Product]) {
    println!("-- {heading} --");
    for product in products {
        println!(
            "  {:>8.2}  {:<24} stock {:>3}  [{}]",
            product.price,
            product.name,
            product.stock,
            product.category.as_deref().unwrap_or("-"),
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ApiClient::from_env()?;
    let mut controller = ProductListController::new(client);
    controller.load().await;

    if let Some(warning) = controller.warning() {
        println!("warning: {warning}\n");
    }

    print_products("default view (name ascending)", controller.derived_products());

    controller.set_in_stock(true);
    controller.set_sort_key(SortKey::Price);
    controller.set_sort_direction(SortDirection::Desc);
    print_products("in stock, price descending", controller.derived_products());

    controller.set_price_range(0.0, 100.0);
    print_products("in stock, at most 100", controller.derived_products());

    controller.shutdown();
    Ok(())
}
