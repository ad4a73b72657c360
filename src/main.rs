use chrono::NaiveDate;
use tracing::{info, info_span, Instrument};

use catalog_analytics::app_system::{setup_tracing, CatalogSystem};
use catalog_analytics::domain::{Order, Product};
use catalog_analytics::fixtures::seed_catalog;
use catalog_analytics::queries;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting catalog analytics demo");

    let system = CatalogSystem::new();

    let span = info_span!("catalog_seeding");
    async {
        info!("Seeding sample catalog");
        seed_catalog(&system).await
    }
    .instrument(span)
    .await?;

    let products = system
        .product_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    let customers = system
        .customer_client
        .list_customers()
        .await
        .map_err(|e| e.to_string())?;
    let orders = system
        .order_client
        .list_orders()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        products = products.len(),
        customers = customers.len(),
        orders = orders.len(),
        "Catalog snapshot loaded"
    );

    info_span!("catalog_queries").in_scope(|| run_queries(&products, &orders))?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("invalid date {}-{}-{}", y, m, d))
}

/// Run every query over the snapshot and report the results.
fn run_queries(products: &[Product], orders: &[Order]) -> Result<(), String> {
    let feb_start = date(2021, 2, 1)?;
    let mar_start = date(2021, 3, 1)?;
    let apr_start = date(2021, 4, 1)?;
    let mid_march = date(2021, 3, 15)?;

    let premium_books = queries::products_in_category_over(products, "Books", 100.0);
    info!(count = premium_books.len(), "Books priced over 100");

    let baby_orders = queries::orders_containing_category(orders, "Baby");
    info!(count = baby_orders.len(), "Orders carrying baby products");

    let discounted_toys = queries::discounted_category(products, "Toys", 0.10);
    info!(count = discounted_toys.len(), "Toys repriced at 10% off");

    let tier2_products =
        queries::products_ordered_by_tier_between(orders, 2, feb_start, apr_start);
    info!(
        count = tier2_products.len(),
        "Distinct products ordered by tier-2 customers between Feb 1 and Apr 1"
    );

    match queries::cheapest_in_category(products, "Books") {
        Some(book) => info!(name = %book.name, price = book.price, "Cheapest book"),
        None => info!("No books in catalog"),
    }

    let earliest = queries::earliest_orders(orders, 3);
    info!(count = earliest.len(), "Earliest orders");

    // The queries stay pure; observing the matching orders is the caller's call
    let mid_march_orders = queries::orders_placed_on(orders, mid_march);
    for order in &mid_march_orders {
        info!(
            order_id = %order.id,
            customer = %order.customer.name,
            total = order.total(),
            "Order placed on the target date"
        );
    }

    for order in orders
        .iter()
        .filter(|order| order.order_date >= feb_start && order.order_date < mar_start)
    {
        info!(order_id = %order.id, date = %order.order_date, "February order");
    }
    let february_products =
        queries::distinct_products_ordered_between(orders, feb_start, mar_start);
    info!(
        count = february_products.len(),
        "Distinct products on February orders"
    );

    match queries::average_order_total_on(orders, mid_march) {
        Some(average) => info!(average, "Average order total on the target date"),
        None => info!("No orders on the target date"),
    }

    match queries::price_statistics(products, "Books") {
        Some(stats) => info!(
            count = stats.count,
            sum = stats.sum,
            min = stats.min,
            max = stats.max,
            average = stats.average,
            "Book price statistics"
        ),
        None => info!("No books to summarize"),
    }

    let counts = queries::product_counts_by_order(orders);
    info!(orders = counts.len(), "Product counts mapped per order");

    let by_customer = queries::orders_by_customer(orders);
    info!(
        customers = by_customer.len(),
        "Orders grouped by customer"
    );

    let totals = queries::order_totals(orders);
    info!(orders = totals.len(), "Totals mapped per order");

    let names = queries::product_names_by_category(products);
    info!(
        categories = names.len(),
        "Product names grouped by category"
    );

    let priciest = queries::priciest_by_category(products);
    for (category, product) in &priciest {
        info!(category = %category, name = %product.name, price = product.price, "Priciest product in category");
    }

    Ok(())
}
