//! Deterministic sample catalog used by the demo binary and the end-to-end
//! tests: products across four categories, customers of tiers 1-3, and orders
//! spanning January to April 2021.

use chrono::NaiveDate;
use tracing::info;

use crate::app_system::CatalogSystem;
use crate::domain::{CustomerCreate, ProductCreate};

const PRODUCTS: &[(&str, &str, f64)] = &[
    ("The Histories", "Books", 120.0),
    ("Compiler Construction", "Books", 150.0),
    ("Pocket Atlas", "Books", 45.0),
    ("Wooden Train Set", "Toys", 89.99),
    ("Building Blocks", "Toys", 34.5),
    ("Plush Bear", "Toys", 19.9),
    ("Baby Monitor", "Baby", 129.0),
    ("Bottle Warmer", "Baby", 42.0),
    ("Espresso Beans", "Grocery", 18.75),
    ("Olive Oil", "Grocery", 12.4),
];

const CUSTOMERS: &[(&str, u8)] = &[("Alice", 1), ("Bruno", 2), ("Chioma", 2), ("Dmitri", 3)];

// (date, customer index, product line indices). Duplicate lines are
// intentional; so is the order placed outside Feb-Apr.
const ORDERS: &[((i32, u32, u32), usize, &[usize])] = &[
    ((2021, 2, 1), 1, &[0, 6]),
    ((2021, 2, 14), 0, &[2, 8, 8]),
    ((2021, 2, 28), 2, &[3, 7]),
    ((2021, 3, 15), 1, &[1, 4]),
    ((2021, 3, 15), 3, &[5]),
    ((2021, 4, 1), 2, &[0, 3]),
    ((2021, 4, 20), 0, &[9]),
    ((2021, 1, 12), 3, &[2]),
];

/// Load the sample catalog through the system's clients.
pub async fn seed_catalog(system: &CatalogSystem) -> Result<(), String> {
    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, category, price) in PRODUCTS {
        let id = system
            .product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                category: category.to_string(),
                price: *price,
            })
            .await
            .map_err(|e| e.to_string())?;
        product_ids.push(id);
    }

    let mut customer_ids = Vec::with_capacity(CUSTOMERS.len());
    for (name, tier) in CUSTOMERS {
        let id = system
            .customer_client
            .create_customer(CustomerCreate {
                name: name.to_string(),
                tier: *tier,
            })
            .await
            .map_err(|e| e.to_string())?;
        customer_ids.push(id);
    }

    for ((year, month, day), customer_idx, lines) in ORDERS {
        let order_date = NaiveDate::from_ymd_opt(*year, *month, *day)
            .ok_or_else(|| format!("invalid fixture date {}-{}-{}", year, month, day))?;
        let line_ids: Vec<String> = lines.iter().map(|&i| product_ids[i].clone()).collect();
        system
            .order_client
            .create_order(order_date, customer_ids[*customer_idx].clone(), line_ids)
            .await
            .map_err(|e| e.to_string())?;
    }

    info!(
        products = PRODUCTS.len(),
        customers = CUSTOMERS.len(),
        orders = ORDERS.len(),
        "Catalog seeded"
    );
    Ok(())
}
