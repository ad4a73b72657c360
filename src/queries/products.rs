use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::Product;

/// Summary figures over a set of product prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Products in `category` priced strictly above `min_price`, input order kept.
pub fn products_in_category_over(
    products: &[Product],
    category: &str,
    min_price: f64,
) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .filter(|product| product.price > min_price)
        .cloned()
        .collect()
}

/// Clones of the products in `category` with `rate` knocked off the price.
///
/// The input snapshot is left untouched. Feeding the output back in compounds
/// the discount.
pub fn discounted_category(products: &[Product], category: &str, rate: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .map(|product| {
            let mut discounted = product.clone();
            discounted.price *= 1.0 - rate;
            discounted
        })
        .collect()
}

/// The cheapest product in `category`; the first encountered wins a price tie.
pub fn cheapest_in_category(products: &[Product], category: &str) -> Option<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .min_by(|a, b| a.price.total_cmp(&b.price))
        .cloned()
}

/// Price statistics over `category`, or `None` when no product matches.
pub fn price_statistics(products: &[Product], category: &str) -> Option<PriceStats> {
    let prices: Vec<f64> = products
        .iter()
        .filter(|product| product.category == category)
        .map(|product| product.price)
        .collect();
    let (first, rest) = prices.split_first()?;

    let mut min = *first;
    let mut max = *first;
    for &price in rest {
        if price < min {
            min = price;
        }
        if price > max {
            max = price;
        }
    }
    let sum: f64 = prices.iter().sum();
    Some(PriceStats {
        count: prices.len(),
        sum,
        min,
        max,
        average: sum / prices.len() as f64,
    })
}

/// Product names grouped by category, input order kept within each group.
pub fn product_names_by_category(products: &[Product]) -> HashMap<String, Vec<String>> {
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    for product in products {
        groups
            .entry(product.category.clone())
            .or_default()
            .push(product.name.clone());
    }
    groups
}

/// The most expensive product per category. Every category present in the
/// input gets exactly one entry; the first encountered wins a price tie, so
/// replacement only happens on a strictly greater price.
pub fn priciest_by_category(products: &[Product]) -> HashMap<String, Product> {
    let mut winners: HashMap<String, Product> = HashMap::new();
    for product in products {
        match winners.entry(product.category.clone()) {
            Entry::Occupied(mut entry) => {
                if product.price > entry.get().price {
                    entry.insert(product.clone());
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(product.clone());
            }
        }
    }
    winners
}
