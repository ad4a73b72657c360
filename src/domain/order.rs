use chrono::NaiveDate;

use crate::domain::{Customer, Product};

/// A placed order carrying snapshot copies of its customer and product lines.
///
/// The same product may appear on more than one line; `products` may be empty.
/// Dates are calendar dates with no time component.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub order_date: NaiveDate,
    pub customer: Customer,
    pub products: Vec<Product>,
}

/// Payload for creating a new order. The client resolves customer and product
/// references to full entities before the store sees this payload.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_date: NaiveDate,
    pub customer: Customer,
    pub products: Vec<Product>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        order_date: NaiveDate,
        customer: Customer,
        products: Vec<Product>,
    ) -> Self {
        Self {
            id: id.into(),
            order_date,
            customer,
            products,
        }
    }

    /// Sum of the product prices on this order, duplicate lines counted.
    pub fn total(&self) -> f64 {
        self.products.iter().map(|product| product.price).sum()
    }
}

// Orders serve as map keys. Prices are floats, so equality and hashing are
// defined over the id, which is unique within a snapshot.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl std::hash::Hash for Order {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
