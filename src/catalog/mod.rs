//! Store bindings for the domain entities: one `Entity` implementation per
//! collection, including creation-time validation.

mod customer_store;
mod order_store;
mod product_store;
