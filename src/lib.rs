//! An in-memory product/order/customer catalog behind message-driven stores,
//! with a library of pure collection-pipeline queries over snapshot data.
//!
//! The store layer hands out complete snapshots (`list_products`,
//! `list_orders`, `list_customers`); the [`queries`] module holds the
//! pipeline operations that consume them.

pub mod actor_framework;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod queries;

#[cfg(test)]
mod mock_framework;
