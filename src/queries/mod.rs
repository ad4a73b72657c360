//! The query library: pure, synchronous pipeline operations over catalog
//! snapshots. Every function takes slices and returns owned results; empty
//! input yields an empty collection or `None`, never an error.

pub mod orders;
pub mod products;

pub use orders::*;
pub use products::*;
