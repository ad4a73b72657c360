//! System orchestration, startup, and shutdown logic.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use tracing::*;
