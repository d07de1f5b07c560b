//! Product aggregate
//!
//! Inventory items with price, stock and an optional category.

pub mod model;
pub mod repository;

pub use model::{Product, ProductDraft};
pub use repository::ProductRepository;
