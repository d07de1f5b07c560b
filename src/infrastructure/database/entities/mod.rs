//! Database entities module

pub mod product;
pub mod task;

pub use product::Entity as Product;
pub use task::Entity as Task;
