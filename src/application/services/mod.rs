//! Application services

mod product;
mod task;

pub use product::ProductService;
pub use task::TaskService;
