//! Domain layer: catalog entities and their storage ports

pub mod product;
pub mod repositories;
pub mod task;

pub use product::{Product, ProductDraft, ProductRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use task::{Task, TaskDraft, TaskRepository};

pub use crate::shared::errors::DomainError;
