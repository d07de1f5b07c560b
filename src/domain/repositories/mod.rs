//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to the per-resource repositories
//! - `DomainResult` — standard result type for domain operations

use std::sync::Arc;

use super::product::ProductRepository;
use super::task::TaskRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Each accessor hands out a shared handle so a service can own its port:
///
/// ```ignore
/// let products = ProductService::new(repos.products());
/// let tasks = TaskService::new(repos.tasks());
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn products(&self) -> Arc<dyn ProductRepository>;
    fn tasks(&self) -> Arc<dyn TaskRepository>;
}
