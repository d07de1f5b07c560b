//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod product_repository;
pub mod repository_provider;
pub mod task_repository;

pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use task_repository::SeaOrmTaskRepository;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::storage(format!("Database error: {}", e))
}
