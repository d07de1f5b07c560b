//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::{ProductRepository, RepositoryProvider, TaskRepository};

use super::product_repository::SeaOrmProductRepository;
use super::task_repository::SeaOrmTaskRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let product = repos.products().find_by_id(1).await?;
/// let tasks = repos.tasks().find_all().await?;
/// ```
#[derive(Clone)]
pub struct SeaOrmRepositoryProvider {
    products: Arc<SeaOrmProductRepository>,
    tasks: Arc<SeaOrmTaskRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: Arc::new(SeaOrmProductRepository::new(db.clone())),
            tasks: Arc::new(SeaOrmTaskRepository::new(db)),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.tasks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::TaskDraft;
    use crate::infrastructure::database::test_support::migrated_memory_db;

    #[tokio::test]
    async fn accessors_share_one_pool() {
        let repos = SeaOrmRepositoryProvider::new(migrated_memory_db().await);
        let task = TaskDraft {
            title: "Buy milk".into(),
            description: None,
            completed: false,
        }
        .into_task(Utc::now());

        repos.tasks().save(task).await.unwrap();
        assert_eq!(repos.tasks().find_all().await.unwrap().len(), 1);
        assert!(repos.products().find_all().await.unwrap().is_empty());
    }
}
