//! Task repository interface

use async_trait::async_trait;

use super::model::Task;
use crate::domain::DomainResult;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert when `task.id` is `None`, otherwise overwrite the stored row.
    async fn save(&self, task: Task) -> DomainResult<Task>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Task>>;
    async fn find_all(&self) -> DomainResult<Vec<Task>>;
    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;
    /// No-op when nothing is stored under `id`.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;
}
