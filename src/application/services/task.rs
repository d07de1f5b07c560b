//! Task business logic service

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::domain::{DomainResult, Task, TaskDraft, TaskRepository};

/// Service for task operations
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> DomainResult<Vec<Task>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Option<Task>> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create(&self, draft: TaskDraft) -> DomainResult<Task> {
        let task = self.repo.save(draft.into_task(Utc::now())).await?;
        info!(id = ?task.id, "Task created");
        Ok(task)
    }

    /// Full replace of every mutable field. `Ok(None)` when `id` is not stored.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i32, draft: TaskDraft) -> DomainResult<Option<Task>> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("Task not found, nothing updated");
            return Ok(None);
        };

        existing.replace_with(draft);
        let saved = self.repo.save(existing).await?;
        info!("Task updated");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> DomainResult<bool> {
        if !self.repo.exists_by_id(id).await? {
            debug!("Task not found, nothing deleted");
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        info!("Task deleted");
        Ok(true)
    }

    /// Set `completed`, leaving every other field as stored.
    pub async fn set_completed(&self, id: i32, completed: bool) -> DomainResult<Option<Task>> {
        self.change_completed(id, |_| completed).await
    }

    /// Flip `completed`, leaving every other field as stored.
    pub async fn toggle_completed(&self, id: i32) -> DomainResult<Option<Task>> {
        self.change_completed(id, |current| !current).await
    }

    async fn change_completed(
        &self,
        id: i32,
        next: impl FnOnce(bool) -> bool,
    ) -> DomainResult<Option<Task>> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            debug!(id, "Task not found, completion unchanged");
            return Ok(None);
        };

        let mut draft = TaskDraft::from(existing);
        draft.completed = next(draft.completed);
        self.update(id, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::storage::InMemoryTaskRepository;

    fn service() -> TaskService {
        TaskService::new(Arc::new(InMemoryTaskRepository::new()))
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.into(),
            description: Some("Leche entera".into()),
            completed: false,
        }
    }

    #[tokio::test]
    async fn buy_milk_lifecycle() {
        let svc = service();

        let created = svc.create(draft("Buy milk")).await.unwrap();
        assert!(!created.completed);
        let id = created.id.expect("id assigned");

        let toggled = svc.toggle_completed(id).await.unwrap().unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.title, "Buy milk");

        assert!(svc.delete(id).await.unwrap());
        assert!(svc.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn toggle_changes_only_completed() {
        let svc = service();
        let before = svc.create(draft("Estudiar")).await.unwrap();
        let id = before.id.unwrap();

        let after = svc.toggle_completed(id).await.unwrap().unwrap();
        assert_eq!(
            after,
            Task {
                completed: true,
                ..before.clone()
            }
        );

        let back = svc.toggle_completed(id).await.unwrap().unwrap();
        assert_eq!(back, before);
    }

    #[tokio::test]
    async fn set_completed_is_idempotent() {
        let svc = service();
        let id = svc.create(draft("Lavar ropa")).await.unwrap().id.unwrap();

        assert!(svc.set_completed(id, true).await.unwrap().unwrap().completed);
        assert!(svc.set_completed(id, true).await.unwrap().unwrap().completed);
        assert!(!svc.set_completed(id, false).await.unwrap().unwrap().completed);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let svc = service();
        let created = svc.create(draft("Viejo")).await.unwrap();
        let id = created.id.unwrap();

        let updated = svc
            .update(
                id,
                TaskDraft {
                    title: "Nuevo".into(),
                    description: None,
                    completed: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Nuevo");
        assert_eq!(updated.description, None);
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn missing_id_is_absence_everywhere() {
        let svc = service();
        svc.create(draft("Existente")).await.unwrap();
        let count = svc.list().await.unwrap().len();

        assert!(svc.get(999).await.unwrap().is_none());
        assert!(svc.update(999, draft("Otro")).await.unwrap().is_none());
        assert!(svc.toggle_completed(999).await.unwrap().is_none());
        assert!(svc.set_completed(999, true).await.unwrap().is_none());
        assert!(!svc.delete(999).await.unwrap());
        assert_eq!(svc.list().await.unwrap().len(), count);
    }
}
