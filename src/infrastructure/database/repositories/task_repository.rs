//! SeaORM implementation of TaskRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::{DomainResult, Task, TaskRepository};
use crate::infrastructure::database::entities::task;

fn entity_to_domain(t: task::Model) -> Task {
    Task {
        id: Some(t.id),
        title: t.title,
        description: t.description,
        completed: t.completed,
        created_at: t.created_at,
    }
}

pub struct SeaOrmTaskRepository {
    db: DatabaseConnection,
}

impl SeaOrmTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn save(&self, t: Task) -> DomainResult<Task> {
        let model = task::ActiveModel {
            id: t.id.map_or(NotSet, Set),
            title: Set(t.title),
            description: Set(t.description),
            completed: Set(t.completed),
            created_at: Set(t.created_at),
        };

        let saved = match t.id {
            None => model.insert(&self.db).await.map_err(db_err)?,
            Some(_) => model.update(&self.db).await.map_err(db_err)?,
        };
        info!("Task saved: {} ({})", saved.title, saved.id);
        Ok(entity_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Task>> {
        let model = task::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Task>> {
        let models = task::Entity::find()
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = task::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        let result = task::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!("Task {} delete affected {} row(s)", id, result.rows_affected);
        Ok(())
    }
}
