//! Task DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Task, TaskDraft};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.unwrap_or_default(),
            title: t.title,
            description: t.description,
            completed: t.completed,
            created_at: t.created_at,
        }
    }
}

/// Body for create and full-replace update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<TaskRequest> for TaskDraft {
    fn from(r: TaskRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            completed: r.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_defaults_to_false() {
        let req: TaskRequest =
            serde_json::from_value(serde_json::json!({"title": "Buy milk", "id": 5})).unwrap();
        assert!(!req.completed);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn long_title_fails_validation() {
        let req = TaskRequest {
            title: "x".repeat(101),
            description: None,
            completed: false,
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("title"));
    }
}
