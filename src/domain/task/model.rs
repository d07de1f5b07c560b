//! Task domain entity

use chrono::{DateTime, Utc};

/// Titled to-do item with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied task fields for creation and full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TaskDraft {
    pub fn into_task(self, created_at: DateTime<Utc>) -> Task {
        Task {
            id: None,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at,
        }
    }
}

impl From<Task> for TaskDraft {
    fn from(task: Task) -> Self {
        Self {
            title: task.title,
            description: task.description,
            completed: task.completed,
        }
    }
}

impl Task {
    /// Overwrite every mutable field from `draft`, keeping `id` and `created_at`.
    pub fn replace_with(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.completed = draft.completed;
    }
}
