//! Task aggregate

pub mod model;
pub mod repository;

pub use model::{Task, TaskDraft};
pub use repository::TaskRepository;
