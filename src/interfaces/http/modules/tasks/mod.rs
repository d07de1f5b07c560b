//! Task module — to-do CRUD and completion actions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
