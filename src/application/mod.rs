//! Application layer: entity services orchestrating the storage ports

pub mod services;

pub use services::{ProductService, TaskService};
