//! # Catalog Service
//!
//! REST service for two independent collections: products (inventory items
//! with price, stock and category) and tasks (titled to-dos with a
//! completion flag).
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, replacement payloads and storage port traits
//! - **application**: Entity services (read/merge/write, existence checks)
//! - **infrastructure**: SeaORM/SQLite and in-memory storage
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
