//! # Students API
//!
//! Minimal REST service for storing and retrieving student records,
//! backed by embedded SQLite.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, error kinds and repository traits
//! - **infrastructure**: External concerns (database, entities, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting types (pagination, validation, shutdown)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, request_timeout_layer};
