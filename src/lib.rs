//! # Product Catalog
//!
//! Product catalog management service: register products, list them, fetch
//! one by id, adjust stock or price, and remove products.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: the Product entity, its value rules and the repository trait
//! - **application**: `ProductCatalog`, the service enforcing catalog invariants
//! - **infrastructure**: in-memory and SeaORM (SQLite) product stores
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: error types and shutdown coordination
//! - **server**: process lifecycle shared by the CLI binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use application::{ProductCatalog, SharedCatalog};
pub use domain::{DomainError, DomainResult, Product, ProductId, ProductRepository};

// Re-export storage types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryProductRepository, SeaOrmProductRepository,
};

// Re-export API router
pub use interfaces::http::create_api_router;
