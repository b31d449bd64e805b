//! Domain layer: entities and repository interfaces

pub mod product;

pub use product::{Product, ProductId, ProductRepository};

pub use crate::shared::errors::{DomainError, DomainResult};
