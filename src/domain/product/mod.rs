//! Product aggregate
//!
//! Contains the Product entity, its value rules and the repository interface.

pub mod model;
pub mod repository;

pub use model::{is_valid_price, is_valid_quantity, Product, ProductId};
pub use repository::ProductRepository;
