//! Application services

mod product_catalog;

pub use product_catalog::{ProductCatalog, SharedCatalog};
