//! Application layer: use-case orchestration over domain repositories

pub mod services;

pub use services::{ProductCatalog, SharedCatalog};
