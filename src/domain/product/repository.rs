//! Product repository interface

use async_trait::async_trait;

use super::model::{Product, ProductId};
use crate::domain::DomainResult;

/// Persistence collaborator consumed by the catalog.
///
/// `save` inserts when `product.id` is `None` (returning the product with its
/// assigned id) and updates the stored record otherwise.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    async fn save(&self, product: Product) -> DomainResult<Product>;
    async fn delete(&self, product: &Product) -> DomainResult<()>;
}
