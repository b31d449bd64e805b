//! In-memory product repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, Product, ProductId, ProductRepository};

/// In-memory storage for development and testing
pub struct InMemoryProductRepository {
    products: DashMap<ProductId, Product>,
    product_counter: AtomicI32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            product_counter: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value().clone()))
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self.products.iter().map(|p| p.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn save(&self, mut product: Product) -> DomainResult<Product> {
        match product.id {
            None => {
                let id = self.product_counter.fetch_add(1, Ordering::SeqCst);
                product.id = Some(id);
                self.products.insert(id, product.clone());
            }
            Some(id) => {
                let Some(mut stored) = self.products.get_mut(&id) else {
                    return Err(DomainError::ProductNotFound(id));
                };
                *stored = product.clone();
            }
        }
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> DomainResult<()> {
        let Some(id) = product.id else {
            return Err(DomainError::Validation("cannot delete an unsaved product".into()));
        };
        self.products
            .remove(&id)
            .ok_or(DomainError::ProductNotFound(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn candidate(name: &str) -> Product {
        Product::new(name, Decimal::new(1000, 2), 3)
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let a = repo.save(candidate("a")).await.unwrap();
        let b = repo.save(candidate("b")).await.unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.save(candidate(name)).await.unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn update_replaces_stored_record() {
        let repo = InMemoryProductRepository::new();
        let mut p = repo.save(candidate("a")).await.unwrap();

        p.quantity = 42;
        repo.save(p.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(p.id.unwrap()).await.unwrap(), Some(p));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let mut p = candidate("ghost");
        p.id = Some(9);

        assert_eq!(repo.save(p).await.unwrap_err(), DomainError::ProductNotFound(9));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn find_by_name_matches_exactly() {
        let repo = InMemoryProductRepository::new();
        repo.save(candidate("Galaxy s10")).await.unwrap();

        assert!(repo.find_by_name("Galaxy s10").await.unwrap().is_some());
        assert!(repo.find_by_name("galaxy s10").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryProductRepository::new();
        let p = repo.save(candidate("a")).await.unwrap();

        repo.delete(&p).await.unwrap();

        assert!(repo.find_by_id(p.id.unwrap()).await.unwrap().is_none());
        assert_eq!(
            repo.delete(&p).await.unwrap_err(),
            DomainError::ProductNotFound(p.id.unwrap())
        );
    }
}
