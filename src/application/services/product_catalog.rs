//! Product catalog service — application-layer orchestration
//!
//! Every catalog rule lives here: unique names, non-negative quantities and
//! strictly positive prices. HTTP handlers are thin wrappers that delegate
//! to this service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::product::{is_valid_price, is_valid_quantity};
use crate::domain::{DomainError, DomainResult, Product, ProductId, ProductRepository};

/// Catalog service — validates requests and delegates persistence.
///
/// Generic over `R: ProductRepository` so it stays decoupled from the
/// concrete store; `ProductCatalog<dyn ProductRepository>` works as well.
pub struct ProductCatalog<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

/// Catalog shared across handlers and the server, storage chosen at runtime
pub type SharedCatalog = Arc<ProductCatalog<dyn ProductRepository>>;

impl<R: ProductRepository + ?Sized> ProductCatalog<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Commands ────────────────────────────────────────────────

    /// Register a new product. Any id on the candidate is ignored and the
    /// name is stored trimmed, so uniqueness ignores surrounding whitespace.
    pub async fn add_product(&self, mut candidate: Product) -> DomainResult<Product> {
        candidate.name = candidate.name.trim().to_string();
        if !candidate.has_valid_name() {
            warn!("Rejected product with blank name");
            return Err(DomainError::Validation("name must not be blank".into()));
        }
        if !candidate.has_valid_price() {
            warn!(name = %candidate.name, price = %candidate.price, "Rejected product with illegal price");
            return Err(DomainError::IllegalPrice);
        }
        if !candidate.has_valid_quantity() {
            warn!(name = %candidate.name, quantity = candidate.quantity, "Rejected product with negative quantity");
            return Err(DomainError::NegativeQuantity);
        }

        if self.repo.find_by_name(&candidate.name).await?.is_some() {
            warn!(name = %candidate.name, "Product name already taken");
            return Err(DomainError::ProductAlreadyExists(candidate.name));
        }

        candidate.id = None;
        let saved = self.repo.save(candidate).await?;
        info!(product_id = ?saved.id, name = %saved.name, "Product added");
        Ok(saved)
    }

    pub async fn update_product_quantity(
        &self,
        id: ProductId,
        quantity: i32,
    ) -> DomainResult<Product> {
        let mut product = self.get_product_by_id(id).await?;

        if !is_valid_quantity(quantity) {
            warn!(product_id = id, quantity, "Rejected negative quantity");
            return Err(DomainError::NegativeQuantity);
        }

        product.quantity = quantity;
        let saved = self.repo.save(product).await?;
        info!(product_id = id, quantity, "Product quantity updated");
        Ok(saved)
    }

    pub async fn update_product_price(&self, id: ProductId, price: Decimal) -> DomainResult<Product> {
        let mut product = self.get_product_by_id(id).await?;

        if !is_valid_price(price) {
            warn!(product_id = id, %price, "Rejected illegal price");
            return Err(DomainError::IllegalPrice);
        }

        product.price = price;
        let saved = self.repo.save(product).await?;
        info!(product_id = id, %price, "Product price updated");
        Ok(saved)
    }

    /// Remove a product. Always `true` on success; a missing product
    /// (never created or already deleted) is `ProductNotFound`.
    pub async fn delete_product(&self, id: ProductId) -> DomainResult<bool> {
        let product = self.get_product_by_id(id).await?;
        self.repo.delete(&product).await?;
        info!(product_id = id, name = %product.name, "Product deleted");
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_all_products(&self) -> DomainResult<Vec<Product>> {
        let products = self.repo.find_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    pub async fn get_product_by_id(&self, id: ProductId) -> DomainResult<Product> {
        match self.repo.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                debug!(product_id = id, "Product not found");
                Err(DomainError::ProductNotFound(id))
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::infrastructure::storage::InMemoryProductRepository;

    /// Wraps the in-memory store and counts mutating calls.
    #[derive(Default)]
    struct RecordingRepository {
        inner: InMemoryProductRepository,
        saves: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl RecordingRepository {
        fn writes(&self) -> usize {
            self.saves.load(Ordering::SeqCst) + self.deletes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductRepository for RecordingRepository {
        async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
            self.inner.find_by_name(name).await
        }

        async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
            self.inner.find_by_id(id).await
        }

        async fn find_all(&self) -> DomainResult<Vec<Product>> {
            self.inner.find_all().await
        }

        async fn save(&self, product: Product) -> DomainResult<Product> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(product).await
        }

        async fn delete(&self, product: &Product) -> DomainResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(product).await
        }
    }

    fn catalog() -> (ProductCatalog<RecordingRepository>, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        (ProductCatalog::new(repo.clone()), repo)
    }

    fn price(units: i64) -> Decimal {
        Decimal::new(units * 100, 2)
    }

    fn galaxy(quantity: i32) -> Product {
        Product::new("Galaxy s10", price(2744), quantity)
    }

    #[tokio::test]
    async fn add_product_assigns_id() {
        let (catalog, repo) = catalog();

        let added = catalog.add_product(galaxy(27)).await.unwrap();

        assert!(added.id.is_some());
        assert_eq!(added.name, "Galaxy s10");
        assert_eq!(added.price, price(2744));
        assert_eq!(added.quantity, 27);
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn add_product_ignores_candidate_id() {
        let (catalog, _) = catalog();
        let mut candidate = galaxy(27);
        candidate.id = Some(99);

        let added = catalog.add_product(candidate).await.unwrap();

        assert_ne!(added.id, Some(99));
    }

    #[tokio::test]
    async fn add_product_with_existing_name_is_rejected() {
        let (catalog, repo) = catalog();
        catalog.add_product(galaxy(27)).await.unwrap();

        let duplicate = Product::new("Galaxy s10", price(1457), 32);
        let err = catalog.add_product(duplicate).await.unwrap_err();

        assert_eq!(err, DomainError::ProductAlreadyExists("Galaxy s10".into()));
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
        let all = catalog.get_all_products().await.unwrap();
        assert_eq!(all.iter().filter(|p| p.name == "Galaxy s10").count(), 1);
    }

    #[tokio::test]
    async fn padded_name_is_trimmed_and_counts_as_duplicate() {
        let (catalog, repo) = catalog();

        let added = catalog
            .add_product(Product::new("  Galaxy s10 ", price(2744), 27))
            .await
            .unwrap();
        assert_eq!(added.name, "Galaxy s10");

        let err = catalog.add_product(galaxy(5)).await.unwrap_err();

        assert_eq!(err, DomainError::ProductAlreadyExists("Galaxy s10".into()));
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn add_product_with_negative_quantity_is_rejected() {
        let (catalog, repo) = catalog();

        let err = catalog.add_product(galaxy(-27)).await.unwrap_err();

        assert_eq!(err, DomainError::NegativeQuantity);
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn add_product_with_non_positive_price_is_rejected() {
        let (catalog, repo) = catalog();

        for bad in [Decimal::ZERO, Decimal::new(-1, 2)] {
            let err = catalog
                .add_product(Product::new("Asus Zenfone 8", bad, 3))
                .await
                .unwrap_err();
            assert_eq!(err, DomainError::IllegalPrice);
        }
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn add_product_with_blank_name_is_rejected() {
        let (catalog, repo) = catalog();

        let err = catalog
            .add_product(Product::new("  ", price(10), 1))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn get_all_products_returns_every_product() {
        let (catalog, _) = catalog();
        assert!(catalog.get_all_products().await.unwrap().is_empty());

        catalog
            .add_product(Product::new("Samsung Galaxy s10", price(1744), 27))
            .await
            .unwrap();
        catalog
            .add_product(Product::new("Asus Zenfone 8", price(2684), 31))
            .await
            .unwrap();
        catalog
            .add_product(Product::new(
                "Lenovo Legion Y520-15 i5-7300HQ/8GB/1000 GTX1050",
                price(3449),
                17,
            ))
            .await
            .unwrap();

        let mut names: Vec<String> = catalog
            .get_all_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "Asus Zenfone 8",
                "Lenovo Legion Y520-15 i5-7300HQ/8GB/1000 GTX1050",
                "Samsung Galaxy s10",
            ]
        );
    }

    #[tokio::test]
    async fn get_product_round_trips_added_product() {
        let (catalog, _) = catalog();
        let added = catalog.add_product(galaxy(27)).await.unwrap();

        let fetched = catalog.get_product_by_id(added.id.unwrap()).await.unwrap();

        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_everywhere() {
        let (catalog, repo) = catalog();

        assert_eq!(
            catalog.get_product_by_id(1).await.unwrap_err(),
            DomainError::ProductNotFound(1)
        );
        assert_eq!(
            catalog.update_product_quantity(1, 5).await.unwrap_err(),
            DomainError::ProductNotFound(1)
        );
        assert_eq!(
            catalog.update_product_price(1, price(5)).await.unwrap_err(),
            DomainError::ProductNotFound(1)
        );
        assert_eq!(
            catalog.delete_product(1).await.unwrap_err(),
            DomainError::ProductNotFound(1)
        );
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn update_quantity_persists_new_value() {
        let (catalog, _) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();

        let updated = catalog.update_product_quantity(id, 29).await.unwrap();

        assert_eq!(updated.quantity, 29);
        assert_eq!(catalog.get_product_by_id(id).await.unwrap().quantity, 29);
    }

    #[tokio::test]
    async fn update_quantity_to_zero_is_allowed() {
        let (catalog, _) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();

        assert_eq!(catalog.update_product_quantity(id, 0).await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn negative_quantity_leaves_stock_unchanged() {
        let (catalog, repo) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();

        for q in [-1, -12, i32::MIN] {
            let err = catalog.update_product_quantity(id, q).await.unwrap_err();
            assert_eq!(err, DomainError::NegativeQuantity);
        }

        assert_eq!(catalog.get_product_by_id(id).await.unwrap().quantity, 21);
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_price_persists_new_value() {
        let (catalog, _) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();
        let new_price = Decimal::new(199999, 2);

        let updated = catalog.update_product_price(id, new_price).await.unwrap();

        assert_eq!(updated.price, new_price);
        assert_eq!(updated.name, "Galaxy s10");
        assert_eq!(updated.id, Some(id));
        assert_eq!(catalog.get_product_by_id(id).await.unwrap().price, new_price);
    }

    #[tokio::test]
    async fn illegal_price_leaves_price_unchanged() {
        let (catalog, repo) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();

        for bad in [Decimal::ZERO, Decimal::new(-1, 2), price(-2744)] {
            let err = catalog.update_product_price(id, bad).await.unwrap_err();
            assert_eq!(err, DomainError::IllegalPrice);
        }

        assert_eq!(catalog.get_product_by_id(id).await.unwrap().price, price(2744));
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delete_removes_product_once() {
        let (catalog, repo) = catalog();
        let id = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();

        assert!(catalog.delete_product(id).await.unwrap());
        assert_eq!(
            catalog.delete_product(id).await.unwrap_err(),
            DomainError::ProductNotFound(id)
        );
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
        assert!(catalog.get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_name_can_be_reused() {
        let (catalog, _) = catalog();
        let first = catalog.add_product(galaxy(21)).await.unwrap().id.unwrap();
        catalog.delete_product(first).await.unwrap();

        let second = catalog.add_product(galaxy(5)).await.unwrap();

        assert_ne!(second.id, Some(first));
    }

    #[tokio::test]
    async fn works_behind_trait_object() {
        let repo: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let catalog = ProductCatalog::new(repo);

        let added = catalog.add_product(galaxy(1)).await.unwrap();

        assert_eq!(catalog.get_all_products().await.unwrap(), vec![added]);
    }
}
