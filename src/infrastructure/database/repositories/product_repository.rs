//! SeaORM implementation of ProductRepository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{DomainError, DomainResult, Product, ProductId, ProductRepository};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(p: product::Model) -> DomainResult<Product> {
    let price = Decimal::from_str(&p.price).map_err(|e| {
        DomainError::Storage(format!("Corrupt price '{}' for product {}: {}", p.price, p.id, e))
    })?;
    Ok(Product {
        id: Some(p.id),
        name: p.name,
        price,
        quantity: p.quantity,
    })
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, p: Product) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            price: Set(p.price.to_string()),
            quantity: Set(p.quantity),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await?;
        info!("Product saved: {} ({})", result.name, result.id);
        entity_to_domain(result)
    }

    async fn update(&self, id: ProductId, p: Product) -> DomainResult<Product> {
        let existing = product::Entity::find_by_id(id).one(&self.db).await?;

        let Some(existing) = existing else {
            return Err(DomainError::ProductNotFound(id));
        };

        let mut model: product::ActiveModel = existing.into();
        model.name = Set(p.name);
        model.price = Set(p.price.to_string());
        model.quantity = Set(p.quantity);
        model.updated_at = Set(Utc::now());
        let result = model.update(&self.db).await?;
        debug!("Product updated: {} ({})", result.name, result.id);
        entity_to_domain(result)
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        let model = product::Entity::find()
            .filter(product::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save(&self, p: Product) -> DomainResult<Product> {
        match p.id {
            None => self.insert(p).await,
            Some(id) => self.update(id, p).await,
        }
    }

    async fn delete(&self, p: &Product) -> DomainResult<()> {
        let Some(id) = p.id else {
            return Err(DomainError::Validation("cannot delete an unsaved product".into()));
        };
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::ProductNotFound(id));
        }
        info!("Product deleted: {} ({})", p.name, id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
