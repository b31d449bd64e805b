//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::product::is_valid_price;
use crate::domain::Product;

/// Catalog product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "2744.00")]
    pub price: Decimal,
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            // products handed out by the catalog are always persisted
            id: p.id.unwrap_or_default(),
            name: p.name,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if is_valid_price(*price) {
        Ok(())
    } else {
        let mut err = ValidationError::new("price");
        err.message = Some("price must be greater than zero".into());
        Err(err)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "product name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "2744.00")]
    pub price: Decimal,
    #[validate(range(min = 0, message = "quantity must be zero or positive"))]
    pub quantity: i32,
}

impl From<CreateProductRequest> for Product {
    fn from(req: CreateProductRequest) -> Self {
        Product::new(req.name, req.price, req.quantity)
    }
}

/// New stock level. Negative values are rejected by the catalog.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// New unit price. Non-positive values are rejected by the catalog.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePriceRequest {
    #[schema(value_type = String, example = "1999.99")]
    pub price: Decimal,
}
