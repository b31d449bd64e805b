//! Product domain entity

use rust_decimal::Decimal;

/// Store-assigned product identifier
pub type ProductId = i32;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// `None` until the store persists the product
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl Product {
    /// Build a not-yet-persisted candidate
    pub fn new(name: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn has_valid_price(&self) -> bool {
        is_valid_price(self.price)
    }

    pub fn has_valid_quantity(&self) -> bool {
        is_valid_quantity(self.quantity)
    }

    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Prices must be strictly positive.
pub fn is_valid_price(price: Decimal) -> bool {
    price > Decimal::ZERO
}

pub fn is_valid_quantity(quantity: i32) -> bool {
    quantity >= 0
}

// ── Tests ──────────────────────────────────────────────────────
