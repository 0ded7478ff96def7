use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::{require_non_negative, require_text};

/// 订单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> DomainResult<Self> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        require_text("id", &item.id)?;
        require_text("name", &item.name)?;
        require_text("product_id", &item.product_id)?;
        require_non_negative("price", item.price)?;
        if item.quantity == 0 {
            return Err(DomainError::invalid_value(
                "quantity must be greater than zero",
            ));
        }
        Ok(item)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
