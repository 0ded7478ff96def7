use serde::{Deserialize, Serialize};

use super::OrderItem;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::require_text;

/// 订单实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        require_text("id", &order.id)?;
        require_text("customer_id", &order.customer_id)?;
        if order.items.is_empty() {
            return Err(DomainError::invalid_value(
                "order must have at least one item",
            ));
        }
        Ok(order)
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

impl Entity for Order {
    type Id = String;
    const TYPE: &'static str = "Order";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
