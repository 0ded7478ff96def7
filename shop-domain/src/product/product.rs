use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::value_object::{require_non_negative, require_text};

/// 商品实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        require_text("id", &product.id)?;
        require_text("name", &product.name)?;
        require_non_negative("price", product.price)?;
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        require_text("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        require_non_negative("price", price)?;
        self.price = price;
        Ok(())
    }
}

impl Entity for Product {
    type Id = String;
    const TYPE: &'static str = "Product";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_validation() {
        assert!(Product::new("", "Product 1", 100.0).is_err());
        assert!(Product::new("123", "", 100.0).is_err());

        let err = Product::new("123", "Name", -1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value: price must be greater than or equal to zero"
        );
    }

    #[test]
    fn change_name_and_price() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(150.0).unwrap();
        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), 150.0);

        assert!(product.change_price(-5.0).is_err());
        assert_eq!(product.price(), 150.0);
    }
}
