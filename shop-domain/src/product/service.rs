use super::Product;
use crate::error::{DomainError, DomainResult};
use crate::value_object::require_non_negative;

/// 商品领域服务
pub struct ProductService;

impl ProductService {
    /// 按百分比批量调价；任一新价格不合法时所有商品保持原价
    pub fn increase_price(products: &mut [Product], percentage: f64) -> DomainResult<()> {
        if !percentage.is_finite() || percentage < -100.0 {
            return Err(DomainError::invalid_value(
                "percentage must be greater than or equal to -100",
            ));
        }

        let factor = 1.0 + percentage / 100.0;
        let prices = products
            .iter()
            .map(|product| {
                let price = product.price() * factor;
                require_non_negative("price", price).map(|()| price)
            })
            .collect::<DomainResult<Vec<f64>>>()?;

        for (product, price) in products.iter_mut().zip(prices) {
            product.change_price(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increases_every_price() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", 20.0).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }

    #[test]
    fn rejects_invalid_percentage() {
        let mut products = vec![Product::new("p1", "Product 1", 10.0).unwrap()];
        assert!(ProductService::increase_price(&mut products, -150.0).is_err());
        assert_eq!(products[0].price(), 10.0);
    }

    // 后一个商品调价溢出时，前面的商品也不应被修改
    #[test]
    fn overflow_on_any_product_leaves_all_prices_unchanged() {
        let mut products = vec![
            Product::new("p1", "Product 1", 1.0).unwrap(),
            Product::new("p2", "Product 2", 1e305).unwrap(),
        ];

        let err = ProductService::increase_price(&mut products, 1e10).unwrap_err();

        assert!(matches!(err, DomainError::InvalidValue { .. }));
        assert_eq!(products[0].price(), 1.0);
        assert_eq!(products[1].price(), 1e305);
    }
}
