use uuid::Uuid;

use super::{Order, OrderItem};
use crate::customer::Customer;
use crate::entity::Entity;
use crate::error::DomainResult;

/// 订单领域服务
pub struct OrderService;

impl OrderService {
    /// 为客户下单，并按订单总额的一半发放积分
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> DomainResult<Order> {
        let order = Order::new(Uuid::new_v4().to_string(), customer.id().clone(), items)?;
        customer.add_reward_points(order.total() / 2.0)?;
        Ok(order)
    }

    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }
}
