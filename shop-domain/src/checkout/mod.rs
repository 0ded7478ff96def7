//! 结算上下文：订单、订单项与订单服务

mod order;
mod order_item;
mod service;

pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;
