//! 商品上下文

mod factory;
mod handler;
mod product;
mod service;

pub use factory::ProductFactory;
pub use handler::SendEmailWhenProductIsCreatedHandler;
pub use product::Product;
pub use service::ProductService;

pub const PRODUCT_CREATED_EVENT: &str = "ProductCreatedEvent";
