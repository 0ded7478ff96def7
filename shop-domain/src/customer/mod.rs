//! 客户上下文
//!
//! 客户实体、地址值对象、客户工厂与客户相关事件的处理器。

mod address;
mod customer;
mod factory;
mod handler;

pub use address::Address;
pub use customer::Customer;
pub use factory::CustomerFactory;
pub use handler::{
    CustomerAddressChangedLogHandler, CustomerCreatedLog1Handler, CustomerCreatedLog2Handler,
};

pub const CUSTOMER_CREATED_EVENT: &str = "CustomerCreatedEvent";
pub const CUSTOMER_CHANGED_EVENT: &str = "CustomerChangedEvent";
