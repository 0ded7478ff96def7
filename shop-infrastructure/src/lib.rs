//! 商店基础设施层（shop-infrastructure）
//!
//! 提供领域仓储端口的内存实现，用于测试、示例与本地开发；
//! 不提供任何持久化保证。

pub mod inmemory_repository;

pub use inmemory_repository::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
    InMemoryRepository,
};
