//! 仓储端口（Repository）
//!
//! 领域层只定义接口，具体存储由基础设施层实现。
//! 约定：`update`/`find` 遇到不存在的标识返回 `DomainError::NotFound`，
//! `create` 遇到已存在的标识返回 `DomainError::AlreadyExists`。
//!
use crate::checkout::Order;
use crate::customer::Customer;
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::product::Product;
use async_trait::async_trait;

/// 通用仓储接口
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity,
{
    async fn create(&self, entity: &T) -> DomainResult<()>;

    async fn update(&self, entity: &T) -> DomainResult<()>;

    async fn find(&self, id: &T::Id) -> DomainResult<T>;

    async fn find_all(&self) -> DomainResult<Vec<T>>;
}

pub trait CustomerRepository: Repository<Customer> {}

pub trait ProductRepository: Repository<Product> {}

pub trait OrderRepository: Repository<Order> {}
