//! 商店领域层（shop-domain）
//!
//! 以 DDD 方式组织的示例领域，核心是一个进程内的事件分发器：
//! - 事件分发（`eventing`）：按事件类型注册处理器，同步、按注册顺序扇出；
//! - 领域事件（`domain_event`）：不可变的事件值对象与封闭的载荷枚举；
//! - 实体（`entity`）与值对象（`value_object`）抽象；
//! - 限界上下文：客户（`customer`）、商品（`product`）、结算（`checkout`）；
//! - 仓储端口（`repository`），具体实现位于基础设施层。
//!
//! 典型用法：
//! 1. 创建共享的 `Arc<EventDispatcher<Event>>` 并注册处理器；
//! 2. 通过工厂或实体方法修改状态，实体在状态变化后同步调用 `notify`；
//! 3. 通过 `repository` 端口保存实体。
//!
pub mod checkout;
pub mod customer;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod product;
pub mod repository;
pub mod value_object;

/// 领域内共享的分发器类型
pub type SharedEventDispatcher = std::sync::Arc<eventing::EventDispatcher<domain_event::Event>>;
