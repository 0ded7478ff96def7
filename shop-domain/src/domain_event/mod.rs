//! 领域事件（Domain Event）
//!
//! 定义分发器可消费的事件最小接口（`DomainEvent`），以及本领域使用的
//! 不可变事件值 `Event` 与封闭的载荷枚举 `EventData`。

mod domain_event_trait;
mod event;

pub use domain_event_trait::DomainEvent;
pub use event::{Event, EventData};
