//! 事件处理器（EventHandler）
//!
//! 定义消费某类事件的同步处理逻辑与元信息（名称）。
//!
use crate::domain_event::DomainEvent;

/// 事件处理器：处理某一类型的事件，只产生副作用
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于日志与失败报告）
    fn handler_name(&self) -> &str;

    /// 处理事件
    fn handle(&self, event: &E) -> anyhow::Result<()>;
}
