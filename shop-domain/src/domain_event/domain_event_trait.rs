use chrono::{DateTime, Utc};
use std::fmt;

/// 事件需要满足的通用能力边界
pub trait DomainEvent: fmt::Debug + Send + Sync {
    /// 事件类型（注册表的键，形如 `CustomerCreatedEvent`）
    fn event_type(&self) -> &str;

    /// 事件发生时间
    fn occurred_at(&self) -> &DateTime<Utc>;
}
