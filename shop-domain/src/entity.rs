//! 实体（Entity）基础抽象
//!
//! 为实体提供统一的标识能力，仓储以此为键存取实体。
//!
use std::fmt::Display;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可显示与可克隆
    type Id: Clone + Display + Eq + std::hash::Hash + Ord + Send + Sync;

    /// 实体类型名（用于错误信息，如 "Customer"）
    const TYPE: &'static str;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
