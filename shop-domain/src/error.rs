//! 领域层统一错误定义
//!
//! 覆盖值校验、状态校验、仓储与事件分发的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use std::fmt;

use thiserror::Error;

/// 单个处理器的失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub reason: String,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.handler, self.reason)
    }
}

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 事件分发 ---
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("event handlers failed: type={event_type}, failures=[{}]", join_failures(.failures))]
    EventHandlers {
        event_type: String,
        failures: Vec<HandlerFailure>,
    },

    // --- 仓储 ---
    #[error("{reason}")]
    NotFound { reason: String },
    #[error("{reason}")]
    AlreadyExists { reason: String },

    // --- 领域规则 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn already_exists(reason: impl Into<String>) -> Self {
        Self::AlreadyExists {
            reason: reason.into(),
        }
    }
}

fn join_failures(failures: &[HandlerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
