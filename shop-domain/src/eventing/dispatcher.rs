//! 事件分发器（EventDispatcher）
//!
//! 维护“事件类型 → 处理器列表”的注册表，并在 `notify` 时同步扇出：
//! - 同一类型下按注册顺序调用，允许重复注册（重复注册即重复调用）；
//! - `unregister` 只移除首个相同实例，移除后类型键保留（可能为空列表）；
//! - `unregister_all` 删除全部类型键；
//! - 对未知类型的 `notify` 为空操作。
//!
//! 注册表基于 `DashMap`，分发器可以 `Arc` 形式在多个协作者之间共享。
//! `notify` 先复制处理器列表再调用，处理器内部可再次注册/注销而不会死锁。
//!
use super::EventHandler;
use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult, HandlerFailure};
use bon::Builder;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// 某一事件类型下的处理器快照
pub type HandlerList<E> = Vec<Arc<dyn EventHandler<E>>>;

/// 处理器失败时的传播策略
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 继续调用剩余处理器，结束后汇总全部失败
    #[default]
    Continue,
    /// 首个失败即中止，剩余处理器不再调用
    FailFast,
}

/// 分发器配置
#[derive(Builder, Clone, Copy, Debug, Default)]
pub struct DispatcherConfig {
    #[builder(default)]
    pub failure_policy: FailurePolicy,
}

/// 进程内同步事件分发器
pub struct EventDispatcher<E>
where
    E: DomainEvent,
{
    handlers: DashMap<String, HandlerList<E>>,
    config: DispatcherConfig,
}

impl<E> Default for EventDispatcher<E>
where
    E: DomainEvent,
{
    fn default() -> Self {
        Self::with_config(DispatcherConfig::default())
    }
}

impl<E> EventDispatcher<E>
where
    E: DomainEvent,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// 注册处理器：追加到该类型列表末尾，类型不存在时创建
    pub fn register(&self, event_type: impl Into<String>, handler: Arc<dyn EventHandler<E>>) {
        let event_type = event_type.into();
        debug!(
            event_type = %event_type,
            handler = handler.handler_name(),
            "event handler registered"
        );
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// 注销处理器：按实例（指针）相等移除首个匹配项
    ///
    /// 类型未注册或实例不存在时为空操作；类型键在列表清空后仍然保留。
    pub fn unregister<H>(&self, event_type: &str, handler: &Arc<H>)
    where
        H: EventHandler<E> + ?Sized,
    {
        let Some(mut list) = self.handlers.get_mut(event_type) else {
            return;
        };

        let position = list
            .iter()
            .position(|h| std::ptr::addr_eq(Arc::as_ptr(h), Arc::as_ptr(handler)));

        if let Some(index) = position {
            let removed = list.remove(index);
            debug!(
                event_type,
                handler = removed.handler_name(),
                remaining = list.len(),
                "event handler unregistered"
            );
        }
    }

    /// 删除全部类型键
    pub fn unregister_all(&self) {
        debug!(event_types = self.handlers.len(), "all event handlers unregistered");
        self.handlers.clear();
    }

    /// 同步通知：按注册顺序将同一事件交给该类型下的每个处理器
    pub fn notify(&self, event: &E) -> DomainResult<()> {
        let event_type = event.event_type();
        let Some(handlers) = self.handlers_for(event_type) else {
            debug!(event_type, "no handlers registered for event");
            return Ok(());
        };

        debug!(event_type, handlers = handlers.len(), "notifying event handlers");

        let mut failures: Vec<HandlerFailure> = Vec::new();
        for handler in &handlers {
            let Err(err) = handler.handle(event) else {
                continue;
            };

            let failure = HandlerFailure {
                handler: handler.handler_name().to_string(),
                reason: format!("{err:#}"),
            };
            warn!(
                event_type,
                handler = %failure.handler,
                reason = %failure.reason,
                "event handler failed"
            );

            match self.config.failure_policy {
                FailurePolicy::FailFast => {
                    return Err(DomainError::EventHandler {
                        handler: failure.handler,
                        reason: failure.reason,
                    });
                }
                FailurePolicy::Continue => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::EventHandlers {
                event_type: event_type.to_string(),
                failures,
            })
        }
    }

    /// 注册表快照（修改快照不影响分发器）
    pub fn event_handlers(&self) -> HashMap<String, HandlerList<E>> {
        self.handlers
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// 某一类型的处理器快照；类型键不存在时返回 `None`
    pub fn handlers_for(&self, event_type: &str) -> Option<HandlerList<E>> {
        self.handlers.get(event_type).map(|list| list.clone())
    }

    pub fn handler_count(&self, event_type: &str) -> Option<usize> {
        self.handlers.get(event_type).map(|list| list.len())
    }

    /// 已登记的类型键数量
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
