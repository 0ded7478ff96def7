//! 事件子系统（eventing）
//!
//! 进程内的发布/订阅注册表：
//! - `EventHandler`：对某类事件的同步处理逻辑；
//! - `EventDispatcher`：按事件类型维护处理器列表，`notify` 时按注册顺序同步扇出；
//! - `DispatcherConfig`：处理器失败时的传播策略。
//!
//! 不做持久化、重试或跨进程投递。
//!
pub mod dispatcher;
pub mod handler;

pub use dispatcher::{DispatcherConfig, EventDispatcher, FailurePolicy, HandlerList};
pub use handler::EventHandler;
