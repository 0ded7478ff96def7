//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!
use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 校验文本字段非空（去除首尾空白后）
pub(crate) fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_value(format!("{field} is required")));
    }
    Ok(())
}

/// 校验金额非负且为有限数
pub(crate) fn require_non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::invalid_value(format!(
            "{field} must be greater than or equal to zero"
        )));
    }
    Ok(())
}
