//! 领域层统一错误定义
//!
//! 覆盖仓储、取值校验与解析等最小必要集合，
//! 便于应用层统一转换为 `AppError`。
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 解析 ---
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },

    // --- 领域取值 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("unknown employment type: {0}")]
    UnknownEmploymentType(String),
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
