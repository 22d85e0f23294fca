//! 领域层统一错误定义
//!
//! 只区分两类业务失败：
//! - `InvalidArgument`：参数缺失、格式非法，或在「畸形请求」语义下引用了不存在的实体；
//! - `InvalidOperation`：请求合法、实体存在，但被业务不变式拦截（如队伍已满）。
//!
//! 另有 `Repository` 表示协作方（仓储）调用本身失败。
//! `reason` 均为固定的字面消息，调用方可以逐字比对。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },

    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    /// 错误携带的字面消息
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason }
            | Self::InvalidOperation { reason }
            | Self::Repository { reason } => reason,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
