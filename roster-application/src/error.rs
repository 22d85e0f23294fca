use roster_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}")]
    AlreadyRegisteredQuery { query: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    /// 领域层拒绝的原因（非领域错误返回 `None`）
    pub fn domain_reason(&self) -> Option<&str> {
        match self {
            AppError::Domain(e) => Some(e.reason()),
            _ => None,
        }
    }
}
