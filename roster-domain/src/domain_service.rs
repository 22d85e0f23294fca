//! 领域服务（Domain Service）
//!
//! 封装不属于单个实体的领域逻辑，通常同时依赖多个仓储，
//! 以统一的输入/输出与错误类型对外暴露并支持异步执行。
//!
use async_trait::async_trait;

/// 领域服务：跨实体的领域逻辑入口
#[async_trait]
pub trait DomainService: Send + Sync {
    type Input: Send;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
