use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;

/// 命令处理器
///
/// 一种命令对应一个处理器；领域层拒绝以 `AppError::Domain` 原样上抛。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>;
}
