/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 关联追踪 `correlation_id`：写入总线的 tracing span，便于串联日志；
/// - 执行者 `actor_id`：发起本次调用的主体。
///
/// 典型用法：
/// ```rust
/// use roster_application::context::AppContext;
///
/// let ctx = AppContext::default()
///     .with_correlation_id("cor-123")
///     .with_actor_id("teacher-1");
/// assert_eq!(ctx.correlation_id.as_deref(), Some("cor-123"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub correlation_id: Option<String>,
    pub actor_id: Option<String>,
}

impl AppContext {
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_actor_id(mut self, id: impl Into<String>) -> Self {
        self.actor_id = Some(id.into());
        self
    }

    /// span 字段使用的关联标识，缺省为 `-`
    pub(crate) fn correlation(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("-")
    }
}
