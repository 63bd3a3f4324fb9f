use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息，例如：
/// - 关联追踪 `correlation_id` 与执行者 `actor_id`，由各 handler 写入日志字段；
/// - 幂等键（`idempotency_key`）：只随上下文透传，handler 不读取，
///   由接入层（如 API 网关）决定是否据此去重。
///
/// 典型用法：
/// ```rust
/// use hr_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123")
///     .actor_id("hr-admin")
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.idempotency_key(), None);
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    #[builder(into)]
    correlation_id: Option<String>,
    #[builder(into)]
    actor_id: Option<String>,
    #[builder(into)]
    idempotency_key: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}
