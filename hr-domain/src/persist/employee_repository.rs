use crate::employee::{Employee, EmployeeId};
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 员工仓储：持久化协作者
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 保存员工记录（按 id 覆盖写入）
    async fn save(&self, employee: &Employee) -> DomainResult<()>;

    /// 按 id 读取员工记录，不存在时返回 `None`
    async fn load(&self, id: &EmployeeId) -> DomainResult<Option<Employee>>;
}

#[async_trait]
impl<T> EmployeeRepository for Arc<T>
where
    T: EmployeeRepository + ?Sized,
{
    async fn save(&self, employee: &Employee) -> DomainResult<()> {
        (**self).save(employee).await
    }

    async fn load(&self, id: &EmployeeId) -> DomainResult<Option<Employee>> {
        (**self).load(id).await
    }
}
