use crate::employee::{Employee, EmployeeId};
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::persist::EmployeeRepository;
use async_trait::async_trait;
use dashmap::DashMap;

/// 基于内存的员工仓储
/// - 以 `EmployeeId` 为键保存记录副本
/// - 适用于示例与测试，进程退出即丢失
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    records: DashMap<EmployeeId, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: &Employee) -> DomainResult<()> {
        let id = *employee.id();
        let replaced = self.records.insert(id, employee.clone()).is_some();
        tracing::debug!(employee_id = %id, replaced, "employee saved");
        Ok(())
    }

    async fn load(&self, id: &EmployeeId) -> DomainResult<Option<Employee>> {
        Ok(self.records.get(id).map(|e| e.value().clone()))
    }
}
