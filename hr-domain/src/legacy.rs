//! 旧式员工类型（LegacyEmployee）
//!
//! 反例：数据、持久化与计税全部堆在同一个类型上。
//! - `save` 直接打开连接、拼装语句并执行，失败只记录日志，不向调用方传播，也不重试；
//! - `calculate_tax` 对雇佣类型做字符串比较，只认识 `fullTime` 与 `partTime`，
//!   其余取值两个分支都不进入，既不计算也不报错。
//!
//! 重构后的写法见 [`Employee`](crate::employee::Employee)。
//!
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

/// 写死在类型里的连接串
pub const LEGACY_CONNECTION_STRING: &str = "dbConnectionString";
/// 写死在类型里的插入语句
pub const LEGACY_INSERT_QUERY: &str = "insertIntoEmployeeQuery";

/// 旧式数据库访问错误（只会被记录，永远不会返回给调用方）
#[derive(Debug, Error)]
pub enum LegacyDbError {
    #[error("connect failed: {reason}")]
    Connect { reason: String },
    #[error("execute failed: {reason}")]
    Execute { reason: String },
}

/// 旧式连接
pub trait LegacyConnection {
    fn execute(&mut self, sql: &str, employee: &LegacyEmployee) -> Result<(), LegacyDbError>;
}

/// 旧式连接器：按连接串打开连接
pub trait LegacyConnector: Send + Sync {
    fn connect(
        &self,
        connection_string: &str,
    ) -> Result<Box<dyn LegacyConnection>, LegacyDbError>;
}

/// 默认连接器：连接总是成功，执行什么也不做
#[derive(Debug, Default)]
pub struct NoopConnector;

struct NoopConnection;

impl LegacyConnection for NoopConnection {
    fn execute(&mut self, _sql: &str, _employee: &LegacyEmployee) -> Result<(), LegacyDbError> {
        Ok(())
    }
}

impl LegacyConnector for NoopConnector {
    fn connect(
        &self,
        _connection_string: &str,
    ) -> Result<Box<dyn LegacyConnection>, LegacyDbError> {
        Ok(Box::new(NoopConnection))
    }
}

/// `calculate_tax` 实际进入的分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxBranch {
    FullTime,
    PartTime,
}

/// 旧式员工：持有数据，同时自己负责保存与计税
pub struct LegacyEmployee {
    emp_id: u64,
    name: String,
    age: u32,
    salary: Decimal,
    emp_type: String,
    connector: Arc<dyn LegacyConnector>,
}

impl std::fmt::Debug for LegacyEmployee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyEmployee")
            .field("emp_id", &self.emp_id)
            .field("name", &self.name)
            .field("age", &self.age)
            .field("salary", &self.salary)
            .field("emp_type", &self.emp_type)
            .finish_non_exhaustive()
    }
}

/// 旧式信息快照（不含薪资），雇佣类型保持原始文本
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LegacyEmployeeInfo {
    pub id: u64,
    pub name: String,
    pub age: u32,
    #[serde(rename = "employeeType")]
    pub employee_type: String,
}

impl LegacyEmployee {
    pub fn new(
        emp_id: u64,
        name: impl Into<String>,
        age: u32,
        salary: Decimal,
        emp_type: impl Into<String>,
    ) -> Self {
        Self {
            emp_id,
            name: name.into(),
            age,
            salary,
            emp_type: emp_type.into(),
            connector: Arc::new(NoopConnector),
        }
    }

    /// 替换数据库连接器（用于模拟失败）
    pub fn with_connector(mut self, connector: Arc<dyn LegacyConnector>) -> Self {
        self.connector = connector;
        self
    }

    /// 连接数据库并执行插入；失败时记录日志后继续，不向调用方报告
    pub fn save(&self) {
        let result = self
            .connector
            .connect(LEGACY_CONNECTION_STRING)
            .and_then(|mut conn| conn.execute(LEGACY_INSERT_QUERY, self));

        if let Err(err) = result {
            tracing::error!(employee_id = self.emp_id, error = %err, "Unable to save data");
        }
    }

    /// 按雇佣类型文本分支计税，返回进入的分支；未识别的取值不进入任何分支
    pub fn calculate_tax(&self) -> Option<TaxBranch> {
        if self.emp_type == "fullTime" {
            // 全职员工计税
            Some(TaxBranch::FullTime)
        } else if self.emp_type == "partTime" {
            // 兼职员工计税
            Some(TaxBranch::PartTime)
        } else {
            None
        }
    }

    pub fn info(&self) -> LegacyEmployeeInfo {
        LegacyEmployeeInfo {
            id: self.emp_id,
            name: self.name.clone(),
            age: self.age,
            employee_type: self.emp_type.clone(),
        }
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }
}
