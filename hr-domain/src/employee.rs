//! 员工记录（Employee）
//!
//! 纯数据记录：只负责持有字段并提供只读访问。
//! 持久化交给 [`EmployeeRepository`](crate::persist::EmployeeRepository)，
//! 计税交给 [`TaxCalculator`](crate::tax::TaxCalculator)，二者都不是记录上的方法。
//!
use std::{fmt, str::FromStr};

use bon::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainError;
use crate::value_object::EmploymentType;

/// 员工标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// 员工记录
///
/// 构造时不做任何字段校验；`id` 只在构造时赋值，之后没有修改入口。
///
/// # 示例
///
/// ```
/// use hr_domain::{Employee, EmployeeId, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let ann = Employee::new(
///     EmployeeId::new(1),
///     "Ann",
///     30,
///     Decimal::from(50_000),
///     EmploymentType::FullTime,
/// );
/// assert_eq!(ann.info().id.value(), 1);
/// assert_eq!(ann.salary(), Decimal::from(50_000));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    #[builder(into)]
    name: String,
    age: u32,
    salary: Decimal,
    employment_type: EmploymentType,
}

impl Employee {
    /// 使用全部五个字段创建员工记录
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        age: u32,
        salary: Decimal,
        employment_type: EmploymentType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            salary,
            employment_type,
        }
    }

    /// 只读快照（不含薪资），每次调用都生成新的结构
    pub fn info(&self) -> EmployeeInfo {
        EmployeeInfo {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            employment_type: self.employment_type,
        }
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 员工信息快照：对外展示用，刻意不包含薪资
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    #[serde(rename = "employeeType")]
    pub employment_type: EmploymentType,
}
