//! 员工领域层（hr-domain）
//!
//! 以单一职责为中心组织员工模型：
//! - 员工记录（`employee`）只承载数据与只读访问；
//! - 雇佣类型（`value_object`）以枚举表达，逐变体处理，未知取值显式报错；
//! - 持久化协作者（`persist`）与计税协作者（`tax`）以 trait 定义，由上层注入；
//! - 旧式实现（`legacy`）保留持久化、计税与数据访问混在一起的写法，仅作对照。
//!
//! 本 crate 不依赖具体存储或计税规则，仅定义领域接口、最小错误类型与内存实现。
//!
pub mod domain_service;
pub mod employee;
pub mod entity;
pub mod error;
pub mod legacy;
pub mod persist;
pub mod tax;
pub mod value_object;

pub use employee::{Employee, EmployeeId, EmployeeInfo};
pub use value_object::EmploymentType;
