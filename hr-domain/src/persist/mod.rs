//! 持久化（persist）
//!
//! 员工记录的持久化协作者。记录本身不知道如何保存自己，
//! 由拥有它的应用服务持有一个 `EmployeeRepository` 并在需要时调用。
//!
//! 该模块只定义协议与一个内存实现，具体存储后端由上层提供实现并注入。
//!
mod employee_repository;
mod inmemory;

pub use employee_repository::EmployeeRepository;
pub use inmemory::InMemoryEmployeeRepository;
