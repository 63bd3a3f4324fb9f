//! 员工应用层（hr-application）
//!
//! 应用服务 [`EmployeeService`] 持有持久化与计税两个协作者，
//! 以命令/查询的形式对外提供登记、保存、读取与计税能力。
//! 员工记录本身保持为纯数据，跨关注点的编排只发生在这一层。
//!
pub mod command;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod employee_commands;
pub mod employee_queries;
pub mod employee_service;
pub mod error;
pub mod query;
pub mod query_handler;

pub use employee_service::EmployeeService;
