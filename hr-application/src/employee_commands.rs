//! 员工相关命令
use hr_domain::{Employee, EmployeeId};
use rust_decimal::Decimal;

use crate::command::Command;

/// 登记新员工：雇佣类型以原始文本传入，在应用层解析
#[derive(Debug, Clone)]
pub struct RegisterEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub salary: Decimal,
    pub employment_type: String,
}

impl Command for RegisterEmployee {
    const NAME: &'static str = "employee.register";
}

/// 保存一份已构造好的员工记录
#[derive(Debug, Clone)]
pub struct SaveEmployee {
    pub employee: Employee,
}

impl Command for SaveEmployee {
    const NAME: &'static str = "employee.save";
}
