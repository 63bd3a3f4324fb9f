//! 员工相关查询
use hr_domain::{EmployeeId, EmployeeInfo};

use crate::dto::{SalaryDto, TaxDto};
use crate::query::Query;

#[derive(Debug, Clone, Copy)]
pub struct GetEmployeeInfo {
    pub id: EmployeeId,
}

impl Query for GetEmployeeInfo {
    const NAME: &'static str = "employee.info";
    type Dto = EmployeeInfo;
}

#[derive(Debug, Clone, Copy)]
pub struct GetSalary {
    pub id: EmployeeId,
}

impl Query for GetSalary {
    const NAME: &'static str = "employee.salary";
    type Dto = SalaryDto;
}

#[derive(Debug, Clone, Copy)]
pub struct CalculateTax {
    pub id: EmployeeId,
}

impl Query for CalculateTax {
    const NAME: &'static str = "employee.calculate_tax";
    type Dto = TaxDto;
}
