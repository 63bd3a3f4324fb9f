use hr_domain::{EmployeeId, EmployeeInfo, EmploymentType};
use rust_decimal::Decimal;
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层；
/// - 应保持只读特性与简洁结构。
pub trait Dto: Serialize + Send + Sync + 'static {}

// 信息快照本身就是只读且不含薪资的结构，直接作为 DTO 输出
impl Dto for EmployeeInfo {}

/// 金额字段按 `rust_decimal` 默认方式序列化为 JSON 字符串（如 `"50000"`），
/// 避免经由浮点数丢失精度。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryDto {
    pub id: EmployeeId,
    pub salary: Decimal,
}

impl Dto for SalaryDto {}

/// 与 [`SalaryDto`] 相同，`salary` 与 `tax` 序列化为字符串形式的十进制数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDto {
    pub id: EmployeeId,
    pub employee_type: EmploymentType,
    pub salary: Decimal,
    pub tax: Decimal,
}

impl Dto for TaxDto {}
