//! 计税（tax）
//!
//! 计税协作者以领域服务的形式提供：输入为雇佣类型与薪资，输出为应纳税额。
//! 员工记录本身不包含任何计税逻辑。
//!
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain_service::DomainService;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{EmploymentType, ValueObject};

/// 计税输入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableIncome {
    pub employment_type: EmploymentType,
    pub salary: Decimal,
}

/// 计税协作者：输入 [`TaxableIncome`]，输出应纳税额
///
/// 任何满足该输入/输出约定的 [`DomainService`] 都自动成为 `TaxCalculator`。
pub trait TaxCalculator:
    DomainService<Input = TaxableIncome, Output = Decimal, Error = DomainError>
{
}

impl<T> TaxCalculator for T where
    T: DomainService<Input = TaxableIncome, Output = Decimal, Error = DomainError>
{
}

/// 按雇佣类型区分的固定税率（小数表示，例如 `0.30`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub full_time: Decimal,
    pub part_time: Decimal,
}

impl TaxRates {
    pub fn rate_for(&self, employment_type: EmploymentType) -> Decimal {
        match employment_type {
            EmploymentType::FullTime => self.full_time,
            EmploymentType::PartTime => self.part_time,
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            full_time: Decimal::new(30, 2),
            part_time: Decimal::new(15, 2),
        }
    }
}

impl ValueObject for TaxRates {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        for (label, rate) in [("full_time", self.full_time), ("part_time", self.part_time)] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(DomainError::InvalidValue {
                    reason: format!("{label} tax rate must be within [0, 1], got {rate}"),
                });
            }
        }
        Ok(())
    }
}

/// 固定税率计税：税额 = 薪资 × 对应雇佣类型的税率，保留两位小数
#[derive(Debug, Clone, Default)]
pub struct FlatRateTaxCalculator {
    rates: TaxRates,
}

impl FlatRateTaxCalculator {
    pub fn new(rates: TaxRates) -> DomainResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }
}

#[async_trait]
impl DomainService for FlatRateTaxCalculator {
    type Input = TaxableIncome;
    type Output = Decimal;
    type Error = DomainError;

    async fn execute(&self, input: TaxableIncome) -> DomainResult<Decimal> {
        if input.salary < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                reason: format!("salary must not be negative, got {}", input.salary),
            });
        }

        let rate = self.rates.rate_for(input.employment_type);
        let tax = (input.salary * rate).round_dp(2);
        tracing::debug!(
            employment_type = %input.employment_type,
            %rate,
            %tax,
            "tax computed"
        );
        Ok(tax)
    }
}
