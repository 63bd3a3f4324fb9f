//! 员工应用服务
//!
//! 持久化协作者与计税协作者都通过构造函数注入，记录本身不持有它们。
//!
use async_trait::async_trait;
use hr_domain::entity::Entity;
use hr_domain::error::DomainError;
use hr_domain::persist::EmployeeRepository;
use hr_domain::tax::{TaxCalculator, TaxableIncome};
use hr_domain::{Employee, EmployeeId, EmployeeInfo, EmploymentType};

use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::dto::{SalaryDto, TaxDto};
use crate::employee_commands::{RegisterEmployee, SaveEmployee};
use crate::employee_queries::{CalculateTax, GetEmployeeInfo, GetSalary};
use crate::error::{AppError, AppResult};
use crate::query::Query;
use crate::query_handler::QueryHandler;

/// 员工应用服务：编排记录、仓储与计税
pub struct EmployeeService<R, T> {
    repository: R,
    tax_calculator: T,
}

impl<R, T> EmployeeService<R, T> {
    pub fn new(repository: R, tax_calculator: T) -> Self {
        Self {
            repository,
            tax_calculator,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// 执行命令（避免在同时引入两个 handler trait 时出现 `handle` 歧义）
    pub async fn execute<C>(&self, ctx: &AppContext, cmd: C) -> AppResult<()>
    where
        C: Command,
        Self: CommandHandler<C>,
    {
        CommandHandler::handle(self, ctx, cmd).await
    }

    /// 执行查询
    pub async fn query<Q>(&self, ctx: &AppContext, q: Q) -> AppResult<Q::Dto>
    where
        Q: Query,
        Self: QueryHandler<Q>,
    {
        QueryHandler::handle(self, ctx, q).await
    }
}

impl<R, T> EmployeeService<R, T>
where
    R: EmployeeRepository,
{
    async fn require(&self, id: EmployeeId) -> AppResult<Employee> {
        self.repository
            .load(&id)
            .await?
            .ok_or(AppError::EmployeeNotFound(id))
    }
}

fn correlation(ctx: &AppContext) -> &str {
    ctx.correlation_id().unwrap_or("-")
}

fn actor(ctx: &AppContext) -> &str {
    ctx.actor_id().unwrap_or("-")
}

#[async_trait]
impl<R, T> CommandHandler<RegisterEmployee> for EmployeeService<R, T>
where
    R: EmployeeRepository,
    T: TaxCalculator,
{
    async fn handle(&self, ctx: &AppContext, cmd: RegisterEmployee) -> AppResult<()> {
        tracing::info!(
            command = RegisterEmployee::NAME,
            correlation_id = correlation(ctx),
            actor_id = actor(ctx),
            employee_id = %cmd.id,
            "handling command"
        );

        let employment_type: EmploymentType = cmd
            .employment_type
            .parse()
            .map_err(|e: DomainError| AppError::Validation(e.to_string()))?;

        let employee = Employee::new(cmd.id, cmd.name, cmd.age, cmd.salary, employment_type);
        self.repository.save(&employee).await?;
        Ok(())
    }
}

#[async_trait]
impl<R, T> CommandHandler<SaveEmployee> for EmployeeService<R, T>
where
    R: EmployeeRepository,
    T: TaxCalculator,
{
    async fn handle(&self, ctx: &AppContext, cmd: SaveEmployee) -> AppResult<()> {
        tracing::info!(
            command = SaveEmployee::NAME,
            correlation_id = correlation(ctx),
            actor_id = actor(ctx),
            employee_id = %cmd.employee.id(),
            "handling command"
        );
        self.repository.save(&cmd.employee).await?;
        Ok(())
    }
}

#[async_trait]
impl<R, T> QueryHandler<GetEmployeeInfo> for EmployeeService<R, T>
where
    R: EmployeeRepository,
    T: TaxCalculator,
{
    async fn handle(&self, ctx: &AppContext, q: GetEmployeeInfo) -> AppResult<EmployeeInfo> {
        tracing::debug!(
            query = GetEmployeeInfo::NAME,
            correlation_id = correlation(ctx),
            actor_id = actor(ctx),
            employee_id = %q.id,
            "handling query"
        );
        Ok(self.require(q.id).await?.info())
    }
}

#[async_trait]
impl<R, T> QueryHandler<GetSalary> for EmployeeService<R, T>
where
    R: EmployeeRepository,
    T: TaxCalculator,
{
    async fn handle(&self, ctx: &AppContext, q: GetSalary) -> AppResult<SalaryDto> {
        tracing::debug!(
            query = GetSalary::NAME,
            correlation_id = correlation(ctx),
            actor_id = actor(ctx),
            employee_id = %q.id,
            "handling query"
        );
        let employee = self.require(q.id).await?;
        Ok(SalaryDto {
            id: q.id,
            salary: employee.salary(),
        })
    }
}

#[async_trait]
impl<R, T> QueryHandler<CalculateTax> for EmployeeService<R, T>
where
    R: EmployeeRepository,
    T: TaxCalculator,
{
    async fn handle(&self, ctx: &AppContext, q: CalculateTax) -> AppResult<TaxDto> {
        tracing::debug!(
            query = CalculateTax::NAME,
            correlation_id = correlation(ctx),
            actor_id = actor(ctx),
            employee_id = %q.id,
            "handling query"
        );
        let employee = self.require(q.id).await?;
        let tax = self
            .tax_calculator
            .execute(TaxableIncome {
                employment_type: employee.employment_type(),
                salary: employee.salary(),
            })
            .await?;

        Ok(TaxDto {
            id: q.id,
            employee_type: employee.employment_type(),
            salary: employee.salary(),
            tax,
        })
    }
}
