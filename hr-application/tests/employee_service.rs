use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use hr_application::EmployeeService;
use hr_application::context::AppContext;
use hr_application::employee_commands::{RegisterEmployee, SaveEmployee};
use hr_application::employee_queries::{CalculateTax, GetEmployeeInfo, GetSalary};
use hr_application::error::AppError;
use hr_domain::error::{DomainError, DomainResult};
use hr_domain::persist::{EmployeeRepository, InMemoryEmployeeRepository};
use hr_domain::tax::{FlatRateTaxCalculator, TaxRates};
use hr_domain::{Employee, EmployeeId, EmploymentType};
use rust_decimal::Decimal;
use serde_json::json;

type Service = EmployeeService<Arc<InMemoryEmployeeRepository>, FlatRateTaxCalculator>;

fn service() -> (Service, Arc<InMemoryEmployeeRepository>) {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let svc = EmployeeService::new(repo.clone(), FlatRateTaxCalculator::default());
    (svc, repo)
}

fn ctx() -> AppContext {
    AppContext::builder()
        .correlation_id("cor-1")
        .actor_id("hr-admin")
        .build()
}

fn register(id: u64, salary: i64, employment_type: &str) -> RegisterEmployee {
    RegisterEmployee {
        id: EmployeeId::new(id),
        name: "Ann".into(),
        age: 30,
        salary: Decimal::from(salary),
        employment_type: employment_type.into(),
    }
}

#[tokio::test]
async fn register_then_read_info_salary_and_tax() -> AnyResult<()> {
    let (svc, repo) = service();
    let ctx = ctx();

    svc.execute(&ctx, register(1, 50_000, "fullTime")).await?;
    assert_eq!(repo.len(), 1);

    let info = svc
        .query(&ctx, GetEmployeeInfo {
            id: EmployeeId::new(1),
        })
        .await?;
    assert_eq!(
        serde_json::to_value(&info)?,
        json!({ "id": 1, "name": "Ann", "age": 30, "employeeType": "fullTime" })
    );

    let salary = svc
        .query(&ctx, GetSalary {
            id: EmployeeId::new(1),
        })
        .await?;
    assert_eq!(salary.salary, Decimal::from(50_000));
    // 金额以字符串形式的十进制数输出
    assert_eq!(
        serde_json::to_value(&salary)?,
        json!({ "id": 1, "salary": "50000" })
    );

    let tax = svc
        .query(&ctx, CalculateTax {
            id: EmployeeId::new(1),
        })
        .await?;
    assert_eq!(tax.employee_type, EmploymentType::FullTime);
    assert_eq!(tax.tax, Decimal::from(15_000));
    let tax_json = serde_json::to_value(&tax)?;
    assert_eq!(tax_json["employeeType"], json!("fullTime"));
    assert!(tax_json["tax"].is_string());
    assert!(tax_json["salary"].is_string());
    Ok(())
}

#[tokio::test]
async fn unknown_employment_type_is_a_validation_error() {
    let (svc, repo) = service();

    let err = svc
        .execute(&ctx(), register(2, 1_000, "contractor"))
        .await
        .unwrap_err();
    match err {
        AppError::Validation(reason) => assert!(reason.contains("contractor")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(repo.is_empty());
}

#[tokio::test]
async fn missing_employee_is_not_found() {
    let (svc, _repo) = service();
    let err = svc
        .query(&AppContext::default(), CalculateTax {
            id: EmployeeId::new(404),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(id) if id.value() == 404));
}

#[tokio::test]
async fn save_employee_delegates_to_repository() -> AnyResult<()> {
    let (svc, repo) = service();
    let employee = Employee::new(
        EmployeeId::new(3),
        "Bo",
        22,
        Decimal::from(20_000),
        EmploymentType::PartTime,
    );

    svc.execute(&ctx(), SaveEmployee {
        employee: employee.clone(),
    })
    .await?;

    assert_eq!(repo.load(&EmployeeId::new(3)).await?, Some(employee));

    let tax = svc
        .query(&ctx(), CalculateTax {
            id: EmployeeId::new(3),
        })
        .await?;
    assert_eq!(tax.tax, Decimal::from(3_000));
    Ok(())
}

#[tokio::test]
async fn custom_rates_flow_through_service() -> AnyResult<()> {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let calc = FlatRateTaxCalculator::new(TaxRates {
        full_time: Decimal::new(10, 2),
        part_time: Decimal::new(5, 2),
    })?;
    let svc = EmployeeService::new(repo, calc);

    svc.execute(&ctx(), register(4, 1_000, "partTime")).await?;
    let tax = svc
        .query(&ctx(), CalculateTax {
            id: EmployeeId::new(4),
        })
        .await?;
    assert_eq!(tax.tax, Decimal::from(50));
    Ok(())
}

// 仓储失败应以领域错误的形式向上传播
struct BrokenRepository;

#[async_trait]
impl EmployeeRepository for BrokenRepository {
    async fn save(&self, _employee: &Employee) -> DomainResult<()> {
        Err(DomainError::Repository {
            reason: "disk full".into(),
        })
    }

    async fn load(&self, _id: &EmployeeId) -> DomainResult<Option<Employee>> {
        Err(DomainError::Repository {
            reason: "disk full".into(),
        })
    }
}

#[tokio::test]
async fn repository_errors_are_propagated() {
    let svc = EmployeeService::new(BrokenRepository, FlatRateTaxCalculator::default());

    let err = svc
        .execute(&ctx(), register(5, 1, "fullTime"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::Repository { .. })
    ));

    let err = svc
        .query(&ctx(), GetSalary {
            id: EmployeeId::new(5),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));
}
