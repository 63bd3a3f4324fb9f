mod config;
mod obs;

use std::sync::Arc;

use hr_application::EmployeeService;
use hr_application::context::AppContext;
use hr_application::employee_commands::RegisterEmployee;
use hr_application::employee_queries::{CalculateTax, GetEmployeeInfo, GetSalary};
use hr_domain::EmployeeId;
use hr_domain::legacy::{LegacyConnection, LegacyConnector, LegacyDbError, LegacyEmployee};
use hr_domain::persist::InMemoryEmployeeRepository;
use hr_domain::tax::FlatRateTaxCalculator;
use rust_decimal::Decimal;

use crate::config::HrConfig;

/// 只接受配置中的连接串；旧式类型写死的连接串与之不符时连接失败
struct ConfiguredConnector {
    url: String,
}

struct LoggingConnection;

impl LegacyConnection for LoggingConnection {
    fn execute(&mut self, sql: &str, employee: &LegacyEmployee) -> Result<(), LegacyDbError> {
        tracing::info!(sql, employee_id = employee.info().id, "legacy query executed");
        Ok(())
    }
}

impl LegacyConnector for ConfiguredConnector {
    fn connect(
        &self,
        connection_string: &str,
    ) -> Result<Box<dyn LegacyConnection>, LegacyDbError> {
        if connection_string != self.url {
            return Err(LegacyDbError::Connect {
                reason: format!("no database at {connection_string:?}"),
            });
        }
        Ok(Box::new(LoggingConnection))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = HrConfig::load()?;
    obs::init_tracing(&config.log_filter)?;
    tracing::info!(?config, "configuration loaded");

    // --- 重构后：记录只持有数据，协作者由服务注入 ---
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    let calculator = FlatRateTaxCalculator::new(config.tax_rates)?;
    let service = EmployeeService::new(repository, calculator);

    let ctx = AppContext::builder().correlation_id("demo-1").build();
    let ann = EmployeeId::new(1);
    service
        .execute(
            &ctx,
            RegisterEmployee {
                id: ann,
                name: "Ann".into(),
                age: 30,
                salary: Decimal::from(50_000),
                employment_type: "fullTime".into(),
            },
        )
        .await?;

    let info = service.query(&ctx, GetEmployeeInfo { id: ann }).await?;
    println!("info:   {}", serde_json::to_string(&info)?);
    let salary = service.query(&ctx, GetSalary { id: ann }).await?;
    println!("salary: {}", salary.salary);
    let tax = service.query(&ctx, CalculateTax { id: ann }).await?;
    println!("tax:    {}", serde_json::to_string(&tax)?);

    if let Err(err) = service
        .execute(
            &ctx,
            RegisterEmployee {
                id: EmployeeId::new(2),
                name: "Cy".into(),
                age: 41,
                salary: Decimal::from(80_000),
                employment_type: "contractor".into(),
            },
        )
        .await
    {
        println!("rejected: {err}");
    }

    // --- 旧式：记录自己连接数据库并按字符串分支计税 ---
    let connector = Arc::new(ConfiguredConnector {
        url: config.legacy_db_url.clone(),
    });
    for emp_type in ["fullTime", "contractor"] {
        let legacy = LegacyEmployee::new(1, "Ann", 30, Decimal::from(50_000), emp_type)
            .with_connector(connector.clone());
        legacy.save();
        println!("legacy {emp_type}: branch={:?}", legacy.calculate_tax());
    }

    Ok(())
}
