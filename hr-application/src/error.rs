use hr_domain::EmployeeId;
use hr_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),
}

pub type AppResult<T> = Result<T, AppError>;
