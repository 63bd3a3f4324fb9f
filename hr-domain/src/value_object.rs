//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象。这里主要承载雇佣类型：
//! 以带标签的枚举替代字符串比较，每个变体对应一个处理分支，
//! 无法识别的文本在解析阶段即显式失败。
//!
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 雇佣类型：决定员工的薪酬与计税方式
///
/// # 示例
///
/// ```
/// use hr_domain::value_object::EmploymentType;
///
/// let t: EmploymentType = "fullTime".parse().unwrap();
/// assert_eq!(t, EmploymentType::FullTime);
/// assert_eq!(t.to_string(), "fullTime");
///
/// assert!("contractor".parse::<EmploymentType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmploymentType {
    FullTime,
    PartTime,
}

impl EmploymentType {
    /// 稳定的文本表示（与序列化结果一致）
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "fullTime",
            Self::PartTime => "partTime",
        }
    }
}

impl ValueObject for EmploymentType {
    type Error = DomainError;

    // 枚举本身即是合法取值的全集
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullTime" => Ok(Self::FullTime),
            "partTime" => Ok(Self::PartTime),
            other => Err(DomainError::UnknownEmploymentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试已知取值的解析
    #[test]
    fn test_parse_known_types() {
        assert_eq!(
            "fullTime".parse::<EmploymentType>().unwrap(),
            EmploymentType::FullTime
        );
        assert_eq!(
            "partTime".parse::<EmploymentType>().unwrap(),
            EmploymentType::PartTime
        );
    }

    // 测试未知取值显式报错，而不是静默跳过
    #[test]
    fn test_parse_unknown_type_is_error() {
        let err = "contractor".parse::<EmploymentType>().unwrap_err();
        match err {
            DomainError::UnknownEmploymentType(raw) => assert_eq!(raw, "contractor"),
            other => panic!("unexpected {other:?}"),
        }

        // 大小写敏感
        assert!("FullTime".parse::<EmploymentType>().is_err());
        assert!("".parse::<EmploymentType>().is_err());
    }

    // 测试 Display 与 FromStr 互逆
    #[test]
    fn test_display_matches_parse() {
        for t in [EmploymentType::FullTime, EmploymentType::PartTime] {
            assert_eq!(t.to_string().parse::<EmploymentType>().unwrap(), t);
        }
    }

    // 测试序列化形式
    #[test]
    fn test_employment_type_serde() {
        let json = serde_json::to_string(&EmploymentType::PartTime).unwrap();
        assert_eq!(json, "\"partTime\"");

        let t: EmploymentType = serde_json::from_str("\"fullTime\"").unwrap();
        assert_eq!(t, EmploymentType::FullTime);

        assert!(serde_json::from_str::<EmploymentType>("\"intern\"").is_err());
    }

    #[test]
    fn test_validate_always_ok() {
        assert!(EmploymentType::FullTime.validate().is_ok());
    }
}
