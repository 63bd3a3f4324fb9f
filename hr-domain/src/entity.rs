//! 实体（Entity）基础抽象
//!
//! 为领域记录提供统一的标识访问能力。标识只在构造时赋值，之后不可变更，
//! 因此 trait 只暴露只读访问器。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display + Eq + std::hash::Hash;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
