//! 实体（Entity）基础抽象
//!
//! 实体以标识（Id）区分：两个值只要标识相同，就视为同一实体，
//! 与其余属性是否一致无关。`#[entity]` 宏会据此生成 `PartialEq/Eq/Hash`。
//!
use std::{fmt::Display, hash::Hash};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型
    type Id: Clone + Eq + Hash + Ord + Display + Send + Sync;

    /// 使用给定标识创建实体，其余字段取默认值
    fn new(id: Self::Id) -> Self;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 是否与另一实体为同一标识
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
