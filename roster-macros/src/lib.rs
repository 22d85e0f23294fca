//! roster 过程宏
//!
//! - `#[entity]`：为具名字段结构体补齐 `id` 字段、合并常用派生，
//!   并实现 `::roster_domain::entity::Entity` 与「按标识相等」语义；
//! - `#[entity_id]`：为单字段 tuple struct 生成强类型标识（newtype）。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;

/// 实体宏
/// - 追加字段：`id: IdType`（若缺失）并置于字段最前
/// - 派生：Debug（可关闭）、Clone、Default、Serialize、Deserialize
/// - 实现 `Entity`（`new/id`），并以 `id` 实现 `PartialEq/Eq/Hash`
/// - 参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `i32`
///
/// 由于相等性只看标识，目标结构体不得再派生 `PartialEq/Eq/Hash`。
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于 `struct StudentId(i32);` 这类单字段 tuple struct，生成：
/// - 派生：Default, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord
/// - `new`、`Display`、`FromStr`、`AsRef`、双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
