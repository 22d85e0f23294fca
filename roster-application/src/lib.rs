//! roster 应用层（roster-application）
//!
//! 以命令/查询总线承载学生-队伍用例：
//! - [`command`] / [`query`]：命令与查询的标记 trait；
//! - [`InMemoryCommandBus`] / [`InMemoryQueryBus`]：进程内总线，
//!   每次分发在带 `correlation_id` 的 tracing span 内执行；
//! - [`roster`]：成员关系用例及其装配入口 [`roster::RosterModule`]。
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;
pub mod inmemory_query_bus;
pub mod query;
pub mod query_bus;
pub mod query_handler;
pub mod roster;

pub use inmemory_command_bus::InMemoryCommandBus;
pub use inmemory_query_bus::InMemoryQueryBus;
