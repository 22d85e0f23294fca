//! 持久化协议（persist）
//!
//! 定义各实体的仓储接口及其派生查询，并提供可选的内存实现（特性 `inmemory`）。
//! 具体存储后端由上层实现 [`Repository`] 后注入领域服务。
//!
mod repository;

#[cfg(feature = "inmemory")]
mod inmemory;

pub use repository::{
    CompanyRepository, CustomerRepository, Repository, StudentRepository, TeamRepository,
    TeamRepositoryExt,
};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
