//! 领域服务实现
//!
//! - [`StudentTeamService`]：成员关系不变式（容量、唯一归属）；
//! - 其余服务只做字段校验与存在性检查，然后委托仓储。
//!
use crate::error::{DomainError, DomainResult as Result};

mod company;
mod customer;
mod student;
mod student_team;
mod team;

pub use company::CompanyService;
pub use customer::CustomerService;
pub use student::StudentService;
pub use student_team::{MembershipChange, StudentTeamService};
pub use team::TeamService;

/// 必填参数：缺失时以 `InvalidArgument(missing)` 失败
pub(crate) fn require<'a, T>(value: Option<&'a T>, missing: &str) -> Result<&'a T> {
    value.ok_or_else(|| DomainError::invalid_argument(missing))
}
