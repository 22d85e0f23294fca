//! 领域模型
//!
//! 学生、队伍、公司、客户与项目。所有实体均以整数标识区分，
//! 相等性只比较标识（见 [`crate::entity::Entity`]）。
//!
mod company;
mod customer;
mod ids;
mod project;
mod student;
mod team;

pub use company::Company;
pub use customer::Customer;
pub use ids::{CompanyId, CustomerId, ProjectId, StudentId, TeamId};
pub use project::Project;
pub use student::Student;
pub use team::{MAX_STUDENTS, Team};
