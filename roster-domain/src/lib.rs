//! roster 领域层（roster-domain）
//!
//! 学生/队伍/公司/客户管理的领域服务层，位于纯 CRUD 仓储之前：
//! - 实体（`model`）与按标识相等的实体抽象（`entity`）
//! - 仓储协议与内存实现（`persist`）
//! - 领域服务（`service`）：字段校验、存在性检查，以及成员关系不变式
//!
//! 核心是 [`service::StudentTeamService`]：在容量（每队至多 4 人）与
//! 唯一归属（每名学生至多属于一支队伍）约束下完成加入、转队与移出。
//!
//! 典型用法：
//! 1. 为 `Student`、`Team` 提供 [`persist::Repository`] 实现（或使用 `InMemoryRepository`）；
//! 2. 以两个仓储构造 `StudentTeamService`；
//! 3. 调用 `add_student_to_team` / `move_student_to_new_team` / `remove_student_from_team`，
//!    失败时返回携带固定消息的 [`error::DomainError`]，且不会产生任何写入。
//!
pub mod domain_service;
pub mod entity;
pub mod error;
pub mod model;
pub mod persist;
pub mod service;

// 允许在本 crate 内部通过 ::roster_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内也能解析。
extern crate self as roster_domain;
