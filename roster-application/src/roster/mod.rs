//! 学生-队伍用例
//!
//! 以命令/查询的形式暴露成员关系操作：命令只携带标识，
//! 处理器将其转为标识引用交给领域服务，由领域服务取回仓储中的实体。
//! [`RosterModule`] 负责为一对学生/队伍仓储装配全部处理器。
//!
mod commands;
mod queries;

pub use commands::{
    AssignStudent, MembershipHandler, RegisterStudent, RegisterTeam, RegistrationHandler,
    ReleaseStudent, TransferStudent,
};
pub use queries::{
    FindStudentTeam, GetTeamRoster, RosterQueryHandler, StudentTeamDto, TeamRosterDto,
};

use crate::{InMemoryCommandBus, InMemoryQueryBus, error::AppError};
use roster_domain::persist::{StudentRepository, TeamRepository};
use roster_domain::service::{StudentService, StudentTeamService, TeamService};
use std::sync::Arc;

pub struct RosterModule<S, T> {
    students: S,
    teams: T,
}

impl<S, T> RosterModule<S, T>
where
    S: StudentRepository + Clone + 'static,
    T: TeamRepository + Clone + 'static,
{
    pub fn new(students: S, teams: T) -> Self {
        Self { students, teams }
    }

    /// 注册全部命令与查询处理器；任一重复注册即返回错误
    pub fn register(
        &self,
        commands: &InMemoryCommandBus,
        queries: &InMemoryQueryBus,
    ) -> Result<(), AppError> {
        let membership = Arc::new(MembershipHandler::new(StudentTeamService::new(
            self.students.clone(),
            self.teams.clone(),
        )));
        commands.register::<AssignStudent, _>(membership.clone())?;
        commands.register::<TransferStudent, _>(membership.clone())?;
        commands.register::<ReleaseStudent, _>(membership)?;

        let registration = Arc::new(RegistrationHandler::new(
            StudentService::new(self.students.clone()),
            TeamService::new(self.teams.clone()),
        ));
        commands.register::<RegisterStudent, _>(registration.clone())?;
        commands.register::<RegisterTeam, _>(registration)?;

        let roster = Arc::new(RosterQueryHandler::new(self.teams.clone()));
        queries.register::<GetTeamRoster, _>(roster.clone())?;
        queries.register::<FindStudentTeam, _>(roster)?;

        tracing::debug!("roster handlers registered");
        Ok(())
    }
}
