use crate::{command::Command, command_handler::CommandHandler, context::AppContext, error::AppError};
use async_trait::async_trait;
use roster_domain::entity::Entity;
use roster_domain::model::{Student, StudentId, Team, TeamId};
use roster_domain::persist::{StudentRepository, TeamRepository};
use roster_domain::service::{StudentService, StudentTeamService, TeamService};

/// 将学生加入队伍
#[derive(Debug, Clone)]
pub struct AssignStudent {
    pub team_id: TeamId,
    pub student_id: StudentId,
}

impl Command for AssignStudent {
    const NAME: &'static str = "AssignStudent";
}

/// 将学生从一支队伍转入另一支
#[derive(Debug, Clone)]
pub struct TransferStudent {
    pub from_team_id: TeamId,
    pub to_team_id: TeamId,
    pub student_id: StudentId,
}

impl Command for TransferStudent {
    const NAME: &'static str = "TransferStudent";
}

/// 将学生移出队伍
#[derive(Debug, Clone)]
pub struct ReleaseStudent {
    pub team_id: TeamId,
    pub student_id: StudentId,
}

impl Command for ReleaseStudent {
    const NAME: &'static str = "ReleaseStudent";
}

/// 登记学生（经字段校验）
#[derive(Debug, Clone)]
pub struct RegisterStudent {
    pub student: Student,
}

impl Command for RegisterStudent {
    const NAME: &'static str = "RegisterStudent";
}

/// 登记一支空队伍
#[derive(Debug, Clone)]
pub struct RegisterTeam {
    pub team_id: TeamId,
}

impl Command for RegisterTeam {
    const NAME: &'static str = "RegisterTeam";
}

/// 成员关系命令处理器
pub struct MembershipHandler<S, T> {
    service: StudentTeamService<S, T>,
}

impl<S, T> MembershipHandler<S, T> {
    pub fn new(service: StudentTeamService<S, T>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<S, T> CommandHandler<AssignStudent> for MembershipHandler<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, cmd: AssignStudent) -> Result<(), AppError> {
        self.service
            .add_student_to_team(Some(&Team::new(cmd.team_id)), Some(&Student::new(cmd.student_id)))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<S, T> CommandHandler<TransferStudent> for MembershipHandler<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, cmd: TransferStudent) -> Result<(), AppError> {
        self.service
            .move_student_to_new_team(
                Some(&Team::new(cmd.from_team_id)),
                Some(&Team::new(cmd.to_team_id)),
                Some(&Student::new(cmd.student_id)),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<S, T> CommandHandler<ReleaseStudent> for MembershipHandler<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, cmd: ReleaseStudent) -> Result<(), AppError> {
        self.service
            .remove_student_from_team(
                Some(&Team::new(cmd.team_id)),
                Some(&Student::new(cmd.student_id)),
            )
            .await?;
        Ok(())
    }
}

/// 登记类命令处理器
pub struct RegistrationHandler<S, T> {
    students: StudentService<S>,
    teams: TeamService<T>,
}

impl<S, T> RegistrationHandler<S, T> {
    pub fn new(students: StudentService<S>, teams: TeamService<T>) -> Self {
        Self { students, teams }
    }
}

#[async_trait]
impl<S, T> CommandHandler<RegisterStudent> for RegistrationHandler<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, cmd: RegisterStudent) -> Result<(), AppError> {
        self.students.add_student(Some(&cmd.student)).await?;
        Ok(())
    }
}

#[async_trait]
impl<S, T> CommandHandler<RegisterTeam> for RegistrationHandler<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, cmd: RegisterTeam) -> Result<(), AppError> {
        let team = Team {
            id: cmd.team_id,
            students: Some(Vec::new()),
        };
        self.teams.add_team(Some(&team)).await?;
        Ok(())
    }
}
