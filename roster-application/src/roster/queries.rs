use crate::{
    context::AppContext, dto::Dto, error::AppError, query::Query, query_handler::QueryHandler,
};
use async_trait::async_trait;
use roster_domain::entity::Entity;
use roster_domain::model::{MAX_STUDENTS, Student, StudentId, TeamId};
use roster_domain::persist::{TeamRepository, TeamRepositoryExt};
use serde::Serialize;

/// 查询队伍花名册；队伍不存在时返回 `AppError::NotFound`
#[derive(Debug, Clone)]
pub struct GetTeamRoster {
    pub team_id: TeamId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRosterDto {
    pub team_id: TeamId,
    /// 按加入顺序
    pub student_ids: Vec<StudentId>,
    pub capacity: usize,
    pub is_full: bool,
}

impl Dto for TeamRosterDto {}

impl Query for GetTeamRoster {
    const NAME: &'static str = "GetTeamRoster";
    type Dto = TeamRosterDto;
}

/// 查询学生当前所在队伍
#[derive(Debug, Clone)]
pub struct FindStudentTeam {
    pub student_id: StudentId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentTeamDto {
    pub student_id: StudentId,
    pub team_id: Option<TeamId>,
}

impl Dto for StudentTeamDto {}

impl Query for FindStudentTeam {
    const NAME: &'static str = "FindStudentTeam";
    type Dto = StudentTeamDto;
}

pub struct RosterQueryHandler<T> {
    teams: T,
}

impl<T> RosterQueryHandler<T> {
    pub fn new(teams: T) -> Self {
        Self { teams }
    }
}

#[async_trait]
impl<T> QueryHandler<GetTeamRoster> for RosterQueryHandler<T>
where
    T: TeamRepository,
{
    async fn handle(&self, _ctx: &AppContext, q: GetTeamRoster) -> Result<TeamRosterDto, AppError> {
        let team = self
            .teams
            .get_by_id(&q.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("team {}", q.team_id)))?;

        Ok(TeamRosterDto {
            team_id: team.id,
            student_ids: team.student_ids(),
            capacity: MAX_STUDENTS,
            is_full: team.is_full(),
        })
    }
}

#[async_trait]
impl<T> QueryHandler<FindStudentTeam> for RosterQueryHandler<T>
where
    T: TeamRepository,
{
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: FindStudentTeam,
    ) -> Result<StudentTeamDto, AppError> {
        let team = self.teams.team_of(&Student::new(q.student_id)).await?;
        Ok(StudentTeamDto {
            student_id: q.student_id,
            team_id: team.map(|t| t.id),
        })
    }
}
