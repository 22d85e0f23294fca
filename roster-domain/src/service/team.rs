use crate::{
    error::{DomainError, DomainResult as Result},
    model::{Team, TeamId},
    persist::TeamRepository,
    service::require,
};

const TEAM_MISSING: &str = "Team is missing";

/// 队伍服务：队伍本身的增删改查
///
/// 不检查容量；成员变更请走 `StudentTeamService`。
pub struct TeamService<R> {
    repo: R,
}

impl<R> TeamService<R>
where
    R: TeamRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn try_new(repo: Option<R>) -> Result<Self> {
        repo.map(Self::new)
            .ok_or_else(|| DomainError::invalid_argument("Team Repository is missing"))
    }

    /// 存在性检查先于字段校验
    pub async fn add_team(&self, team: Option<&Team>) -> Result<()> {
        let team = require(team, TEAM_MISSING)?;
        if self.repo.get_by_id(&team.id).await?.is_some() {
            return Err(DomainError::invalid_operation("Team already in Repository"));
        }
        validate(team)?;
        self.repo.add(team.clone()).await
    }

    pub async fn update_team(&self, team: Option<&Team>) -> Result<()> {
        let team = require(team, TEAM_MISSING)?;
        validate(team)?;
        if self.repo.get_by_id(&team.id).await?.is_none() {
            return Err(DomainError::invalid_operation(
                "Team does not exist in the Team Repository",
            ));
        }
        self.repo.update(team.clone()).await
    }

    pub async fn remove_team(&self, team: Option<&Team>) -> Result<()> {
        let team = require(team, TEAM_MISSING)?;
        if self.repo.get_by_id(&team.id).await?.is_none() {
            return Err(DomainError::invalid_operation("Team does not exist"));
        }
        self.repo.remove(team).await
    }

    pub async fn get_team_by_id(&self, id: &TeamId) -> Result<Option<Team>> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all_teams(&self) -> Result<Vec<Team>> {
        self.repo.get_all().await
    }
}

fn validate(team: &Team) -> Result<()> {
    if !team.id.is_valid() {
        return Err(DomainError::invalid_argument("Invalid Team Id"));
    }
    if team.students.is_none() {
        return Err(DomainError::invalid_argument("Invalid Students property"));
    }
    Ok(())
}
