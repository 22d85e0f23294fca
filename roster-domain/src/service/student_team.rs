//! 学生-队伍成员关系服务
//!
//! 维护两条跨实体不变式：
//! - 容量：每支队伍至多 [`MAX_STUDENTS`] 名学生；
//! - 唯一归属：同一学生至多出现在一支队伍的花名册中。
//!
//! 每个操作按固定顺序检查前置条件，首个失败即返回，且不产生任何仓储写入；
//! 全部通过后只执行约定次数的 `TeamRepository::update`。
//! 同一服务实例上的操作经由写闸门串行化，使「全量扫描归属」与随后的写入
//! 对其他调用方表现为原子操作。
//!
use crate::{
    domain_service::DomainService,
    error::{DomainError, DomainResult as Result},
    model::{MAX_STUDENTS, Student, Team},
    persist::{StudentRepository, TeamRepository},
    service::require,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

const TEAM_MISSING: &str = "Team is missing";
const STUDENT_MISSING: &str = "Student is missing";
const TEAM_NOT_FOUND: &str = "Team not found";
const STUDENT_NOT_FOUND: &str = "Student not found";

pub struct StudentTeamService<S, T> {
    students: S,
    teams: T,
    write_gate: Arc<Mutex<()>>,
}

impl<S, T> Clone for StudentTeamService<S, T>
where
    S: Clone,
    T: Clone,
{
    /// 克隆体共享同一写闸门
    fn clone(&self) -> Self {
        Self {
            students: self.students.clone(),
            teams: self.teams.clone(),
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<S, T> StudentTeamService<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    pub const MAX_STUDENTS: usize = MAX_STUDENTS;

    pub fn new(students: S, teams: T) -> Self {
        Self {
            students,
            teams,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// 依赖可能缺失时的构造入口，缺失项以 `InvalidArgument` 报告
    pub fn try_new(students: Option<S>, teams: Option<T>) -> Result<Self> {
        let students =
            students.ok_or_else(|| DomainError::invalid_argument("StudentRepository is missing"))?;
        let teams =
            teams.ok_or_else(|| DomainError::invalid_argument("TeamRepository is missing"))?;
        Ok(Self::new(students, teams))
    }

    pub fn students(&self) -> &S {
        &self.students
    }

    pub fn teams(&self) -> &T {
        &self.teams
    }

    /// 将学生加入队伍
    ///
    /// 以仓储中取回的队伍与学生为准；成功时恰好一次 `update(team)`。
    pub async fn add_student_to_team(
        &self,
        team: Option<&Team>,
        student: Option<&Student>,
    ) -> Result<()> {
        let team = require(team, TEAM_MISSING)?;
        let student = require(student, STUDENT_MISSING)?;

        let _gate = self.write_gate.lock().await;

        let mut fetched_team = self
            .teams
            .get_by_id(&team.id)
            .await?
            .ok_or_else(|| DomainError::invalid_argument(TEAM_NOT_FOUND))?;

        if fetched_team.is_full() {
            return Err(DomainError::invalid_operation("Team is full"));
        }

        if self.is_assigned_to_team(student).await? {
            return Err(DomainError::invalid_operation(
                "Student is already assigned to a team",
            ));
        }

        let fetched_student = self
            .students
            .get_by_id(&student.id)
            .await?
            .ok_or_else(|| DomainError::invalid_argument(STUDENT_NOT_FOUND))?;

        fetched_team.push_student(fetched_student);
        self.teams.update(fetched_team).await
    }

    /// 将学生从原队伍转入新队伍
    ///
    /// 成功时依次 `update(from)`、`update(to)`。
    /// 若第二次写入失败，会以原花名册回写 `from` 作为补偿，并返回原始错误。
    pub async fn move_student_to_new_team(
        &self,
        from_team: Option<&Team>,
        to_team: Option<&Team>,
        student: Option<&Student>,
    ) -> Result<()> {
        let from_team = require(from_team, "From Team is missing")?;
        let to_team = require(to_team, "To Team is missing")?;
        let student = require(student, STUDENT_MISSING)?;

        let _gate = self.write_gate.lock().await;

        let mut fetched_from = self
            .teams
            .get_by_id(&from_team.id)
            .await?
            .ok_or_else(|| DomainError::invalid_operation("From Team not found"))?;

        let mut fetched_to = self
            .teams
            .get_by_id(&to_team.id)
            .await?
            .ok_or_else(|| DomainError::invalid_operation("To Team not found"))?;

        if fetched_to.is_full() {
            return Err(DomainError::invalid_operation("To Team is full"));
        }

        let fetched_student = self
            .students
            .get_by_id(&student.id)
            .await?
            .ok_or_else(|| DomainError::invalid_operation(STUDENT_NOT_FOUND))?;

        if !fetched_from.contains(&fetched_student.id) {
            return Err(DomainError::invalid_operation(
                "Student is not a member of From Team",
            ));
        }

        // 同队转移或花名册已含该生时，写入会在 to 中留下重复成员
        if fetched_to.contains(&fetched_student.id) {
            return Err(DomainError::invalid_operation(
                "Student is already a member of To Team",
            ));
        }

        let original_from = fetched_from.clone();
        fetched_from.remove_student(&fetched_student.id);
        fetched_to.push_student(fetched_student);

        self.teams.update(fetched_from).await?;

        if let Err(err) = self.teams.update(fetched_to).await {
            return match self.teams.update(original_from).await {
                Ok(()) => Err(err),
                Err(rollback) => Err(DomainError::repository(format!(
                    "{err}; restoring From Team failed: {rollback}"
                ))),
            };
        }

        Ok(())
    }

    /// 将学生移出队伍；成功时恰好一次 `update(team)`
    pub async fn remove_student_from_team(
        &self,
        team: Option<&Team>,
        student: Option<&Student>,
    ) -> Result<()> {
        let team = require(team, TEAM_MISSING)?;
        let student = require(student, STUDENT_MISSING)?;

        let _gate = self.write_gate.lock().await;

        let mut fetched_team = self
            .teams
            .get_by_id(&team.id)
            .await?
            .ok_or_else(|| DomainError::invalid_operation(TEAM_NOT_FOUND))?;

        let fetched_student = self
            .students
            .get_by_id(&student.id)
            .await?
            .ok_or_else(|| DomainError::invalid_operation(STUDENT_NOT_FOUND))?;

        if !fetched_team.remove_student(&fetched_student.id) {
            return Err(DomainError::invalid_operation(
                "Student is not a member of the team",
            ));
        }

        self.teams.update(fetched_team).await
    }

    // 全量扫描所有队伍，按学生标识判断是否已有归属
    async fn is_assigned_to_team(&self, student: &Student) -> Result<bool> {
        let teams = self.teams.get_all().await?;
        Ok(teams.iter().any(|t| t.contains(&student.id)))
    }
}

/// 成员关系变更（供 [`DomainService`] 统一入口使用）
#[derive(Debug, Clone)]
pub enum MembershipChange {
    Assign {
        team: Option<Team>,
        student: Option<Student>,
    },
    Transfer {
        from: Option<Team>,
        to: Option<Team>,
        student: Option<Student>,
    },
    Release {
        team: Option<Team>,
        student: Option<Student>,
    },
}

#[async_trait]
impl<S, T> DomainService for StudentTeamService<S, T>
where
    S: StudentRepository,
    T: TeamRepository,
{
    type Input = MembershipChange;
    type Output = ();
    type Error = DomainError;

    async fn execute(&self, input: Self::Input) -> Result<()> {
        match input {
            MembershipChange::Assign { team, student } => {
                self.add_student_to_team(team.as_ref(), student.as_ref())
                    .await
            }
            MembershipChange::Transfer { from, to, student } => {
                self.move_student_to_new_team(from.as_ref(), to.as_ref(), student.as_ref())
                    .await
            }
            MembershipChange::Release { team, student } => {
                self.remove_student_from_team(team.as_ref(), student.as_ref())
                    .await
            }
        }
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::model::{StudentId, TeamId};
    use crate::persist::{InMemoryRepository, Repository};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // 记录写调用次数的队伍仓储；可让第 N 次 update 失败
    #[derive(Default)]
    struct CountingTeamRepo {
        inner: InMemoryRepository<Team>,
        adds: AtomicUsize,
        updates: AtomicUsize,
        removes: AtomicUsize,
        fail_update_at: Option<usize>,
        updated: std::sync::Mutex<Vec<Team>>,
    }

    impl CountingTeamRepo {
        fn with(teams: impl IntoIterator<Item = Team>) -> Self {
            Self {
                inner: InMemoryRepository::with_items(teams),
                ..Default::default()
            }
        }

        fn writes(&self) -> usize {
            self.adds.load(Ordering::SeqCst)
                + self.updates.load(Ordering::SeqCst)
                + self.removes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Repository<Team> for CountingTeamRepo {
        async fn add(&self, entity: Team) -> Result<()> {
            self.adds.fetch_add(1, Ordering::SeqCst);
            self.inner.add(entity).await
        }
        async fn update(&self, entity: Team) -> Result<()> {
            let n = self.updates.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_update_at == Some(n) {
                return Err(DomainError::repository("disk full"));
            }
            self.updated.lock().unwrap().push(entity.clone());
            self.inner.update(entity).await
        }
        async fn remove(&self, entity: &Team) -> Result<()> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(entity).await
        }
        async fn get_all(&self) -> Result<Vec<Team>> {
            self.inner.get_all().await
        }
        async fn get_by_id(&self, id: &TeamId) -> Result<Option<Team>> {
            self.inner.get_by_id(id).await
        }
    }

    fn students(ids: impl IntoIterator<Item = i32>) -> Vec<Student> {
        ids.into_iter().map(Student::with_id).collect()
    }

    fn service(
        all_students: Vec<Student>,
        teams: Vec<Team>,
    ) -> StudentTeamService<Arc<InMemoryRepository<Student>>, Arc<CountingTeamRepo>> {
        StudentTeamService::new(
            Arc::new(InMemoryRepository::with_items(all_students)),
            Arc::new(CountingTeamRepo::with(teams)),
        )
    }

    async fn roster_of<S: StudentRepository>(
        svc: &StudentTeamService<S, Arc<CountingTeamRepo>>,
        id: i32,
    ) -> Vec<i32> {
        svc.teams()
            .get_by_id(&TeamId::new(id))
            .await
            .unwrap()
            .unwrap()
            .roster()
            .iter()
            .map(|s| s.id.value())
            .collect()
    }

    fn assert_err(err: DomainError, argument: bool, reason: &str) {
        assert_eq!(err.reason(), reason);
        if argument {
            assert!(err.is_invalid_argument(), "expected InvalidArgument, got {err:?}");
        } else {
            assert!(err.is_invalid_operation(), "expected InvalidOperation, got {err:?}");
        }
    }

    #[test]
    fn try_new_names_the_missing_dependency() {
        let teams = Arc::new(CountingTeamRepo::default());
        let err = StudentTeamService::<Arc<InMemoryRepository<Student>>, _>::try_new(
            None,
            Some(teams),
        )
        .err()
        .unwrap();
        assert_err(err, true, "StudentRepository is missing");

        let students = Arc::new(InMemoryRepository::<Student>::new());
        let err = StudentTeamService::<_, Arc<CountingTeamRepo>>::try_new(Some(students), None)
            .err()
            .unwrap();
        assert_err(err, true, "TeamRepository is missing");
    }

    #[tokio::test]
    async fn add_appends_fetched_student_and_updates_once() {
        for members in [1, 3] {
            let svc = service(
                students(1..=4),
                vec![Team::with_students(1, students(1..=members))],
            );
            let caller_team = Team::with_students(1, vec![]);

            svc.add_student_to_team(Some(&caller_team), Some(&Student::with_id(4)))
                .await
                .unwrap();

            let roster = roster_of(&svc, 1).await;
            assert_eq!(roster.last(), Some(&4));
            assert_eq!(roster.len(), members as usize + 1);
            assert_eq!(svc.teams().updates.load(Ordering::SeqCst), 1);
            assert_eq!(svc.teams().writes(), 1);
        }
    }

    #[tokio::test]
    async fn add_uses_the_stored_student_not_the_callers_copy() {
        let mut stored = Student::with_id(7);
        stored.name = "Stored".into();
        let svc = service(vec![stored], vec![Team::with_students(1, vec![])]);

        let mut caller = Student::with_id(7);
        caller.name = "Caller".into();
        svc.add_student_to_team(Some(&Team::new(TeamId::new(1))), Some(&caller))
            .await
            .unwrap();

        let updated = svc.teams().updated.lock().unwrap().clone();
        assert_eq!(updated[0].roster()[0].name, "Stored");
    }

    #[tokio::test]
    async fn add_checks_preconditions_in_order() {
        let svc = service(students(1..=6), vec![
            Team::with_students(1, students(1..=4)),
            Team::with_students(2, students([5])),
            Team::with_students(3, vec![]),
        ]);
        let t = |id| Team::new(TeamId::new(id));
        let s = Student::with_id;

        let err = svc.add_student_to_team(None, None).await.unwrap_err();
        assert_err(err, true, "Team is missing");

        let err = svc.add_student_to_team(Some(&t(9)), None).await.unwrap_err();
        assert_err(err, true, "Student is missing");

        let err = svc
            .add_student_to_team(Some(&t(9)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, true, "Team not found");

        // 队伍已满优先于「学生不存在」
        let err = svc
            .add_student_to_team(Some(&t(1)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, false, "Team is full");

        let err = svc
            .add_student_to_team(Some(&t(3)), Some(&s(5)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student is already assigned to a team");

        let err = svc
            .add_student_to_team(Some(&t(3)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, true, "Student not found");

        assert_eq!(svc.teams().writes(), 0);
    }

    #[tokio::test]
    async fn add_to_full_team_twice_fails_the_same_way() {
        let svc = service(students(1..=5), vec![Team::with_students(1, students(1..=4))]);
        let team = Team::new(TeamId::new(1));

        for _ in 0..2 {
            let err = svc
                .add_student_to_team(Some(&team), Some(&Student::with_id(5)))
                .await
                .unwrap_err();
            assert_err(err, false, "Team is full");
        }
        assert_eq!(svc.teams().writes(), 0);
    }

    #[tokio::test]
    async fn move_updates_from_then_to() {
        let svc = service(students(1..=2), vec![
            Team::with_students(1, students(1..=2)),
            Team::with_students(2, vec![]),
        ]);

        svc.move_student_to_new_team(
            Some(&Team::new(TeamId::new(1))),
            Some(&Team::new(TeamId::new(2))),
            Some(&Student::with_id(2)),
        )
        .await
        .unwrap();

        assert_eq!(roster_of(&svc, 1).await, vec![1]);
        assert_eq!(roster_of(&svc, 2).await, vec![2]);

        let updated: Vec<_> = svc
            .teams()
            .updated
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.id.value())
            .collect();
        assert_eq!(updated, vec![1, 2]);
        assert_eq!(svc.teams().writes(), 2);
    }

    #[tokio::test]
    async fn move_checks_preconditions_in_order() {
        let svc = service(students(1..=8), vec![
            Team::with_students(1, students([1])),
            Team::with_students(2, students(2..=5)),
            Team::with_students(3, vec![]),
        ]);
        let t = |id| Team::new(TeamId::new(id));
        let s = Student::with_id;

        let err = svc
            .move_student_to_new_team(None, None, None)
            .await
            .unwrap_err();
        assert_err(err, true, "From Team is missing");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), None, None)
            .await
            .unwrap_err();
        assert_err(err, true, "To Team is missing");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(3)), None)
            .await
            .unwrap_err();
        assert_err(err, true, "Student is missing");

        let err = svc
            .move_student_to_new_team(Some(&t(9)), Some(&t(3)), Some(&s(1)))
            .await
            .unwrap_err();
        assert_err(err, false, "From Team not found");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(9)), Some(&s(1)))
            .await
            .unwrap_err();
        assert_err(err, false, "To Team not found");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(2)), Some(&s(1)))
            .await
            .unwrap_err();
        assert_err(err, false, "To Team is full");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(3)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student not found");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(3)), Some(&s(8)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student is not a member of From Team");

        let err = svc
            .move_student_to_new_team(Some(&t(1)), Some(&t(1)), Some(&s(1)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student is already a member of To Team");

        assert_eq!(svc.teams().writes(), 0);
    }

    #[tokio::test]
    async fn move_restores_from_team_when_second_update_fails() {
        let svc = StudentTeamService::new(
            Arc::new(InMemoryRepository::with_items(students(1..=2))),
            Arc::new(CountingTeamRepo {
                fail_update_at: Some(2),
                ..CountingTeamRepo::with([
                    Team::with_students(1, students(1..=2)),
                    Team::with_students(2, vec![]),
                ])
            }),
        );

        let err = svc
            .move_student_to_new_team(
                Some(&Team::new(TeamId::new(1))),
                Some(&Team::new(TeamId::new(2))),
                Some(&Student::with_id(2)),
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::repository("disk full"));
        assert_eq!(roster_of(&svc, 1).await, vec![1, 2]);
        assert!(roster_of(&svc, 2).await.is_empty());
        assert_eq!(svc.teams().updates.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn remove_then_remove_again() {
        let svc = service(students([1]), vec![Team::with_students(1, students([1]))]);
        let team = Team::with_students(1, students([1]));

        svc.remove_student_from_team(Some(&team), Some(&Student::with_id(1)))
            .await
            .unwrap();
        assert!(roster_of(&svc, 1).await.is_empty());
        assert_eq!(svc.teams().writes(), 1);

        let err = svc
            .remove_student_from_team(Some(&team), Some(&Student::with_id(1)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student is not a member of the team");
        assert_eq!(svc.teams().writes(), 1);
    }

    #[tokio::test]
    async fn remove_checks_preconditions_in_order() {
        let svc = service(students(1..=2), vec![Team::with_students(1, students([1]))]);
        let t = |id| Team::new(TeamId::new(id));
        let s = Student::with_id;

        let err = svc.remove_student_from_team(None, Some(&s(1))).await.unwrap_err();
        assert_err(err, true, "Team is missing");

        let err = svc.remove_student_from_team(Some(&t(1)), None).await.unwrap_err();
        assert_err(err, true, "Student is missing");

        let err = svc
            .remove_student_from_team(Some(&t(9)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, false, "Team not found");

        let err = svc
            .remove_student_from_team(Some(&t(1)), Some(&s(99)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student not found");

        let err = svc
            .remove_student_from_team(Some(&t(1)), Some(&s(2)))
            .await
            .unwrap_err();
        assert_err(err, false, "Student is not a member of the team");

        assert_eq!(svc.teams().writes(), 0);
    }

    #[tokio::test]
    async fn domain_service_entry_dispatches_changes() {
        let svc = service(students(1..=2), vec![
            Team::with_students(1, vec![]),
            Team::with_students(2, vec![]),
        ]);
        let t1 = Team::new(TeamId::new(1));
        let t2 = Team::new(TeamId::new(2));
        let s1 = Student::new(StudentId::new(1));

        svc.execute(MembershipChange::Assign {
            team: Some(t1.clone()),
            student: Some(s1.clone()),
        })
        .await
        .unwrap();
        svc.execute(MembershipChange::Transfer {
            from: Some(t1),
            to: Some(t2.clone()),
            student: Some(s1.clone()),
        })
        .await
        .unwrap();
        assert_eq!(roster_of(&svc, 2).await, vec![1]);

        svc.execute(MembershipChange::Release {
            team: Some(t2),
            student: Some(s1),
        })
        .await
        .unwrap();
        assert!(roster_of(&svc, 2).await.is_empty());

        let err = svc
            .execute(MembershipChange::Assign {
                team: None,
                student: None,
            })
            .await
            .unwrap_err();
        assert_err(err, true, "Team is missing");
    }
}
