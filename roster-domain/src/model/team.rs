use crate::model::{Student, StudentId, TeamId};
use roster_macros::entity;

/// 队伍容量上限
pub const MAX_STUDENTS: usize = 4;

/// 队伍
///
/// 花名册（roster）按加入顺序保存成员。`students` 为 `None` 表示成员集合缺失，
/// 由 `TeamService` 拒绝；成员变更只经由 `StudentTeamService` 完成。
#[entity(id = TeamId)]
pub struct Team {
    pub students: Option<Vec<Student>>,
}

impl Team {
    /// 以给定成员创建队伍
    pub fn with_students(id: i32, students: Vec<Student>) -> Self {
        Self {
            id: TeamId::new(id),
            students: Some(students),
        }
    }

    /// 花名册只读视图（成员集合缺失时为空）
    pub fn roster(&self) -> &[Student] {
        self.students.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.roster().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_STUDENTS
    }

    /// 按学生标识判断成员关系
    pub fn contains(&self, student_id: &StudentId) -> bool {
        self.roster().iter().any(|s| &s.id == student_id)
    }

    pub fn student_ids(&self) -> Vec<StudentId> {
        self.roster().iter().map(|s| s.id).collect()
    }

    pub(crate) fn push_student(&mut self, student: Student) {
        self.students.get_or_insert_with(Vec::new).push(student);
    }

    /// 按标识移除成员，返回是否确有移除
    pub(crate) fn remove_student(&mut self, student_id: &StudentId) -> bool {
        let Some(students) = self.students.as_mut() else {
            return false;
        };
        let before = students.len();
        students.retain(|s| &s.id != student_id);
        students.len() != before
    }
}
