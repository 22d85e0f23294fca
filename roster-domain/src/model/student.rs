use crate::model::StudentId;
use roster_macros::entity;

/// 学生
///
/// 字段校验由 `StudentService` 负责；队伍只引用学生，不拥有学生。
#[entity(id = StudentId)]
pub struct Student {
    pub name: String,
    pub address: String,
    pub zip_code: i32,
    pub postal_district: String,
    pub email: Option<String>,
}

impl Student {
    /// 仅带标识的学生，常用于按标识引用
    pub fn with_id(id: i32) -> Self {
        <Self as crate::entity::Entity>::new(StudentId::new(id))
    }
}
