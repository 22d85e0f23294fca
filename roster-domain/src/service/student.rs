use crate::{
    error::{DomainError, DomainResult as Result},
    model::{Student, StudentId},
    persist::StudentRepository,
    service::require,
};

const STUDENT_MISSING: &str = "Student is missing";

/// 学生服务：字段校验 + 存在性检查
///
/// 移除学生不会同步修改任何队伍花名册。
pub struct StudentService<R> {
    repo: R,
}

impl<R> StudentService<R>
where
    R: StudentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn try_new(repo: Option<R>) -> Result<Self> {
        repo.map(Self::new)
            .ok_or_else(|| DomainError::invalid_argument("StudentRepository is missing"))
    }

    pub async fn add_student(&self, student: Option<&Student>) -> Result<()> {
        let student = validate(student)?;
        if self.repo.get_by_id(&student.id).await?.is_some() {
            return Err(DomainError::invalid_operation("Student already exist"));
        }
        self.repo.add(student.clone()).await
    }

    pub async fn update_student(&self, student: Option<&Student>) -> Result<()> {
        let student = validate(student)?;
        if self.repo.get_by_id(&student.id).await?.is_none() {
            return Err(DomainError::invalid_operation(
                "Update of non-existing student",
            ));
        }
        self.repo.update(student.clone()).await
    }

    pub async fn remove_student(&self, student: Option<&Student>) -> Result<()> {
        let student = require(student, STUDENT_MISSING)?;
        if self.repo.get_by_id(&student.id).await?.is_none() {
            return Err(DomainError::invalid_operation(
                "Attempt to remove non-existing student",
            ));
        }
        self.repo.remove(student).await
    }

    pub async fn get_student_by_id(&self, id: &StudentId) -> Result<Option<Student>> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>> {
        self.repo.get_all().await
    }
}

// 按字段顺序校验，首个非法字段即返回
fn validate(student: Option<&Student>) -> Result<&Student> {
    let student = require(student, STUDENT_MISSING)?;
    let invalid = |field: &str| {
        Err(DomainError::invalid_argument(format!(
            "Invalid Student Property: {field}"
        )))
    };

    if !student.id.is_valid() {
        return invalid("Id");
    }
    if student.name.is_empty() {
        return invalid("Name");
    }
    if student.address.is_empty() {
        return invalid("Address");
    }
    if student.zip_code <= 0 {
        return invalid("ZipCode");
    }
    if student.postal_district.is_empty() {
        return invalid("PostalDistrict");
    }
    if student.email.as_deref() == Some("") {
        return invalid("Email");
    }
    Ok(student)
}
