//! 仓储协议
//!
//! 每类实体一个仓储实例，提供按标识的增删改查。
//! 仓储只保证单次调用内的一致性，不提供跨调用事务。
//!
use crate::{
    entity::Entity,
    error::DomainResult as Result,
    model::{Company, Customer, Student, Team},
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + 'static,
{
    async fn add(&self, entity: E) -> Result<()>;

    async fn update(&self, entity: E) -> Result<()>;

    async fn remove(&self, entity: &E) -> Result<()>;

    async fn get_all(&self) -> Result<Vec<E>>;

    /// 未知标识返回 `Ok(None)`，不得返回错误
    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>>;
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity + 'static,
    T: Repository<E> + ?Sized,
{
    async fn add(&self, entity: E) -> Result<()> {
        (**self).add(entity).await
    }

    async fn update(&self, entity: E) -> Result<()> {
        (**self).update(entity).await
    }

    async fn remove(&self, entity: &E) -> Result<()> {
        (**self).remove(entity).await
    }

    async fn get_all(&self) -> Result<Vec<E>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        (**self).get_by_id(id).await
    }
}

/// 学生仓储
pub trait StudentRepository: Repository<Student> {}
impl<T: Repository<Student> + ?Sized> StudentRepository for T {}

/// 队伍仓储
pub trait TeamRepository: Repository<Team> {}
impl<T: Repository<Team> + ?Sized> TeamRepository for T {}

/// 公司仓储
pub trait CompanyRepository: Repository<Company> {}
impl<T: Repository<Company> + ?Sized> CompanyRepository for T {}

/// 客户仓储
pub trait CustomerRepository: Repository<Customer> {}
impl<T: Repository<Customer> + ?Sized> CustomerRepository for T {}

/// 队伍仓储的派生查询
#[async_trait]
pub trait TeamRepositoryExt: TeamRepository {
    /// 当前在任一花名册上的全部学生（按队伍顺序，再按加入顺序）
    async fn assigned_students(&self) -> Result<Vec<Student>> {
        let teams = self.get_all().await?;
        Ok(teams
            .into_iter()
            .flat_map(|t| t.students.unwrap_or_default())
            .collect())
    }

    /// 学生所在队伍（全量扫描）
    async fn team_of(&self, student: &Student) -> Result<Option<Team>> {
        let teams = self.get_all().await?;
        Ok(teams.into_iter().find(|t| t.contains(&student.id)))
    }
}

impl<T: TeamRepository + ?Sized> TeamRepositoryExt for T {}
