//! 基于内存的仓储实现
//!
//! 以 `DashMap` 按标识存放实体，适用于测试与单进程装配。
//! `get_all` 按标识升序返回，保证结果稳定。
//!
use crate::{
    entity::Entity,
    error::{DomainError, DomainResult as Result},
    persist::Repository,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::type_name;

pub struct InMemoryRepository<E>
where
    E: Entity,
{
    items: DashMap<E::Id, E>,
}

impl<E> Default for InMemoryRepository<E>
where
    E: Entity,
{
    fn default() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl<E> InMemoryRepository<E>
where
    E: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 以初始数据创建仓储；重复标识以后者为准
    pub fn with_items(items: impl IntoIterator<Item = E>) -> Self {
        let repo = Self::default();
        for item in items {
            repo.items.insert(item.id().clone(), item);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn short_name<E>() -> &'static str {
    let full = type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + 'static,
{
    async fn add(&self, entity: E) -> Result<()> {
        let id = entity.id().clone();
        tracing::trace!(entity = short_name::<E>(), %id, "add");
        match self.items.entry(id) {
            dashmap::mapref::entry::Entry::Occupied(e) => Err(DomainError::repository(format!(
                "{} {} already stored",
                short_name::<E>(),
                e.key()
            ))),
            dashmap::mapref::entry::Entry::Vacant(e) => {
                e.insert(entity);
                Ok(())
            }
        }
    }

    async fn update(&self, entity: E) -> Result<()> {
        let id = entity.id().clone();
        tracing::trace!(entity = short_name::<E>(), %id, "update");
        match self.items.get_mut(&id) {
            Some(mut slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(DomainError::repository(format!(
                "{} {} is not stored",
                short_name::<E>(),
                id
            ))),
        }
    }

    async fn remove(&self, entity: &E) -> Result<()> {
        tracing::trace!(entity = short_name::<E>(), id = %entity.id(), "remove");
        match self.items.remove(entity.id()) {
            Some(_) => Ok(()),
            None => Err(DomainError::repository(format!(
                "{} {} is not stored",
                short_name::<E>(),
                entity.id()
            ))),
        }
    }

    async fn get_all(&self) -> Result<Vec<E>> {
        let mut all: Vec<E> = self.items.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }

    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        Ok(self.items.get(id).map(|e| e.value().clone()))
    }
}
