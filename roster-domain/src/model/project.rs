use crate::model::ProjectId;
use chrono::{DateTime, Utc};
use roster_macros::entity;

#[entity(id = ProjectId)]
pub struct Project {
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub contact_name: String,
    pub contact_email: String,
}
