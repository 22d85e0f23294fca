use crate::model::{CompanyId, Project};
use roster_macros::entity;

#[entity(id = CompanyId)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub postal_district: String,
    pub company_uri: Option<String>,
    /// `None` 表示项目集合缺失，校验时视为非法
    pub projects: Option<Vec<Project>>,
}
