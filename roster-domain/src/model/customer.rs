use crate::model::CustomerId;
use roster_macros::entity;

#[entity(id = CustomerId)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub zipcode: i32,
    pub postal_district: String,
    pub company_uri: Option<String>,
}
