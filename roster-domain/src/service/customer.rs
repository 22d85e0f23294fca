use crate::{
    error::{DomainError, DomainResult as Result},
    model::Customer,
    persist::CustomerRepository,
    service::require,
};

pub struct CustomerService<R> {
    repo: R,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn try_new(repo: Option<R>) -> Result<Self> {
        repo.map(Self::new)
            .ok_or_else(|| DomainError::invalid_argument("Customer Repository is missing"))
    }

    pub async fn add_customer(&self, customer: Option<&Customer>) -> Result<()> {
        let c = require(customer, "Customer is missing")?;
        let invalid = !c.id.is_valid()
            || c.name.is_empty()
            || c.address.is_empty()
            || c.zipcode <= 0
            || c.postal_district.is_empty()
            || c.company_uri.as_deref() == Some("");
        if invalid {
            return Err(DomainError::invalid_argument("Invalid Customer property"));
        }
        if self.repo.get_by_id(&c.id).await?.is_some() {
            return Err(DomainError::invalid_operation("Customer already exists"));
        }
        self.repo.add(c.clone()).await
    }
}
