use crate::{
    error::{DomainError, DomainResult as Result},
    model::{Company, CompanyId},
    persist::CompanyRepository,
    service::require,
};

const COMPANY_MISSING: &str = "Company is missing";
const COMPANY_NOT_FOUND: &str = "Company does not exist";

pub struct CompanyService<R> {
    repo: R,
}

impl<R> CompanyService<R>
where
    R: CompanyRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn try_new(repo: Option<R>) -> Result<Self> {
        repo.map(Self::new)
            .ok_or_else(|| DomainError::invalid_argument("Company Repository is missing"))
    }

    pub async fn add_company(&self, company: Option<&Company>) -> Result<()> {
        let company = validate(company)?;
        if self.repo.get_by_id(&company.id).await?.is_some() {
            return Err(DomainError::invalid_operation("Company already exists"));
        }
        self.repo.add(company.clone()).await
    }

    pub async fn update_company(&self, company: Option<&Company>) -> Result<()> {
        let company = validate(company)?;
        if self.repo.get_by_id(&company.id).await?.is_none() {
            return Err(DomainError::invalid_operation(COMPANY_NOT_FOUND));
        }
        self.repo.update(company.clone()).await
    }

    pub async fn remove_company(&self, company: Option<&Company>) -> Result<()> {
        let company = require(company, COMPANY_MISSING)?;
        if self.repo.get_by_id(&company.id).await?.is_none() {
            return Err(DomainError::invalid_operation(COMPANY_NOT_FOUND));
        }
        self.repo.remove(company).await
    }

    pub async fn get_company_by_id(&self, id: &CompanyId) -> Result<Option<Company>> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all_companies(&self) -> Result<Vec<Company>> {
        self.repo.get_all().await
    }
}

fn validate(company: Option<&Company>) -> Result<&Company> {
    let c = require(company, COMPANY_MISSING)?;
    let invalid = !c.id.is_valid()
        || c.name.is_empty()
        || c.address.is_empty()
        || c.zipcode <= 0
        || c.postal_district.is_empty()
        || c.company_uri.as_deref() == Some("")
        || c.projects.is_none();
    if invalid {
        return Err(DomainError::invalid_argument("Invalid Company property"));
    }
    Ok(c)
}
