//! Business logic helpers for companies and their financial years.

use crate::domain::company::Company;
use crate::numbering::next_id_for;
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for the company roster.
pub struct CompanyService;

impl CompanyService {
    /// Persists a new company, allocating the next `C` id.
    pub fn add(store: &dyn DocumentStore, mut company: Company) -> ServiceResult<Company> {
        if company.name.trim().is_empty() {
            return Err(ServiceError::Invalid("company name is required".into()));
        }
        let mut companies = store.load_companies()?;
        company.id = next_id_for('C', &companies);
        companies.push(company.clone());
        store.save_companies(&companies)?;
        Ok(company)
    }

    pub fn list(store: &dyn DocumentStore) -> ServiceResult<Vec<Company>> {
        Ok(store.load_companies()?)
    }

    pub fn get(store: &dyn DocumentStore, company_id: &str) -> ServiceResult<Option<Company>> {
        let companies = store.load_companies()?;
        Ok(companies.into_iter().find(|c| c.id == company_id))
    }

    /// Records a financial-year label on the company if not already present.
    pub fn record_financial_year(
        store: &dyn DocumentStore,
        company_id: &str,
        label: &str,
    ) -> ServiceResult<()> {
        let mut companies = store.load_companies()?;
        let Some(company) = companies.iter_mut().find(|c| c.id == company_id) else {
            return Err(ServiceError::Invalid(format!(
                "company `{company_id}` not found"
            )));
        };
        company.ensure_financial_year(label);
        store.save_companies(&companies)?;
        Ok(())
    }
}
