//! Business logic helpers for managing farmers.

use crate::domain::farmer::Farmer;
use crate::numbering::next_id_for;
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for farmer records.
pub struct FarmerService;

impl FarmerService {
    /// Persists a new farmer, allocating the next `F` id.
    pub fn add(
        store: &dyn DocumentStore,
        company_id: &str,
        mut farmer: Farmer,
    ) -> ServiceResult<Farmer> {
        if farmer.name.trim().is_empty() {
            return Err(ServiceError::Invalid("farmer name is required".into()));
        }
        let mut farmers = store.load_farmers(company_id)?;
        farmer.id = next_id_for('F', &farmers);
        farmer.company_id = company_id.to_string();
        farmers.push(farmer.clone());
        store.save_farmers(company_id, &farmers)?;
        Ok(farmer)
    }

    /// Replaces the stored farmer with the same id.
    pub fn update(store: &dyn DocumentStore, company_id: &str, farmer: Farmer) -> ServiceResult<()> {
        let mut farmers = store.load_farmers(company_id)?;
        let Some(stored) = farmers.iter_mut().find(|f| f.id == farmer.id) else {
            return Err(ServiceError::Invalid(format!(
                "farmer `{}` not found",
                farmer.id
            )));
        };
        *stored = farmer;
        store.save_farmers(company_id, &farmers)?;
        Ok(())
    }

    /// Removes the farmer, returning the removed record.
    ///
    /// Invoices and transactions referencing the farmer are left untouched;
    /// aggregations tolerate the dangling reference.
    pub fn remove(
        store: &dyn DocumentStore,
        company_id: &str,
        farmer_id: &str,
    ) -> ServiceResult<Farmer> {
        let mut farmers = store.load_farmers(company_id)?;
        let Some(position) = farmers.iter().position(|f| f.id == farmer_id) else {
            return Err(ServiceError::Invalid(format!(
                "farmer `{farmer_id}` not found"
            )));
        };
        let removed = farmers.remove(position);
        store.save_farmers(company_id, &farmers)?;
        Ok(removed)
    }

    pub fn list(store: &dyn DocumentStore, company_id: &str) -> ServiceResult<Vec<Farmer>> {
        Ok(store.load_farmers(company_id)?)
    }

    pub fn get(
        store: &dyn DocumentStore,
        company_id: &str,
        farmer_id: &str,
    ) -> ServiceResult<Option<Farmer>> {
        let farmers = store.load_farmers(company_id)?;
        Ok(farmers.into_iter().find(|f| f.id == farmer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn store() -> (JsonStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        (store, temp)
    }

    #[test]
    fn add_allocates_sequential_ids() {
        let (store, _guard) = store();
        let first = FarmerService::add(&store, "C001", Farmer::draft("Ravi")).unwrap();
        let second = FarmerService::add(&store, "C001", Farmer::draft("Meena")).unwrap();
        assert_eq!(first.id, "F001");
        assert_eq!(second.id, "F002");
        assert_eq!(second.company_id, "C001");
    }

    #[test]
    fn add_rejects_blank_name() {
        let (store, _guard) = store();
        let err = FarmerService::add(&store, "C001", Farmer::draft("  ")).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn update_fails_for_missing_farmer() {
        let (store, _guard) = store();
        let err =
            FarmerService::update(&store, "C001", Farmer::new("F009", "C001", "Ghost")).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn remove_returns_deleted_farmer() {
        let (store, _guard) = store();
        let farmer = FarmerService::add(&store, "C001", Farmer::draft("Ravi")).unwrap();
        let removed = FarmerService::remove(&store, "C001", &farmer.id).unwrap();
        assert_eq!(removed.id, farmer.id);
        assert!(FarmerService::get(&store, "C001", &farmer.id)
            .unwrap()
            .is_none());
    }
}
