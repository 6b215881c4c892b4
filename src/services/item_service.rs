//! Business logic helpers for managing items.

use crate::domain::item::Item;
use crate::numbering::next_id_for;
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for item records.
///
/// Stock is deliberately absent from `update`: after the opening value it
/// only moves through invoice submission, editing, and deletion.
pub struct ItemService;

impl ItemService {
    /// Persists a new item with its opening stock, allocating the next `I` id.
    pub fn add(store: &dyn DocumentStore, company_id: &str, mut item: Item) -> ServiceResult<Item> {
        if item.name.trim().is_empty() {
            return Err(ServiceError::Invalid("item name is required".into()));
        }
        if item.rate < 0.0 {
            return Err(ServiceError::Invalid(format!(
                "item rate must not be negative, got {}",
                item.rate
            )));
        }
        let mut items = store.load_items(company_id)?;
        item.id = next_id_for('I', &items);
        item.company_id = company_id.to_string();
        items.push(item.clone());
        store.save_items(company_id, &items)?;
        Ok(item)
    }

    /// Updates name and rate of the item with `item_id`; stock is untouched.
    pub fn update(
        store: &dyn DocumentStore,
        company_id: &str,
        item_id: &str,
        name: &str,
        rate: f64,
    ) -> ServiceResult<Item> {
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid("item name is required".into()));
        }
        if rate < 0.0 {
            return Err(ServiceError::Invalid(format!(
                "item rate must not be negative, got {rate}"
            )));
        }
        let mut items = store.load_items(company_id)?;
        let Some(stored) = items.iter_mut().find(|i| i.id == item_id) else {
            return Err(ServiceError::Invalid(format!("item `{item_id}` not found")));
        };
        stored.name = name.to_string();
        stored.rate = rate;
        let updated = stored.clone();
        store.save_items(company_id, &items)?;
        Ok(updated)
    }

    /// Removes the item, returning the removed record. Invoice lines keep
    /// their denormalized snapshot of the item.
    pub fn remove(
        store: &dyn DocumentStore,
        company_id: &str,
        item_id: &str,
    ) -> ServiceResult<Item> {
        let mut items = store.load_items(company_id)?;
        let Some(position) = items.iter().position(|i| i.id == item_id) else {
            return Err(ServiceError::Invalid(format!("item `{item_id}` not found")));
        };
        let removed = items.remove(position);
        store.save_items(company_id, &items)?;
        Ok(removed)
    }

    pub fn list(store: &dyn DocumentStore, company_id: &str) -> ServiceResult<Vec<Item>> {
        Ok(store.load_items(company_id)?)
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
    fn add_keeps_opening_stock() {
        let (store, _guard) = store();
        let item =
            ItemService::add(&store, "C001", Item::draft("Wheat", 25.0).with_stock(50.0)).unwrap();
        assert_eq!(item.id, "I001");
        assert_eq!(item.stock, 50.0);
    }

    #[test]
    fn add_rejects_negative_rate() {
        let (store, _guard) = store();
        let err = ItemService::add(&store, "C001", Item::draft("Wheat", -1.0)).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn update_does_not_touch_stock() {
        let (store, _guard) = store();
        let item =
            ItemService::add(&store, "C001", Item::draft("Wheat", 25.0).with_stock(50.0)).unwrap();
        let updated = ItemService::update(&store, "C001", &item.id, "Wheat (Grade A)", 27.5).unwrap();
        assert_eq!(updated.rate, 27.5);
        assert_eq!(updated.stock, 50.0);
    }
}
