use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{de::DeserializeOwned, Serialize};

use super::{DocumentStore, Result};
use crate::domain::{
    company::Company,
    expense::Expense,
    farmer::Farmer,
    invoice::{PurchaseInvoice, SalesInvoice},
    item::Item,
    transaction::CashBankTransaction,
};
use crate::errors::BillingError;

const DEFAULT_DIR_NAME: &str = ".farmbook_core";
const COMPANIES_DIR: &str = "companies";
const COMPANIES_FILE: &str = "companies.json";
const TMP_SUFFIX: &str = "tmp";

const FARMERS_FILE: &str = "farmers.json";
const ITEMS_FILE: &str = "items.json";
const SALES_FILE: &str = "sales_invoices.json";
const PURCHASES_FILE: &str = "purchase_invoices.json";
const TRANSACTIONS_FILE: &str = "transactions.json";
const EXPENSES_FILE: &str = "expenses.json";

/// Returns the application data directory, defaulting to `~/.farmbook_core`.
pub fn default_base_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FARMBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// JSON-file document store: one array file per collection, grouped per
/// company under the base directory. Each save stages to a temporary file
/// and renames it into place.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
    companies_dir: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_base_dir);
        ensure_dir(&root)?;
        let companies_dir = root.join(COMPANIES_DIR);
        ensure_dir(&companies_dir)?;
        Ok(Self {
            root,
            companies_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, company_id: &str, file: &str) -> PathBuf {
        self.companies_dir.join(company_id).join(file)
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save_collection<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(path, &json)
    }
}

impl DocumentStore for JsonStore {
    fn load_companies(&self) -> Result<Vec<Company>> {
        self.load_collection(&self.root.join(COMPANIES_FILE))
    }

    fn save_companies(&self, companies: &[Company]) -> Result<()> {
        self.save_collection(&self.root.join(COMPANIES_FILE), companies)
    }

    fn load_farmers(&self, company_id: &str) -> Result<Vec<Farmer>> {
        self.load_collection(&self.collection_path(company_id, FARMERS_FILE))
    }

    fn save_farmers(&self, company_id: &str, farmers: &[Farmer]) -> Result<()> {
        self.save_collection(&self.collection_path(company_id, FARMERS_FILE), farmers)
    }

    fn load_items(&self, company_id: &str) -> Result<Vec<Item>> {
        self.load_collection(&self.collection_path(company_id, ITEMS_FILE))
    }

    fn save_items(&self, company_id: &str, items: &[Item]) -> Result<()> {
        self.save_collection(&self.collection_path(company_id, ITEMS_FILE), items)
    }

    fn load_sales_invoices(&self, company_id: &str) -> Result<Vec<SalesInvoice>> {
        self.load_collection(&self.collection_path(company_id, SALES_FILE))
    }

    fn save_sales_invoices(&self, company_id: &str, invoices: &[SalesInvoice]) -> Result<()> {
        self.save_collection(&self.collection_path(company_id, SALES_FILE), invoices)
    }

    fn load_purchase_invoices(&self, company_id: &str) -> Result<Vec<PurchaseInvoice>> {
        self.load_collection(&self.collection_path(company_id, PURCHASES_FILE))
    }

    fn save_purchase_invoices(&self, company_id: &str, invoices: &[PurchaseInvoice]) -> Result<()> {
        self.save_collection(&self.collection_path(company_id, PURCHASES_FILE), invoices)
    }

    fn load_transactions(&self, company_id: &str) -> Result<Vec<CashBankTransaction>> {
        self.load_collection(&self.collection_path(company_id, TRANSACTIONS_FILE))
    }

    fn save_transactions(
        &self,
        company_id: &str,
        transactions: &[CashBankTransaction],
    ) -> Result<()> {
        self.save_collection(
            &self.collection_path(company_id, TRANSACTIONS_FILE),
            transactions,
        )
    }

    fn load_expenses(&self, company_id: &str) -> Result<Vec<Expense>> {
        self.load_collection(&self.collection_path(company_id, EXPENSES_FILE))
    }

    fn save_expenses(&self, company_id: &str, expenses: &[Expense]) -> Result<()> {
        self.save_collection(&self.collection_path(company_id, EXPENSES_FILE), expenses)
    }

    fn update_item_stock(&self, company_id: &str, item_id: &str, new_stock: f64) -> Result<()> {
        let path = self.collection_path(company_id, ITEMS_FILE);
        let mut items: Vec<Item> = self.load_collection(&path)?;
        let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
            return Err(BillingError::Storage(format!(
                "item `{item_id}` not found in `{company_id}`"
            )));
        };
        item.stock = new_stock;
        tracing::debug!(item = %item_id, stock = new_stock, "updated item stock");
        self.save_collection(&path, &items)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn missing_collection_loads_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        let farmers = store.load_farmers("C001").expect("load farmers");
        assert!(farmers.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let farmers = vec![Farmer::new("F001", "C001", "Ravi").with_village("Khandwa")];
        store.save_farmers("C001", &farmers).expect("save farmers");
        let loaded = store.load_farmers("C001").expect("load farmers");
        assert_eq!(loaded, farmers);
    }

    #[test]
    fn companies_are_scoped_apart() {
        let (store, _guard) = store_with_temp_dir();
        store
            .save_farmers("C001", &[Farmer::new("F001", "C001", "Ravi")])
            .unwrap();
        assert!(store.load_farmers("C002").unwrap().is_empty());
    }

    #[test]
    fn update_item_stock_writes_the_new_level() {
        let (store, _guard) = store_with_temp_dir();
        let items = vec![Item::new("I001", "C001", "Wheat", 25.0).with_stock(50.0)];
        store.save_items("C001", &items).unwrap();

        store.update_item_stock("C001", "I001", 30.0).unwrap();
        let loaded = store.load_items("C001").unwrap();
        assert_eq!(loaded[0].stock, 30.0);
    }

    #[test]
    fn update_item_stock_fails_for_unknown_item() {
        let (store, _guard) = store_with_temp_dir();
        store.save_items("C001", &[]).unwrap();
        let err = store.update_item_stock("C001", "I999", 10.0).unwrap_err();
        assert!(matches!(err, BillingError::Storage(_)));
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let (store, _guard) = store_with_temp_dir();
        store
            .save_items("C001", &[Item::new("I001", "C001", "Wheat", 25.0)])
            .unwrap();
        let dir = store.base_dir().join(COMPANIES_DIR).join("C001");
        let leftovers: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == TMP_SUFFIX)
                    .unwrap_or(false)
            })
            .collect();
        assert!(leftovers.is_empty());
    }
}
