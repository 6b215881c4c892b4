pub mod json_backend;

use crate::domain::{
    company::Company,
    expense::Expense,
    farmer::Farmer,
    invoice::{PurchaseInvoice, SalesInvoice},
    item::Item,
    transaction::CashBankTransaction,
};

pub type Result<T> = std::result::Result<T, crate::errors::BillingError>;

/// Abstraction over document stores holding the per-company collections.
///
/// Every call is an independent round trip; the trait makes no atomicity
/// promise across calls. Failures surface as recoverable errors and are
/// never retried here.
pub trait DocumentStore: Send + Sync {
    fn load_companies(&self) -> Result<Vec<Company>>;
    fn save_companies(&self, companies: &[Company]) -> Result<()>;

    fn load_farmers(&self, company_id: &str) -> Result<Vec<Farmer>>;
    fn save_farmers(&self, company_id: &str, farmers: &[Farmer]) -> Result<()>;

    fn load_items(&self, company_id: &str) -> Result<Vec<Item>>;
    fn save_items(&self, company_id: &str, items: &[Item]) -> Result<()>;

    fn load_sales_invoices(&self, company_id: &str) -> Result<Vec<SalesInvoice>>;
    fn save_sales_invoices(&self, company_id: &str, invoices: &[SalesInvoice]) -> Result<()>;

    fn load_purchase_invoices(&self, company_id: &str) -> Result<Vec<PurchaseInvoice>>;
    fn save_purchase_invoices(&self, company_id: &str, invoices: &[PurchaseInvoice]) -> Result<()>;

    fn load_transactions(&self, company_id: &str) -> Result<Vec<CashBankTransaction>>;
    fn save_transactions(
        &self,
        company_id: &str,
        transactions: &[CashBankTransaction],
    ) -> Result<()>;

    fn load_expenses(&self, company_id: &str) -> Result<Vec<Expense>>;
    fn save_expenses(&self, company_id: &str, expenses: &[Expense]) -> Result<()>;

    /// Writes a single item's stock level.
    ///
    /// A backend with server-side atomicity can harden the stock
    /// read-modify-write behind this call. `JsonStore` keeps it an
    /// independent round trip, preserving the source system's lost-update
    /// window under contention.
    fn update_item_stock(&self, company_id: &str, item_id: &str, new_stock: f64) -> Result<()>;
}

pub use json_backend::JsonStore;
