pub mod company_service;
pub mod expense_service;
pub mod farmer_service;
pub mod invoice_service;
pub mod item_service;
pub mod report_service;
pub mod transaction_service;

pub use company_service::CompanyService;
pub use expense_service::ExpenseService;
pub use farmer_service::FarmerService;
pub use invoice_service::InvoiceService;
pub use item_service::ItemService;
pub use report_service::ReportService;
pub use transaction_service::TransactionService;

use crate::errors::BillingError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Billing(#[from] BillingError),
    #[error("{0}")]
    Invalid(String),
}
