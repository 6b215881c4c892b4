//! Read-side reports: balances, statements, and cash flow.

use std::collections::BTreeMap;

use crate::ledger::{
    balance::compute_farmer_balances,
    cash_flow::{compute_cash_flow, CashFlowSummary},
    statement::{build_statement, DateRange, StatementEntry},
};
use crate::storage::DocumentStore;

use super::ServiceResult;

/// Loads the relevant collections and delegates to the pure ledger engine.
pub struct ReportService;

impl ReportService {
    /// Net due balance per farmer; positive means the farmer owes the
    /// business.
    pub fn farmer_balances(
        store: &dyn DocumentStore,
        company_id: &str,
    ) -> ServiceResult<BTreeMap<String, f64>> {
        let farmers = store.load_farmers(company_id)?;
        let sales = store.load_sales_invoices(company_id)?;
        let purchases = store.load_purchase_invoices(company_id)?;
        let transactions = store.load_transactions(company_id)?;
        Ok(compute_farmer_balances(
            &farmers,
            &sales,
            &purchases,
            &transactions,
        ))
    }

    /// Chronological statement with running balance for one farmer.
    pub fn farmer_statement(
        store: &dyn DocumentStore,
        company_id: &str,
        farmer_id: &str,
        range: Option<DateRange>,
    ) -> ServiceResult<Vec<StatementEntry>> {
        let sales = store.load_sales_invoices(company_id)?;
        let purchases = store.load_purchase_invoices(company_id)?;
        let transactions = store.load_transactions(company_id)?;
        Ok(build_statement(
            farmer_id,
            &sales,
            &purchases,
            &transactions,
            range,
        ))
    }

    /// Company-level cash position from expense entries.
    pub fn cash_flow(store: &dyn DocumentStore, company_id: &str) -> ServiceResult<CashFlowSummary> {
        let expenses = store.load_expenses(company_id)?;
        Ok(compute_cash_flow(&expenses))
    }

    /// Render-time currency formatting. Stored and aggregated values keep
    /// full precision; rounding to two decimals happens only here.
    pub fn format_amount(value: f64) -> String {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_format_to_two_decimals() {
        assert_eq!(ReportService::format_amount(1234.5), "1234.50");
        assert_eq!(ReportService::format_amount(0.125), "0.13");
        assert_eq!(ReportService::format_amount(-3.0), "-3.00");
    }
}
