use std::collections::BTreeMap;

use crate::domain::{
    farmer::Farmer,
    invoice::{PurchaseInvoice, SalesInvoice},
    transaction::{CashBankTransaction, TransactionKind},
};

/// Computes the signed due balance for every farmer in `farmers`.
///
/// Positive means the farmer owes the business; negative means the business
/// owes the farmer. Sales add `total - advance`, purchases subtract it,
/// `PaymentIn` subtracts the amount and `PaymentOut` adds it.
///
/// Every farmer in the input appears in the map, zero-activity farmers
/// included, so callers can tell "no activity" (present, zero) apart from
/// "unknown farmer" (absent). Records whose farmer id does not resolve are
/// skipped with a warning. Inputs are never mutated.
pub fn compute_farmer_balances(
    farmers: &[Farmer],
    sales: &[SalesInvoice],
    purchases: &[PurchaseInvoice],
    transactions: &[CashBankTransaction],
) -> BTreeMap<String, f64> {
    let mut balances: BTreeMap<String, f64> = farmers
        .iter()
        .map(|farmer| (farmer.id.clone(), 0.0))
        .collect();

    for invoice in sales {
        match balances.get_mut(invoice.farmer.id.as_str()) {
            Some(balance) => *balance += invoice.total_amount - invoice.advance,
            None => tracing::warn!(
                invoice = %invoice.invoice_number,
                farmer = %invoice.farmer.id,
                "sales invoice references unknown farmer"
            ),
        }
    }

    for invoice in purchases {
        match balances.get_mut(invoice.farmer.id.as_str()) {
            Some(balance) => *balance -= invoice.total_amount - invoice.advance,
            None => tracing::warn!(
                invoice = %invoice.invoice_number,
                farmer = %invoice.farmer.id,
                "purchase invoice references unknown farmer"
            ),
        }
    }

    for txn in transactions {
        match balances.get_mut(txn.farmer_id.as_str()) {
            Some(balance) => match txn.kind {
                TransactionKind::PaymentIn => *balance -= txn.amount,
                TransactionKind::PaymentOut => *balance += txn.amount,
            },
            None => tracing::warn!(
                transaction = %txn.id,
                farmer = %txn.farmer_id,
                "cash transaction references unknown farmer"
            ),
        }
    }

    balances
}
