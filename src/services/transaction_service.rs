//! Business logic helpers for farmer cash/bank transactions.

use crate::domain::common::PaymentMethod;
use crate::domain::transaction::CashBankTransaction;
use crate::numbering::next_id_for;
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for cash/bank transactions.
pub struct TransactionService;

impl TransactionService {
    /// Persists a new transaction, allocating the next `T` id.
    pub fn add(
        store: &dyn DocumentStore,
        company_id: &str,
        mut txn: CashBankTransaction,
    ) -> ServiceResult<CashBankTransaction> {
        validate(&txn)?;
        let mut transactions = store.load_transactions(company_id)?;
        txn.id = next_id_for('T', &transactions);
        txn.company_id = company_id.to_string();
        transactions.push(txn.clone());
        store.save_transactions(company_id, &transactions)?;
        Ok(txn)
    }

    /// Replaces the stored transaction with the same id.
    pub fn update(
        store: &dyn DocumentStore,
        company_id: &str,
        txn: CashBankTransaction,
    ) -> ServiceResult<()> {
        validate(&txn)?;
        let mut transactions = store.load_transactions(company_id)?;
        let Some(stored) = transactions.iter_mut().find(|t| t.id == txn.id) else {
            return Err(ServiceError::Invalid(format!(
                "transaction `{}` not found",
                txn.id
            )));
        };
        *stored = txn;
        store.save_transactions(company_id, &transactions)?;
        Ok(())
    }

    /// Removes the transaction, returning the removed record.
    pub fn remove(
        store: &dyn DocumentStore,
        company_id: &str,
        txn_id: &str,
    ) -> ServiceResult<CashBankTransaction> {
        let mut transactions = store.load_transactions(company_id)?;
        let Some(position) = transactions.iter().position(|t| t.id == txn_id) else {
            return Err(ServiceError::Invalid(format!(
                "transaction `{txn_id}` not found"
            )));
        };
        let removed = transactions.remove(position);
        store.save_transactions(company_id, &transactions)?;
        Ok(removed)
    }

    pub fn list(
        store: &dyn DocumentStore,
        company_id: &str,
    ) -> ServiceResult<Vec<CashBankTransaction>> {
        Ok(store.load_transactions(company_id)?)
    }
}

fn validate(txn: &CashBankTransaction) -> ServiceResult<()> {
    if txn.farmer_id.trim().is_empty() {
        return Err(ServiceError::Invalid("farmer is required".into()));
    }
    if txn.amount <= 0.0 {
        return Err(ServiceError::Invalid(format!(
            "amount must be positive, got {}",
            txn.amount
        )));
    }
    if txn.method == PaymentMethod::NotApplicable {
        return Err(ServiceError::Invalid(
            "payment method must be cash or bank".into(),
        ));
    }
    Ok(())
}
