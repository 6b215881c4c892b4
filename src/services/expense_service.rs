//! Business logic helpers for company-level expense entries.

use crate::domain::expense::Expense;
use crate::numbering::next_id_for;
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for expense entries, including the
/// reserved cash-in/cash-out kinds.
pub struct ExpenseService;

impl ExpenseService {
    /// Persists a new expense, allocating the next `E` id.
    pub fn add(
        store: &dyn DocumentStore,
        company_id: &str,
        mut expense: Expense,
    ) -> ServiceResult<Expense> {
        validate(&expense)?;
        let mut expenses = store.load_expenses(company_id)?;
        expense.id = next_id_for('E', &expenses);
        expense.company_id = company_id.to_string();
        expenses.push(expense.clone());
        store.save_expenses(company_id, &expenses)?;
        Ok(expense)
    }

    /// Replaces the stored expense with the same id.
    pub fn update(
        store: &dyn DocumentStore,
        company_id: &str,
        expense: Expense,
    ) -> ServiceResult<()> {
        validate(&expense)?;
        let mut expenses = store.load_expenses(company_id)?;
        let Some(stored) = expenses.iter_mut().find(|e| e.id == expense.id) else {
            return Err(ServiceError::Invalid(format!(
                "expense `{}` not found",
                expense.id
            )));
        };
        *stored = expense;
        store.save_expenses(company_id, &expenses)?;
        Ok(())
    }

    /// Removes the expense, returning the removed record.
    pub fn remove(
        store: &dyn DocumentStore,
        company_id: &str,
        expense_id: &str,
    ) -> ServiceResult<Expense> {
        let mut expenses = store.load_expenses(company_id)?;
        let Some(position) = expenses.iter().position(|e| e.id == expense_id) else {
            return Err(ServiceError::Invalid(format!(
                "expense `{expense_id}` not found"
            )));
        };
        let removed = expenses.remove(position);
        store.save_expenses(company_id, &expenses)?;
        Ok(removed)
    }

    pub fn list(store: &dyn DocumentStore, company_id: &str) -> ServiceResult<Vec<Expense>> {
        Ok(store.load_expenses(company_id)?)
    }
}

fn validate(expense: &Expense) -> ServiceResult<()> {
    if expense.kind.trim().is_empty() {
        return Err(ServiceError::Invalid("expense type is required".into()));
    }
    if expense.amount <= 0.0 {
        return Err(ServiceError::Invalid(format!(
            "amount must be positive, got {}",
            expense.amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::PaymentMethod;
    use crate::domain::expense::CASH_IN_KIND;
    use crate::storage::JsonStore;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn store() -> (JsonStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        (store, temp)
    }

    fn draft(kind: &str, amount: f64) -> Expense {
        Expense::draft(
            kind,
            amount,
            PaymentMethod::Cash,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
        )
    }

    #[test]
    fn add_allocates_e_ids() {
        let (store, _guard) = store();
        let expense = ExpenseService::add(&store, "C001", draft("Labour", 300.0)).unwrap();
        assert_eq!(expense.id, "E001");
    }

    #[test]
    fn reserved_kinds_are_accepted() {
        let (store, _guard) = store();
        let expense = ExpenseService::add(&store, "C001", draft(CASH_IN_KIND, 5000.0)).unwrap();
        assert!(expense.is_cash_in());
        assert!(!expense.is_operating());
    }

    #[test]
    fn add_rejects_blank_kind() {
        let (store, _guard) = store();
        let err = ExpenseService::add(&store, "C001", draft(" ", 10.0)).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
}
