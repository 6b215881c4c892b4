use crate::domain::common::PaymentMethod;
use crate::domain::expense::Expense;

/// Company-level cash position derived from expense entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CashFlowSummary {
    /// Physical cash balance; bank-paid expenses do not move it.
    pub cash_in_hand: f64,
    pub total_cash_in_from_external: f64,
    pub total_cash_out_to_external: f64,
    pub total_operating_expenses: f64,
}

/// Scans company-level expense entries into cash-flow totals.
///
/// The reserved kinds move cash in and out of hand; every other entry is an
/// operating expense and only reduces cash in hand when it was paid in cash.
pub fn compute_cash_flow(expenses: &[Expense]) -> CashFlowSummary {
    let mut summary = CashFlowSummary::default();
    for expense in expenses {
        if expense.is_cash_in() {
            summary.cash_in_hand += expense.amount;
            summary.total_cash_in_from_external += expense.amount;
        } else if expense.is_cash_out() {
            summary.cash_in_hand -= expense.amount;
            summary.total_cash_out_to_external += expense.amount;
        } else {
            summary.total_operating_expenses += expense.amount;
            if expense.method == PaymentMethod::Cash {
                summary.cash_in_hand -= expense.amount;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expense::{CASH_IN_KIND, CASH_OUT_KIND};
    use chrono::{NaiveDate, NaiveTime};

    fn entry(kind: &str, amount: f64, method: PaymentMethod) -> Expense {
        Expense::draft(
            kind,
            amount,
            method,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn cash_in_raises_hand_and_external_total() {
        let expenses = vec![entry(CASH_IN_KIND, 5000.0, PaymentMethod::NotApplicable)];
        let summary = compute_cash_flow(&expenses);
        assert_eq!(summary.cash_in_hand, 5000.0);
        assert_eq!(summary.total_cash_in_from_external, 5000.0);
        assert_eq!(summary.total_operating_expenses, 0.0);
    }

    #[test]
    fn cash_out_lowers_hand() {
        let expenses = vec![
            entry(CASH_IN_KIND, 5000.0, PaymentMethod::NotApplicable),
            entry(CASH_OUT_KIND, 1200.0, PaymentMethod::NotApplicable),
        ];
        let summary = compute_cash_flow(&expenses);
        assert_eq!(summary.cash_in_hand, 3800.0);
        assert_eq!(summary.total_cash_out_to_external, 1200.0);
    }

    #[test]
    fn cash_paid_expense_moves_cash_in_hand() {
        let expenses = vec![
            entry(CASH_IN_KIND, 1000.0, PaymentMethod::NotApplicable),
            entry("Labour", 300.0, PaymentMethod::Cash),
        ];
        let summary = compute_cash_flow(&expenses);
        assert_eq!(summary.cash_in_hand, 700.0);
        assert_eq!(summary.total_operating_expenses, 300.0);
    }

    #[test]
    fn bank_paid_expense_does_not_move_cash_in_hand() {
        let expenses = vec![
            entry(CASH_IN_KIND, 1000.0, PaymentMethod::NotApplicable),
            entry("Transport", 450.0, PaymentMethod::Bank),
        ];
        let summary = compute_cash_flow(&expenses);
        assert_eq!(summary.cash_in_hand, 1000.0);
        assert_eq!(summary.total_operating_expenses, 450.0);
    }
}
