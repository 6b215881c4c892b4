use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::common::{Identifiable, PaymentMethod};

/// Reserved expense kind recording cash brought into hand from outside.
pub const CASH_IN_KIND: &str = "CashIn(Bank/Home)";
/// Reserved expense kind recording cash taken out of hand.
pub const CASH_OUT_KIND: &str = "CashOut(Bank/Home)";

/// A company-level spend or cash-management entry, not tied to any farmer.
///
/// The `kind` field is a free-text category except for the two reserved
/// values, which represent cash injections/withdrawals rather than true
/// operating expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub company_id: String,
    pub kind: String,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub amount: f64,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Expense {
    /// Creates an unsaved expense; `ExpenseService::add` allocates the id.
    pub fn draft(
        kind: impl Into<String>,
        amount: f64,
        method: PaymentMethod,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: String::new(),
            company_id: String::new(),
            kind: kind.into(),
            amount,
            method,
            date,
            time,
            remarks: None,
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn is_cash_in(&self) -> bool {
        self.kind == CASH_IN_KIND
    }

    pub fn is_cash_out(&self) -> bool {
        self.kind == CASH_OUT_KIND
    }

    /// True for ordinary spend entries, false for the reserved cash kinds.
    pub fn is_operating(&self) -> bool {
        !self.is_cash_in() && !self.is_cash_out()
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}
