use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::common::{Identifiable, PaymentMethod};

/// Direction of money movement between the business and a farmer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    /// The farmer paid the business.
    PaymentIn,
    /// The business paid the farmer.
    PaymentOut,
}

/// Money moved directly between the business and one farmer, outside any
/// invoice. Distinct from company-level expense entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashBankTransaction {
    pub id: String,
    pub company_id: String,
    pub kind: TransactionKind,
    pub farmer_id: String,
    pub farmer_name: String,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl CashBankTransaction {
    /// Creates an unsaved transaction; `TransactionService::add` allocates
    /// the id.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        kind: TransactionKind,
        farmer_id: impl Into<String>,
        farmer_name: impl Into<String>,
        amount: f64,
        method: PaymentMethod,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            id: String::new(),
            company_id: String::new(),
            kind,
            farmer_id: farmer_id.into(),
            farmer_name: farmer_name.into(),
            amount,
            method,
            remarks: None,
            date,
            time,
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

impl Identifiable for CashBankTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}
