use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::farmer::FarmerSnapshot;
use crate::errors::BillingError;

/// One line of a sales invoice. `amount` is always `weight * rate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesLine {
    pub item_id: String,
    pub item_name: String,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub weight: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub rate: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub amount: f64,
}

impl SalesLine {
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        weight: f64,
        rate: f64,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            weight,
            rate,
            amount: weight * rate,
        }
    }
}

/// One line of a purchase invoice.
///
/// `net_weight = gross_weight - tare_weight`,
/// `final_weight = net_weight * (1 - mud_deduction_percent / 100)`,
/// `amount = final_weight * rate`. `final_weight` is the quantity credited
/// to stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseLine {
    pub item_id: String,
    pub item_name: String,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub gross_weight: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub tare_weight: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub mud_deduction_percent: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub net_weight: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub final_weight: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub rate: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub amount: f64,
}

impl PurchaseLine {
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        gross_weight: f64,
        tare_weight: f64,
        mud_deduction_percent: f64,
        rate: f64,
    ) -> Self {
        let net_weight = gross_weight - tare_weight;
        let final_weight = net_weight * (1.0 - mud_deduction_percent / 100.0);
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            gross_weight,
            tare_weight,
            mud_deduction_percent,
            net_weight,
            final_weight,
            rate,
            amount: final_weight * rate,
        }
    }
}

/// A sale to a farmer. Increases what the farmer owes the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesInvoice {
    pub id: String,
    pub invoice_number: String,
    pub company_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub farmer: FarmerSnapshot,
    pub lines: Vec<SalesLine>,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "crate::domain::common::flexible_f64")]
    pub advance: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub due: f64,
}

impl SalesInvoice {
    /// Builds an unsaved invoice with derived totals. The id and invoice
    /// number are assigned on submission.
    pub fn draft(
        date: NaiveDate,
        time: NaiveTime,
        farmer: FarmerSnapshot,
        lines: Vec<SalesLine>,
        advance: f64,
    ) -> Self {
        let total_amount: f64 = lines.iter().map(|line| line.amount).sum();
        Self {
            id: String::new(),
            invoice_number: String::new(),
            company_id: String::new(),
            date,
            time,
            farmer,
            lines,
            total_amount,
            advance,
            due: total_amount - advance,
        }
    }

    /// Checks the arithmetic invariants on a record loaded from storage.
    pub fn validate(&self) -> Result<(), BillingError> {
        for line in &self.lines {
            if line.amount != line.weight * line.rate {
                return Err(BillingError::Validation(format!(
                    "line amount {} does not match weight {} x rate {}",
                    line.amount, line.weight, line.rate
                )));
            }
        }
        let total: f64 = self.lines.iter().map(|line| line.amount).sum();
        if self.total_amount != total {
            return Err(BillingError::Validation(format!(
                "invoice total {} does not match line sum {}",
                self.total_amount, total
            )));
        }
        if self.due != self.total_amount - self.advance {
            return Err(BillingError::Validation(format!(
                "invoice due {} does not match total {} minus advance {}",
                self.due, self.total_amount, self.advance
            )));
        }
        Ok(())
    }
}

/// A purchase from a farmer. Increases what the business owes the farmer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseInvoice {
    pub id: String,
    pub invoice_number: String,
    pub company_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub farmer: FarmerSnapshot,
    pub lines: Vec<PurchaseLine>,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "crate::domain::common::flexible_f64")]
    pub advance: f64,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub due: f64,
}

impl PurchaseInvoice {
    /// Builds an unsaved invoice with derived totals. The id and invoice
    /// number are assigned on submission.
    pub fn draft(
        date: NaiveDate,
        time: NaiveTime,
        farmer: FarmerSnapshot,
        lines: Vec<PurchaseLine>,
        advance: f64,
    ) -> Self {
        let total_amount: f64 = lines.iter().map(|line| line.amount).sum();
        Self {
            id: String::new(),
            invoice_number: String::new(),
            company_id: String::new(),
            date,
            time,
            farmer,
            lines,
            total_amount,
            advance,
            due: total_amount - advance,
        }
    }

    /// Checks the arithmetic invariants on a record loaded from storage.
    pub fn validate(&self) -> Result<(), BillingError> {
        for line in &self.lines {
            if line.net_weight != line.gross_weight - line.tare_weight {
                return Err(BillingError::Validation(format!(
                    "line net weight {} does not match gross {} minus tare {}",
                    line.net_weight, line.gross_weight, line.tare_weight
                )));
            }
            if line.final_weight != line.net_weight * (1.0 - line.mud_deduction_percent / 100.0) {
                return Err(BillingError::Validation(format!(
                    "line final weight {} does not match net {} after {}% deduction",
                    line.final_weight, line.net_weight, line.mud_deduction_percent
                )));
            }
            if line.amount != line.final_weight * line.rate {
                return Err(BillingError::Validation(format!(
                    "line amount {} does not match final weight {} x rate {}",
                    line.amount, line.final_weight, line.rate
                )));
            }
        }
        let total: f64 = self.lines.iter().map(|line| line.amount).sum();
        if self.total_amount != total {
            return Err(BillingError::Validation(format!(
                "invoice total {} does not match line sum {}",
                self.total_amount, total
            )));
        }
        if self.due != self.total_amount - self.advance {
            return Err(BillingError::Validation(format!(
                "invoice due {} does not match total {} minus advance {}",
                self.due, self.total_amount, self.advance
            )));
        }
        Ok(())
    }
}
