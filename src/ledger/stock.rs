use std::collections::BTreeMap;

use crate::domain::common::NamedEntity;
use crate::domain::invoice::{PurchaseInvoice, SalesInvoice};
use crate::domain::item::Item;
use crate::errors::BillingError;

/// Whether invoice quantities are being applied to stock or rolled back.
///
/// Editing or deleting an invoice first reverts the stored quantities, then
/// (for an edit) applies the replacement's. Apply followed by revert with
/// identical quantities is a net no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Apply,
    Revert,
}

impl StockDirection {
    fn sign(self) -> f64 {
        match self {
            StockDirection::Apply => 1.0,
            StockDirection::Revert => -1.0,
        }
    }
}

/// A signed stock adjustment for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDelta {
    pub item_id: String,
    pub quantity: f64,
}

/// Invoice kinds that move item stock over their lifecycle.
pub trait StockMovement {
    fn stock_deltas(&self, direction: StockDirection) -> Vec<StockDelta>;
}

impl StockMovement for PurchaseInvoice {
    /// A purchase credits each line's final weight to stock.
    fn stock_deltas(&self, direction: StockDirection) -> Vec<StockDelta> {
        self.lines
            .iter()
            .map(|line| StockDelta {
                item_id: line.item_id.clone(),
                quantity: direction.sign() * line.final_weight,
            })
            .collect()
    }
}

impl StockMovement for SalesInvoice {
    /// A sale deducts each line's weight from stock.
    fn stock_deltas(&self, direction: StockDirection) -> Vec<StockDelta> {
        self.lines
            .iter()
            .map(|line| StockDelta {
                item_id: line.item_id.clone(),
                quantity: -direction.sign() * line.weight,
            })
            .collect()
    }
}

/// Returns `item` with the delta added to its stock. Negative results are
/// representable; no floor is enforced.
pub fn apply_stock_delta(item: &Item, quantity: f64) -> Item {
    let mut updated = item.clone();
    updated.stock += quantity;
    updated
}

/// Validates that current stock covers every line of a sales invoice.
///
/// Requested weight is aggregated per item across lines before comparison.
/// Insufficient stock blocks submission; it is a validation failure, not a
/// silent clamp. A line naming an unknown item fails validation too.
pub fn ensure_stock_available(items: &[Item], invoice: &SalesInvoice) -> Result<(), BillingError> {
    let mut requested: BTreeMap<&str, f64> = BTreeMap::new();
    for line in &invoice.lines {
        *requested.entry(line.item_id.as_str()).or_insert(0.0) += line.weight;
    }

    for (item_id, weight) in requested {
        let Some(item) = items.iter().find(|item| item.id == item_id) else {
            return Err(BillingError::Validation(format!(
                "unknown item `{item_id}` on sales invoice"
            )));
        };
        if item.stock < weight {
            return Err(BillingError::Validation(format!(
                "insufficient stock for `{}`: requested {}, available {}",
                item.name(),
                weight,
                item.stock
            )));
        }
    }
    Ok(())
}
