use serde::{Deserialize, Serialize};

use super::common::{Identifiable, NamedEntity};

/// A traded item with a default rate and a running stock level.
///
/// Stock is mutated through the stock ledger as invoices are submitted,
/// edited, and deleted; the item form only sets the opening value. Negative
/// stock is representable and tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub company_id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::domain::common::flexible_f64")]
    pub rate: f64,
    #[serde(default, deserialize_with = "crate::domain::common::flexible_f64")]
    pub stock: f64,
}

impl Item {
    /// Creates an item with a known identifier.
    pub fn new(
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            company_id: company_id.into(),
            name: name.into(),
            rate,
            stock: 0.0,
        }
    }

    /// Creates an unsaved item; `ItemService::add` allocates the id.
    pub fn draft(name: impl Into<String>, rate: f64) -> Self {
        Self::new("", "", name, rate)
    }

    pub fn with_stock(mut self, stock: f64) -> Self {
        self.stock = stock;
        self
    }
}

impl Identifiable for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.name
    }
}
