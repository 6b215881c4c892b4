use serde::{Deserialize, Serialize};

use super::common::{Identifiable, NamedEntity};

/// The tenant every other record is scoped to.
///
/// Scoping is enforced at the query-filter level only; there are no
/// referential constraints in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub financial_years: Vec<String>,
}

impl Company {
    /// Creates a company with a known identifier.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            financial_years: Vec::new(),
        }
    }

    /// Creates an unsaved company; `CompanyService::add` allocates the id.
    pub fn draft(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Appends a financial-year label if it is not already recorded.
    pub fn ensure_financial_year(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.financial_years.contains(&label) {
            self.financial_years.push(label);
        }
    }
}

impl Identifiable for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Company {
    fn name(&self) -> &str {
        &self.name
    }
}
