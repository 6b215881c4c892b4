use serde::{Deserialize, Serialize};

use super::common::{Identifiable, NamedEntity};

/// A farmer the business buys from and sells to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farmer {
    pub id: String,
    pub company_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifsc: Option<String>,
}

impl Farmer {
    /// Creates a farmer with a known identifier.
    pub fn new(
        id: impl Into<String>,
        company_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company_id: company_id.into(),
            name: name.into(),
            village: None,
            phone: None,
            bank_account: None,
            ifsc: None,
        }
    }

    /// Creates an unsaved farmer; `FarmerService::add` allocates the id and
    /// company scope on insert.
    pub fn draft(name: impl Into<String>) -> Self {
        Self::new("", "", name)
    }

    pub fn with_village(mut self, village: impl Into<String>) -> Self {
        self.village = Some(village.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_bank_details(
        mut self,
        bank_account: impl Into<String>,
        ifsc: impl Into<String>,
    ) -> Self {
        self.bank_account = Some(bank_account.into());
        self.ifsc = Some(ifsc.into());
        self
    }

    /// Snapshot copied into invoices at creation time.
    pub fn snapshot(&self) -> FarmerSnapshot {
        FarmerSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            village: self.village.clone(),
        }
    }
}

impl Identifiable for Farmer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Farmer {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Copy of farmer fields embedded in invoices and statements.
///
/// A soft reference: deleting the farmer leaves the snapshot intact, and
/// aggregations must tolerate ids that no longer resolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerSnapshot {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl FarmerSnapshot {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            village: None,
        }
    }
}
