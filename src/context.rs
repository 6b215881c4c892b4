//! Session scoping: which company and financial year the caller is working
//! in. The original system kept this in ambient module state; here it is an
//! explicit object with a managed load/save lifecycle.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

const CONTEXT_FILE: &str = "context.json";

/// Active company and financial year for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_year: Option<String>,
}

impl SessionContext {
    pub fn for_company(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
            financial_year: None,
        }
    }

    pub fn with_financial_year(mut self, label: impl Into<String>) -> Self {
        self.financial_year = Some(label.into());
        self
    }

    /// The selected company id, or a validation error when none is chosen.
    pub fn company_id(&self) -> Result<&str, BillingError> {
        self.company_id
            .as_deref()
            .ok_or_else(|| BillingError::Validation("no company selected".into()))
    }
}

/// Financial-year label for `date`, April through March (`"2024-2025"`).
pub fn financial_year_label(date: NaiveDate) -> String {
    let start_year = if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{}", start_year, start_year + 1)
}

/// Loads and saves the session context under the app data directory.
pub struct ContextManager {
    path: PathBuf,
}

impl ContextManager {
    pub fn new(base_dir: &Path) -> Result<Self, BillingError> {
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(CONTEXT_FILE),
        })
    }

    /// Loads the persisted context, defaulting when none has been saved yet.
    pub fn load(&self) -> Result<SessionContext, BillingError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(SessionContext::default())
        }
    }

    /// Saves the context atomically by staging to a temporary file.
    pub fn save(&self, context: &SessionContext) -> Result<(), BillingError> {
        let json = serde_json::to_string_pretty(context)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_defaults_when_nothing_saved() {
        let temp = TempDir::new().unwrap();
        let manager = ContextManager::new(temp.path()).unwrap();
        let context = manager.load().unwrap();
        assert_eq!(context, SessionContext::default());
        assert!(context.company_id().is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ContextManager::new(temp.path()).unwrap();
        let context = SessionContext::for_company("C001").with_financial_year("2025-2026");
        manager.save(&context).unwrap();
        assert_eq!(manager.load().unwrap(), context);
    }

    #[test]
    fn financial_year_starts_in_april() {
        let label = |y, m, d| financial_year_label(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(label(2025, 4, 1), "2025-2026");
        assert_eq!(label(2026, 3, 31), "2025-2026");
        assert_eq!(label(2025, 3, 31), "2024-2025");
    }
}
