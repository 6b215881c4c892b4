use serde::{Deserialize, Deserializer, Serialize};

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// How money changed hands for a transaction or expense entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Bank,
    NotApplicable,
}

/// Accepts JSON numbers or string-encoded numbers.
///
/// The document store is loosely typed and amounts written by older tooling
/// arrive as strings. Coercion happens here and nowhere else; everything past
/// deserialization works with strict `f64`. An empty or whitespace-only
/// string reads as zero.
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(value) => Ok(value),
        Raw::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed.parse::<f64>().map_err(|_| {
                    serde::de::Error::custom(format!("invalid numeric value `{text}`"))
                })
            }
        }
    }
}
