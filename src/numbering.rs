//! Sequence derivation for invoice numbers and entity ids.
//!
//! Numbers are never stored as counters; the next value is derived by
//! scanning the existing collection and taking max + 1, so external tooling
//! that inserts records directly stays compatible.

use chrono::NaiveDate;

use crate::domain::common::Identifiable;

/// Prefix letter for date-bucketed invoice numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoicePrefix {
    Sales,
    Purchase,
}

impl InvoicePrefix {
    fn letter(self) -> char {
        match self {
            InvoicePrefix::Sales => 'S',
            InvoicePrefix::Purchase => 'P',
        }
    }
}

/// Derives the next `{prefix}-{YYYYMMDD}-{NNN}` invoice number for `date`.
///
/// The sequence resets daily: numbers for other dates or prefixes are
/// ignored, as are entries that do not parse. Past 999 the padded width
/// simply grows.
pub fn next_invoice_number<'a>(
    prefix: InvoicePrefix,
    date: NaiveDate,
    existing: impl IntoIterator<Item = &'a str>,
) -> String {
    let bucket = format!("{}-{}", prefix.letter(), date.format("%Y%m%d"));
    let max = existing
        .into_iter()
        .filter_map(|number| {
            number
                .strip_prefix(bucket.as_str())?
                .strip_prefix('-')?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0);
    format!("{}-{:03}", bucket, max + 1)
}

/// Derives the next `{letter}{NNN}` id over a whole collection.
pub fn next_entity_id<'a>(prefix: char, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", prefix, max + 1)
}

/// Convenience over `next_entity_id` for collections of identifiable
/// records.
pub fn next_id_for<T: Identifiable>(prefix: char, records: &[T]) -> String {
    next_entity_id(prefix, records.iter().map(|record| record.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn first_invoice_of_the_day_is_001() {
        let number = next_invoice_number(InvoicePrefix::Sales, june_15(), []);
        assert_eq!(number, "S-20250615-001");
    }

    #[test]
    fn sequence_takes_max_plus_one() {
        let existing = ["S-20250615-002", "S-20250615-007", "S-20250615-001"];
        let number = next_invoice_number(InvoicePrefix::Sales, june_15(), existing);
        assert_eq!(number, "S-20250615-008");
    }

    #[test]
    fn sequence_resets_daily_and_ignores_other_prefixes() {
        let existing = ["S-20250614-041", "P-20250615-009"];
        let number = next_invoice_number(InvoicePrefix::Sales, june_15(), existing);
        assert_eq!(number, "S-20250615-001");
    }

    #[test]
    fn malformed_numbers_are_ignored() {
        let existing = ["S-20250615-abc", "garbage", "S-20250615-003"];
        let number = next_invoice_number(InvoicePrefix::Sales, june_15(), existing);
        assert_eq!(number, "S-20250615-004");
    }

    #[test]
    fn width_grows_past_three_digits() {
        let existing = ["P-20250615-999"];
        let number = next_invoice_number(InvoicePrefix::Purchase, june_15(), existing);
        assert_eq!(number, "P-20250615-1000");
    }

    #[test]
    fn entity_ids_scan_the_whole_collection() {
        assert_eq!(next_entity_id('F', []), "F001");
        assert_eq!(next_entity_id('F', ["F001", "F003"]), "F004");
        assert_eq!(next_entity_id('T', ["F010", "T002"]), "T003");
    }
}
