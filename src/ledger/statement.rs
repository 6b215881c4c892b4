use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{
    invoice::{PurchaseInvoice, SalesInvoice},
    transaction::{CashBankTransaction, TransactionKind},
};

/// Which source collection a statement entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Sale,
    Purchase,
    CashTransaction,
}

/// One row of a farmer statement. Debits raise what the farmer owes,
/// credits lower it; `running_balance` is the cumulative debit minus credit
/// up to and including this row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: EntryKind,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub running_balance: f64,
}

/// Inclusive date filter. An open end means "through today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn since(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        if date < self.start {
            return false;
        }
        let end = self.end.unwrap_or_else(|| Local::now().date_naive());
        date <= end
    }
}

/// Builds the chronological statement for one farmer.
///
/// One debit entry per sales invoice (`total - advance`), one credit entry
/// per purchase invoice, and one entry per cash transaction (`PaymentOut`
/// debits, `PaymentIn` credits). Entries sharing an identical timestamp keep
/// the order sales, purchases, cash, then insertion order within a kind;
/// the push order below plus a stable sort encodes that tie-break. The final
/// entry's `running_balance` matches `compute_farmer_balances` over the same
/// filtered inputs.
pub fn build_statement(
    farmer_id: &str,
    sales: &[SalesInvoice],
    purchases: &[PurchaseInvoice],
    transactions: &[CashBankTransaction],
    range: Option<DateRange>,
) -> Vec<StatementEntry> {
    let in_range = |date: NaiveDate| range.map_or(true, |r| r.contains(date));

    let mut entries = Vec::new();

    for invoice in sales
        .iter()
        .filter(|invoice| invoice.farmer.id == farmer_id && in_range(invoice.date))
    {
        entries.push(StatementEntry {
            date: invoice.date,
            time: invoice.time,
            kind: EntryKind::Sale,
            description: format!("Sale {}", invoice.invoice_number),
            debit: invoice.total_amount - invoice.advance,
            credit: 0.0,
            running_balance: 0.0,
        });
    }

    for invoice in purchases
        .iter()
        .filter(|invoice| invoice.farmer.id == farmer_id && in_range(invoice.date))
    {
        entries.push(StatementEntry {
            date: invoice.date,
            time: invoice.time,
            kind: EntryKind::Purchase,
            description: format!("Purchase {}", invoice.invoice_number),
            debit: 0.0,
            credit: invoice.total_amount - invoice.advance,
            running_balance: 0.0,
        });
    }

    for txn in transactions
        .iter()
        .filter(|txn| txn.farmer_id == farmer_id && in_range(txn.date))
    {
        let (description, debit, credit) = match txn.kind {
            TransactionKind::PaymentOut => {
                (format!("Payment made ({:?})", txn.method), txn.amount, 0.0)
            }
            TransactionKind::PaymentIn => (
                format!("Payment received ({:?})", txn.method),
                0.0,
                txn.amount,
            ),
        };
        entries.push(StatementEntry {
            date: txn.date,
            time: txn.time,
            kind: EntryKind::CashTransaction,
            description,
            debit,
            credit,
            running_balance: 0.0,
        });
    }

    entries.sort_by_key(|entry| NaiveDateTime::new(entry.date, entry.time));

    let mut running = 0.0;
    for entry in &mut entries {
        running += entry.debit - entry.credit;
        entry.running_balance = running;
    }

    entries
}
