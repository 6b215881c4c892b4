//! Invoice submission, editing, and deletion, including the stock side
//! effects each lifecycle event carries.

use crate::domain::invoice::{PurchaseInvoice, SalesInvoice};
use crate::ledger::stock::{
    apply_stock_delta, ensure_stock_available, StockDelta, StockDirection, StockMovement,
};
use crate::numbering::{next_invoice_number, InvoicePrefix};
use crate::storage::DocumentStore;

use super::{ServiceError, ServiceResult};

/// Orchestrates invoice lifecycle events against the document store.
///
/// Stock writes and the invoice write are separate store round trips with
/// no transaction across them; a crash mid-loop leaves partial stock
/// updates. This mirrors the store contract, which promises atomicity only
/// per call.
pub struct InvoiceService;

impl InvoiceService {
    /// Validates and persists a new sales invoice, deducting stock line by
    /// line first. Insufficient stock blocks submission before any write.
    pub fn submit_sale(
        store: &dyn DocumentStore,
        company_id: &str,
        mut invoice: SalesInvoice,
    ) -> ServiceResult<SalesInvoice> {
        validate_sale(&invoice)?;
        let items = store.load_items(company_id)?;
        ensure_stock_available(&items, &invoice).map_err(ServiceError::from)?;

        let mut invoices = store.load_sales_invoices(company_id)?;
        invoice.invoice_number = next_invoice_number(
            InvoicePrefix::Sales,
            invoice.date,
            invoices.iter().map(|i| i.invoice_number.as_str()),
        );
        invoice.id = invoice.invoice_number.clone();
        invoice.company_id = company_id.to_string();

        write_stock_deltas(store, company_id, &invoice.stock_deltas(StockDirection::Apply))?;
        invoices.push(invoice.clone());
        store.save_sales_invoices(company_id, &invoices)?;
        tracing::info!(invoice = %invoice.invoice_number, "sales invoice submitted");
        Ok(invoice)
    }

    /// Validates and persists a new purchase invoice, crediting stock with
    /// each line's final weight.
    pub fn submit_purchase(
        store: &dyn DocumentStore,
        company_id: &str,
        mut invoice: PurchaseInvoice,
    ) -> ServiceResult<PurchaseInvoice> {
        validate_purchase(&invoice)?;

        let mut invoices = store.load_purchase_invoices(company_id)?;
        invoice.invoice_number = next_invoice_number(
            InvoicePrefix::Purchase,
            invoice.date,
            invoices.iter().map(|i| i.invoice_number.as_str()),
        );
        invoice.id = invoice.invoice_number.clone();
        invoice.company_id = company_id.to_string();

        write_stock_deltas(store, company_id, &invoice.stock_deltas(StockDirection::Apply))?;
        invoices.push(invoice.clone());
        store.save_purchase_invoices(company_id, &invoices)?;
        tracing::info!(invoice = %invoice.invoice_number, "purchase invoice submitted");
        Ok(invoice)
    }

    /// Replaces a sales invoice: the stored quantities are reverted, the
    /// replacement is validated against the restored stock, then applied.
    /// A rejected edit puts the original quantities back, so it is a no-op.
    pub fn update_sale(
        store: &dyn DocumentStore,
        company_id: &str,
        invoice_id: &str,
        mut replacement: SalesInvoice,
    ) -> ServiceResult<SalesInvoice> {
        validate_sale(&replacement)?;
        let mut invoices = store.load_sales_invoices(company_id)?;
        let Some(position) = invoices.iter().position(|i| i.id == invoice_id) else {
            return Err(ServiceError::Invalid(format!(
                "sales invoice `{invoice_id}` not found"
            )));
        };
        let stored = invoices[position].clone();

        write_stock_deltas(store, company_id, &stored.stock_deltas(StockDirection::Revert))?;
        let items = store.load_items(company_id)?;
        if let Err(err) = ensure_stock_available(&items, &replacement) {
            write_stock_deltas(store, company_id, &stored.stock_deltas(StockDirection::Apply))?;
            return Err(err.into());
        }

        replacement.id = stored.id.clone();
        replacement.invoice_number = stored.invoice_number.clone();
        replacement.company_id = stored.company_id.clone();
        write_stock_deltas(
            store,
            company_id,
            &replacement.stock_deltas(StockDirection::Apply),
        )?;
        invoices[position] = replacement.clone();
        store.save_sales_invoices(company_id, &invoices)?;
        Ok(replacement)
    }

    /// Replaces a purchase invoice, reverting the stored final weights and
    /// applying the replacement's.
    pub fn update_purchase(
        store: &dyn DocumentStore,
        company_id: &str,
        invoice_id: &str,
        mut replacement: PurchaseInvoice,
    ) -> ServiceResult<PurchaseInvoice> {
        validate_purchase(&replacement)?;
        let mut invoices = store.load_purchase_invoices(company_id)?;
        let Some(position) = invoices.iter().position(|i| i.id == invoice_id) else {
            return Err(ServiceError::Invalid(format!(
                "purchase invoice `{invoice_id}` not found"
            )));
        };
        let stored = invoices[position].clone();

        write_stock_deltas(store, company_id, &stored.stock_deltas(StockDirection::Revert))?;
        replacement.id = stored.id.clone();
        replacement.invoice_number = stored.invoice_number.clone();
        replacement.company_id = stored.company_id.clone();
        write_stock_deltas(
            store,
            company_id,
            &replacement.stock_deltas(StockDirection::Apply),
        )?;
        invoices[position] = replacement.clone();
        store.save_purchase_invoices(company_id, &invoices)?;
        Ok(replacement)
    }

    /// Deletes a sales invoice and restores the stock it had deducted.
    pub fn delete_sale(
        store: &dyn DocumentStore,
        company_id: &str,
        invoice_id: &str,
    ) -> ServiceResult<SalesInvoice> {
        let mut invoices = store.load_sales_invoices(company_id)?;
        let Some(position) = invoices.iter().position(|i| i.id == invoice_id) else {
            return Err(ServiceError::Invalid(format!(
                "sales invoice `{invoice_id}` not found"
            )));
        };
        let removed = invoices.remove(position);
        write_stock_deltas(store, company_id, &removed.stock_deltas(StockDirection::Revert))?;
        store.save_sales_invoices(company_id, &invoices)?;
        Ok(removed)
    }

    /// Deletes a purchase invoice and removes the stock it had credited.
    pub fn delete_purchase(
        store: &dyn DocumentStore,
        company_id: &str,
        invoice_id: &str,
    ) -> ServiceResult<PurchaseInvoice> {
        let mut invoices = store.load_purchase_invoices(company_id)?;
        let Some(position) = invoices.iter().position(|i| i.id == invoice_id) else {
            return Err(ServiceError::Invalid(format!(
                "purchase invoice `{invoice_id}` not found"
            )));
        };
        let removed = invoices.remove(position);
        write_stock_deltas(store, company_id, &removed.stock_deltas(StockDirection::Revert))?;
        store.save_purchase_invoices(company_id, &invoices)?;
        Ok(removed)
    }

    pub fn list_sales(
        store: &dyn DocumentStore,
        company_id: &str,
    ) -> ServiceResult<Vec<SalesInvoice>> {
        Ok(store.load_sales_invoices(company_id)?)
    }

    pub fn list_purchases(
        store: &dyn DocumentStore,
        company_id: &str,
    ) -> ServiceResult<Vec<PurchaseInvoice>> {
        Ok(store.load_purchase_invoices(company_id)?)
    }
}

/// One independent round trip per line. Deltas naming an item that no
/// longer exists are skipped with a warning, matching the dangling-reference
/// policy everywhere else.
fn write_stock_deltas(
    store: &dyn DocumentStore,
    company_id: &str,
    deltas: &[StockDelta],
) -> ServiceResult<()> {
    for delta in deltas {
        let items = store.load_items(company_id)?;
        let Some(item) = items.iter().find(|item| item.id == delta.item_id) else {
            tracing::warn!(item = %delta.item_id, "stock delta references unknown item");
            continue;
        };
        let updated = apply_stock_delta(item, delta.quantity);
        store.update_item_stock(company_id, &item.id, updated.stock)?;
    }
    Ok(())
}

fn validate_sale(invoice: &SalesInvoice) -> ServiceResult<()> {
    if invoice.farmer.id.trim().is_empty() {
        return Err(ServiceError::Invalid("farmer is required".into()));
    }
    if invoice.lines.is_empty() {
        return Err(ServiceError::Invalid(
            "invoice must have at least one line".into(),
        ));
    }
    for line in &invoice.lines {
        if line.weight <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "line weight must be positive, got {}",
                line.weight
            )));
        }
        if line.rate <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "line rate must be positive, got {}",
                line.rate
            )));
        }
    }
    validate_advance(invoice.advance, invoice.total_amount)?;
    invoice.validate()?;
    Ok(())
}

fn validate_purchase(invoice: &PurchaseInvoice) -> ServiceResult<()> {
    if invoice.farmer.id.trim().is_empty() {
        return Err(ServiceError::Invalid("farmer is required".into()));
    }
    if invoice.lines.is_empty() {
        return Err(ServiceError::Invalid(
            "invoice must have at least one line".into(),
        ));
    }
    for line in &invoice.lines {
        if line.gross_weight <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "gross weight must be positive, got {}",
                line.gross_weight
            )));
        }
        if line.tare_weight < 0.0 || line.tare_weight >= line.gross_weight {
            return Err(ServiceError::Invalid(format!(
                "tare weight {} must be between 0 and gross weight {}",
                line.tare_weight, line.gross_weight
            )));
        }
        if !(0.0..=100.0).contains(&line.mud_deduction_percent) {
            return Err(ServiceError::Invalid(format!(
                "mud deduction must be between 0 and 100, got {}",
                line.mud_deduction_percent
            )));
        }
        if line.rate <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "line rate must be positive, got {}",
                line.rate
            )));
        }
    }
    validate_advance(invoice.advance, invoice.total_amount)?;
    invoice.validate()?;
    Ok(())
}

fn validate_advance(advance: f64, total: f64) -> ServiceResult<()> {
    if advance < 0.0 || advance > total {
        return Err(ServiceError::Invalid(format!(
            "advance {advance} must be between 0 and the invoice total {total}"
        )));
    }
    Ok(())
}
