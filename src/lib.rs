#![doc(test(attr(deny(warnings))))]

//! Farmbook Core offers the ledger, stock, and cash-flow primitives behind a
//! farm-commerce billing workflow: farmer due balances, chronological
//! statements, invoice-driven stock movement, and company cash tracking.

pub mod context;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod numbering;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Farmbook Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
