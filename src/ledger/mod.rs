pub mod balance;
pub mod cash_flow;
pub mod statement;
pub mod stock;

pub use balance::compute_farmer_balances;
pub use cash_flow::{compute_cash_flow, CashFlowSummary};
pub use statement::{build_statement, DateRange, EntryKind, StatementEntry};
pub use stock::{
    apply_stock_delta, ensure_stock_available, StockDelta, StockDirection, StockMovement,
};
