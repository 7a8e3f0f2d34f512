//! Inventory domain module.
//!
//! This crate contains business rules for the stock ledger, implemented purely
//! as deterministic domain logic (no IO, no console, no storage).

pub mod failed_order;
pub mod ledger;

pub use failed_order::{FailedOrder, FailedOrderLog};
pub use ledger::{OrderOutcome, RejectReason, Restock, StockLedger};
