use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Outcome of a restock operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Restock {
    /// The product was not in the ledger; a new record was inserted.
    Created,
    /// The product already existed; the amount was added to current stock.
    Merged { total: u64 },
}

/// Why an order could not be fulfilled.
///
/// Rejections are business-level outcomes, not errors: the session routes
/// them to the failed-order log instead of propagating them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The product is not in the ledger.
    NotFound,
    /// The requested quantity exceeds the available stock.
    InsufficientStock { requested: u64, available: u64 },
}

impl core::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectReason::NotFound => write!(f, "not found"),
            RejectReason::InsufficientStock { requested, available } => write!(
                f,
                "insufficient stock, requested={requested}, available={available}"
            ),
        }
    }
}

/// Outcome of placing an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    /// Stock was decremented; `remaining` is the new level.
    Fulfilled { remaining: u64 },
    /// Nothing was mutated.
    Rejected(RejectReason),
}

/// In-memory stock ledger: product id -> units on hand.
///
/// Iteration order is ascending by identifier so display and persistence are
/// deterministic. Quantities are unsigned; an order can never drive a count
/// negative, it is rejected instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLedger {
    records: BTreeMap<ProductId, u64>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stock(&self, id: &ProductId) -> Option<u64> {
        self.records.get(id).copied()
    }

    /// Ascending-by-identifier iteration over all records.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u64)> {
        self.records.iter().map(|(id, quantity)| (id, *quantity))
    }

    /// Replace the record for `id` with `quantity`.
    ///
    /// This is the load path: each persisted line is a full snapshot of one
    /// record, so on duplicate identifiers the last occurrence wins.
    pub fn set_stock(&mut self, id: ProductId, quantity: u64) {
        self.records.insert(id, quantity);
    }

    /// Add `amount` units of `id`, inserting the record if it is new.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn add_stock(&mut self, id: ProductId, amount: u64) -> Restock {
        match self.records.get_mut(&id) {
            Some(stock) => {
                *stock = stock.saturating_add(amount);
                Restock::Merged { total: *stock }
            }
            None => {
                self.records.insert(id, amount);
                Restock::Created
            }
        }
    }

    /// Try to fulfil an order of `quantity` units of `id`.
    ///
    /// The ledger is only mutated on fulfilment; a rejected order leaves the
    /// record untouched.
    pub fn place_order(&mut self, id: &ProductId, quantity: u64) -> OrderOutcome {
        let Some(stock) = self.records.get_mut(id) else {
            return OrderOutcome::Rejected(RejectReason::NotFound);
        };
        if quantity > *stock {
            return OrderOutcome::Rejected(RejectReason::InsufficientStock {
                requested: quantity,
                available: *stock,
            });
        }
        *stock -= quantity;
        OrderOutcome::Fulfilled { remaining: *stock }
    }
}

impl FromIterator<(ProductId, u64)> for StockLedger {
    fn from_iter<I: IntoIterator<Item = (ProductId, u64)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (id, quantity) in iter {
            ledger.set_stock(id, quantity);
        }
        ledger
    }
}
