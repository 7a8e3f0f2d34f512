use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// One rejected order: what was asked for and why it was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedOrder {
    pub product_id: ProductId,
    pub quantity: u64,
    pub reason: String,
}

/// Append-ordered log of rejected orders.
///
/// Purely in-memory. Entries keep insertion order, are written out once at
/// shutdown if any exist, and are never read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedOrderLog {
    entries: Vec<FailedOrder>,
}

impl FailedOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rejected order.
    pub fn record(&mut self, product_id: ProductId, quantity: u64, reason: impl Into<String>) {
        self.entries.push(FailedOrder {
            product_id,
            quantity,
            reason: reason.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FailedOrder] {
        &self.entries
    }
}
