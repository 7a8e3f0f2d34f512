//! The persisted row schema.
//!
//! Both files share one delimiter and one escaping rule:
//! - columns are joined by [`FIELD_DELIMITER`] with no quoting;
//! - free text (the rejection reason) has any embedded delimiter replaced by
//!   [`REASON_SUBSTITUTE`], so a row always splits back into its columns.

use thiserror::Error;

use stockroom_core::{FIELD_DELIMITER, ProductId};
use stockroom_inventory::FailedOrder;

/// Header line of the failed-orders file.
pub const FAILED_ORDER_HEADER: &str = "ProductID,Quantity,Reason";

/// Replacement for delimiter characters embedded in free text.
pub const REASON_SUBSTITUTE: char = ';';

/// Why a persisted inventory line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing field delimiter")]
    MissingDelimiter,

    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    #[error("product {product_id}: invalid quantity {raw:?}")]
    InvalidQuantity { product_id: String, raw: String },
}

/// One inventory record as persisted: `id,quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub product_id: ProductId,
    pub quantity: u64,
}

impl InventoryRow {
    /// Decode one line of the inventory file.
    pub fn parse(line: &str) -> Result<Self, RowError> {
        let Some((id, raw_quantity)) = line.split_once(FIELD_DELIMITER) else {
            return Err(RowError::MissingDelimiter);
        };
        let product_id =
            ProductId::new(id).map_err(|e| RowError::InvalidProductId(e.to_string()))?;
        let quantity =
            raw_quantity
                .trim()
                .parse::<u64>()
                .map_err(|_| RowError::InvalidQuantity {
                    product_id: id.to_string(),
                    raw: raw_quantity.to_string(),
                })?;
        Ok(Self { product_id, quantity })
    }

    /// Encode as one line of the inventory file.
    pub fn encode(&self) -> String {
        format!("{}{FIELD_DELIMITER}{}", self.product_id, self.quantity)
    }
}

/// Replace embedded delimiters so the reason stays a single column.
pub fn sanitize_reason(reason: &str) -> String {
    reason
        .chars()
        .map(|c| if c == FIELD_DELIMITER { REASON_SUBSTITUTE } else { c })
        .collect()
}

/// Encode one line of the failed-orders file: `id,quantity,reason`.
pub fn encode_failed_order(order: &FailedOrder) -> String {
    format!(
        "{id}{d}{quantity}{d}{reason}",
        id = order.product_id,
        d = FIELD_DELIMITER,
        quantity = order.quantity,
        reason = sanitize_reason(&order.reason),
    )
}
