//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The column separator of the persisted flat files.
///
/// Identifiers must never contain this character; [`ProductId`] enforces it.
pub const FIELD_DELIMITER: char = ',';

/// Identifier of a product in the stock ledger.
///
/// Invariants: non-empty, never contains [`FIELD_DELIMITER`]. Ordered so that
/// ledger iteration (and therefore display and persistence) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier, rejecting values that would corrupt the
    /// persisted file format.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        if id.contains(FIELD_DELIMITER) {
            return Err(DomainError::invalid_id(format!(
                "product id {id:?} contains the field delimiter {FIELD_DELIMITER:?}"
            )));
        }
        Ok(Self(id))
    }

    /// Build an identifier from free-form console input.
    ///
    /// Strips any field-delimiter characters so the persisted file stays
    /// parseable; still rejects input that is empty once cleaned up.
    pub fn sanitize(raw: &str) -> Result<Self, DomainError> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != FIELD_DELIMITER).collect();
        Self::new(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_embedded_delimiter() {
        let err = ProductId::new("WID,GET").unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for embedded delimiter"),
        }
    }

    #[test]
    fn new_rejects_empty_id() {
        let err = ProductId::new("   ").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty id"),
        }
    }

    #[test]
    fn sanitize_strips_delimiters() {
        let id = ProductId::sanitize(" WID,GET,01 ").unwrap();
        assert_eq!(id.as_str(), "WIDGET01");
    }

    #[test]
    fn sanitize_rejects_input_that_is_only_delimiters() {
        assert!(ProductId::sanitize(",,,").is_err());
    }
}
