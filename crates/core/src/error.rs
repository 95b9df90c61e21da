//! Stock error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type StockResult<T> = Result<T, StockError>;

/// Inventory-level error.
///
/// Every variant is soft: callers get it back as a value and the store is
/// left untouched. Nothing here is meant to terminate the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// An item name or quantity failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The item is not held in the store.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// A removal asked for more than the store holds.
    #[error("not enough {item}: have {have}, need {need}")]
    InsufficientQuantity { item: String, have: u64, need: u64 },

    /// Reading or writing the persisted document failed.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Warnings are expected misuse (absent item, short stock); the rest are errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InsufficientQuantity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_quantity_message_names_both_amounts() {
        let err = StockError::InsufficientQuantity {
            item: "apple".to_string(),
            have: 2,
            need: 5,
        };
        assert_eq!(err.to_string(), "not enough apple: have 2, need 5");
    }

    #[test]
    fn severity_split() {
        assert!(StockError::not_found("pear").is_warning());
        assert!(!StockError::validation("bad").is_warning());
        assert!(!StockError::persistence("disk full").is_warning());
    }
}
