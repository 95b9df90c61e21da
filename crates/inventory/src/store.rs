use std::path::Path;

use stockroom_core::{ItemName, Quantity, StockError, StockResult, parse_quantity};

use crate::activity::{ActivityEntry, ActivityKind};
use crate::persistence::{self, LoadFailure, LoadOutcome};
use crate::report::Report;

/// Threshold used when a caller does not pick one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory stock: item name to quantity, kept in insertion order.
///
/// Lookups are a linear scan over the entries. Every failure is soft: it is
/// logged, returned as a value, and leaves the store as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock: Vec<(ItemName, Quantity)>,
    activity: Vec<ActivityEntry>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Items and their quantities, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.stock.iter().map(|(name, qty)| (name, *qty))
    }

    /// Activity log accumulated by `add`/`remove` since the store was created.
    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// Blank names and negative quantities are rejected without touching the store.
    pub fn add(&mut self, item: &str, qty: i64) -> StockResult<&ActivityEntry> {
        let (name, qty) = match validate(item, qty) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::error!(item, quantity = qty, "rejected add: {err}");
                return Err(err);
            }
        };

        match self.position(name.as_str()) {
            Some(idx) => {
                let held = self.stock[idx].1;
                let Some(total) = held.checked_add(qty) else {
                    let err = StockError::validation(format!(
                        "quantity overflow for '{name}': have {held}, adding {qty}"
                    ));
                    tracing::error!(item, quantity = qty, "rejected add: {err}");
                    return Err(err);
                };
                self.stock[idx].1 = total;
            }
            None => self.stock.push((name.clone(), qty)),
        }

        tracing::info!(item, quantity = qty, "added stock");
        Ok(self.record(ActivityKind::Added, name, qty))
    }

    /// Remove `qty` units of `item`. The entry is dropped once it reaches zero.
    pub fn remove(&mut self, item: &str, qty: i64) -> StockResult<()> {
        let qty = match parse_quantity(qty) {
            Ok(qty) => qty,
            Err(err) => {
                tracing::error!(item, quantity = qty, "rejected remove: {err}");
                return Err(err);
            }
        };

        let Some(idx) = self.position(item) else {
            tracing::warn!(item, "item '{item}' not found");
            return Err(StockError::not_found(item));
        };

        let held = self.stock[idx].1;
        if held < qty {
            tracing::warn!(item, "not enough {item}. have: {held}, need: {qty}");
            return Err(StockError::InsufficientQuantity {
                item: item.to_string(),
                have: held,
                need: qty,
            });
        }

        let remaining = held - qty;
        let name = if remaining == 0 {
            self.stock.remove(idx).0
        } else {
            self.stock[idx].1 = remaining;
            self.stock[idx].0.clone()
        };

        tracing::info!(item, quantity = qty, remaining, "removed stock");
        self.record(ActivityKind::Removed, name, qty);
        Ok(())
    }

    /// Quantity held for `item`; `None` when the item is absent.
    pub fn get_quantity(&self, item: &str) -> Option<Quantity> {
        self.position(item).map(|idx| self.stock[idx].1)
    }

    /// Names of items whose quantity is strictly below `threshold`.
    ///
    /// A negative threshold is clamped to 0, which matches nothing.
    pub fn list_low_stock(&self, threshold: i64) -> Vec<&str> {
        let threshold = if threshold < 0 {
            tracing::warn!(threshold, "threshold cannot be negative; using 0");
            0
        } else {
            threshold as u64
        };

        self.stock
            .iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Replace the store contents with the document at `path`.
    ///
    /// On anything but [`LoadOutcome::Loaded`] the store is left unchanged.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();
        match persistence::read_stock(path) {
            Ok(stock) => {
                let items = stock.len();
                self.stock = stock;
                tracing::info!(path = %path.display(), items, "loaded inventory");
                LoadOutcome::Loaded { items }
            }
            Err(failure) => {
                match &failure {
                    LoadFailure::NotFound => {
                        tracing::warn!(path = %path.display(), "file not found");
                    }
                    LoadFailure::Malformed(reason) => {
                        tracing::error!(path = %path.display(), "invalid JSON: {reason}");
                    }
                    LoadFailure::InvalidFormat(reason) => {
                        tracing::error!(path = %path.display(), "invalid data format: {reason}");
                    }
                }
                failure.into()
            }
        }
    }

    /// Persist the store as a JSON object at `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        match persistence::write_stock(path, self.items()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), items = self.len(), "saved inventory");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "error saving: {err}");
                Err(err)
            }
        }
    }

    pub fn report(&self) -> Report {
        Report::new(
            self.items()
                .map(|(name, qty)| (name.as_str().to_string(), qty))
                .collect(),
        )
    }

    fn position(&self, item: &str) -> Option<usize> {
        self.stock.iter().position(|(name, _)| name.as_str() == item)
    }

    fn record(&mut self, kind: ActivityKind, item: ItemName, qty: Quantity) -> &ActivityEntry {
        self.activity.push(ActivityEntry::now(kind, item, qty));
        &self.activity[self.activity.len() - 1]
    }
}

fn validate(item: &str, qty: i64) -> StockResult<(ItemName, Quantity)> {
    let name = ItemName::parse(item)?;
    let qty = parse_quantity(qty)?;
    Ok((name, qty))
}
