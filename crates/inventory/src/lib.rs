//! Inventory module: an in-memory stock store with JSON file persistence.
//!
//! The store is an explicit owned value. Callers create it, mutate it through
//! its operations and decide when to persist it; there is no shared state.

pub mod activity;
pub mod persistence;
pub mod report;
pub mod store;

pub use activity::{ActivityEntry, ActivityKind};
pub use persistence::{DEFAULT_DATA_FILE, LoadFailure, LoadOutcome};
pub use report::Report;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
