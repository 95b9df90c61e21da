//! `stockroom-core` — domain building blocks shared by the stockroom crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item;
pub mod value_object;

pub use error::{StockError, StockResult};
pub use item::{ItemName, Quantity, parse_quantity};
pub use value_object::ValueObject;
