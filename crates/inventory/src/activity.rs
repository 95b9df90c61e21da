//! Timestamped activity entries produced by stock mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemName, Quantity};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Added,
    Removed,
}

impl ActivityKind {
    fn verb(self) -> &'static str {
        match self {
            ActivityKind::Added => "Added",
            ActivityKind::Removed => "Removed",
        }
    }
}

/// One line of the store's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub kind: ActivityKind,
    pub item: ItemName,
    pub quantity: Quantity,
}

impl ActivityEntry {
    pub fn now(kind: ActivityKind, item: ItemName, quantity: Quantity) -> Self {
        Self {
            at: Utc::now(),
            kind,
            item,
            quantity,
        }
    }
}

impl core::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.kind.verb(),
            self.quantity,
            self.item
        )
    }
}
