//! Waste bin entity and its derived status.
//!
//! Status is a pure function of fill level and the two bin thresholds; it is
//! never set independently of the level. The machine has no terminal state
//! and moves freely in both directions:
//!
//! ```text
//!  Empty ──[level ≥ half_full]──▶ HalfFull ──[level ≥ full]──▶ Full
//!    ▲                               │ ▲                         │
//!    └───────[level < half_full]─────┘ └─────[level < full]──────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection status of a bin, derived from its fill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinStatus {
    Empty,
    HalfFull,
    Full,
}

impl BinStatus {
    /// Status for a fill level. Thresholds are closed on the lower bound:
    /// exactly `full` (80.0 by default) is `Full`, exactly `half_full`
    /// (50.0) is `HalfFull`.
    pub fn for_level(level: f32, half_full: f32, full: f32) -> Self {
        if level >= full {
            Self::Full
        } else if level >= half_full {
            Self::HalfFull
        } else {
            Self::Empty
        }
    }
}

/// A municipal waste bin as the simulation sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteBin {
    pub id: String,
    /// Percent of capacity currently occupied (0-100).
    pub current_level: f32,
    /// Physical capacity in litres (> 0). Provisioning metadata; the
    /// simulation works in percent and never reads this.
    pub capacity_litres: f32,
    pub status: BinStatus,
    /// When the level was last reconciled. `None` until the first tick.
    pub last_updated: Option<DateTime<Utc>>,
}

impl WasteBin {
    /// A freshly provisioned, empty bin.
    pub fn new(id: impl Into<String>, capacity_litres: f32) -> Self {
        Self {
            id: id.into(),
            current_level: 0.0,
            capacity_litres,
            status: BinStatus::Empty,
            last_updated: None,
        }
    }
}
