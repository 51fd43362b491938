//! Bin status reconciler.
//!
//! Translates a propagated sensor measurement into bin state and detects the
//! one transition worth alerting on: any status crossing *into* `Full`.
//!
//! The alert rule is a compare-before-write step, not a stored flag:
//!
//! ```text
//!   previous = bin.status          (before mutation)
//!   bin.status = f(level)          (pure threshold function)
//!   alert  iff  bin.status == Full && previous != Full
//! ```
//!
//! A bin that is already `Full` and stays `Full` never re-alerts; dropping
//! below `Full` re-arms the rule, so `full → half_full → full` alerts again
//! on the second crossing.

use chrono::Utc;
use log::{debug, info};

use crate::app::ports::{AlertSink, BinStore};
use crate::config::SimConfig;
use crate::error::StoreResult;
use crate::model::BinStatus;

/// Status movement observed by a single reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub previous: BinStatus,
    pub current: BinStatus,
}

impl StatusChange {
    /// True when this reconciliation crossed into `Full` from any lower
    /// status — the alert condition.
    pub fn entered_full(&self) -> bool {
        self.current == BinStatus::Full && self.previous != BinStatus::Full
    }

    /// True when the status moved at all, in either direction.
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }
}

/// Maps sensor measurements onto bin state.
pub struct BinReconciler {
    half_full_threshold: f32,
    full_threshold: f32,
}

impl BinReconciler {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            half_full_threshold: config.bin_half_full_threshold,
            full_threshold: config.bin_full_threshold,
        }
    }

    /// Apply `level` to the bin identified by `bin_id`.
    ///
    /// An unknown id is a silent no-op: the owning sensor may reference a
    /// bin that was deleted or never provisioned, and one stale sensor must
    /// not abort the pass. Returns the observed status movement when the bin
    /// exists.
    ///
    /// Downward transitions are normal, unalarmed events.
    pub fn reconcile(
        &self,
        bins: &mut impl BinStore,
        alerts: &mut impl AlertSink,
        bin_id: &str,
        level: f32,
    ) -> StoreResult<Option<StatusChange>> {
        let Some(mut bin) = bins.find_by_id(bin_id)? else {
            debug!("bin {bin_id}: not provisioned, dropping level update");
            return Ok(None);
        };

        let previous = bin.status;
        // Callers clamp already; re-clamp regardless.
        let level = level.min(100.0);

        bin.current_level = level;
        bin.status = BinStatus::for_level(level, self.half_full_threshold, self.full_threshold);
        bin.last_updated = Some(Utc::now());

        let bin = bins.save(bin)?;
        let change = StatusChange {
            previous,
            current: bin.status,
        };

        if change.entered_full() {
            info!(
                "bin {}: {:?} -> {:?} at {:.1}%, raising alert",
                bin.id, change.previous, change.current, level
            );
            alerts.raise(&bin);
        }

        Ok(Some(change))
    }
}
