//! Simulation service — the hexagonal core.
//!
//! [`SimulationService`] owns the advancer and the reconciler and exposes
//! one operation: [`tick`](SimulationService::tick), a full pass over the
//! fleet. All I/O flows through port traits injected at the call site,
//! making the entire pass testable with mock adapters.
//!
//! ```text
//!   SensorStore ──▶ ┌────────────────────────────┐ ──▶ AlertSink
//!                   │     SimulationService       │
//! IncrementSource ─▶│  Advancer · Reconciler      │
//!       BinStore ◀──│                             │
//!                   └────────────────────────────┘
//! ```

use log::info;

use crate::advancer::SensorAdvancer;
use crate::app::ports::{AlertSink, BinStore, IncrementSource, SensorStore};
use crate::config::SimConfig;
use crate::error::StoreResult;
use crate::reconciler::BinReconciler;

// ───────────────────────────────────────────────────────────────
// Tick summary
// ───────────────────────────────────────────────────────────────

/// Counters describing one completed simulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Sensors whose measurement was advanced and persisted.
    pub sensors_advanced: usize,
    /// Bins looked up and rewritten from a propagated level.
    pub bins_reconciled: usize,
    /// Level updates dropped because the bin id was unknown.
    pub orphaned_updates: usize,
    /// Status transitions observed, in either direction.
    pub status_changes: usize,
    /// Alerts raised (transitions into full).
    pub alerts_raised: usize,
}

// ───────────────────────────────────────────────────────────────
// SimulationService
// ───────────────────────────────────────────────────────────────

/// Orchestrates one advancement-then-reconciliation pass per tick.
pub struct SimulationService {
    advancer: SensorAdvancer,
    reconciler: BinReconciler,
    tick_count: u64,
}

impl SimulationService {
    /// Construct the service from configuration.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            advancer: SensorAdvancer::new(config),
            reconciler: BinReconciler::new(config),
            tick_count: 0,
        }
    }

    /// Run one full pass: advance every operational sensor, then reconcile
    /// each owning bin in turn.
    ///
    /// The sensor-then-bin write pair is not atomic across the two stores; a
    /// crash in between leaves the bin stale for at most one tick, after
    /// which the next pass re-derives it from the already-advanced sensor.
    ///
    /// A store failure aborts the remainder of the pass and propagates; the
    /// fixed-interval scheduler is the retry mechanism. Missing bins never
    /// abort — they are absorbed per sensor inside the reconciler.
    pub fn tick(
        &mut self,
        sensors: &mut impl SensorStore,
        bins: &mut impl BinStore,
        increments: &mut impl IncrementSource,
        alerts: &mut impl AlertSink,
    ) -> StoreResult<TickSummary> {
        self.tick_count += 1;
        let mut summary = TickSummary::default();

        // 1. Advance the fleet via SensorStore
        let updates = self.advancer.advance_all(sensors, increments)?;
        summary.sensors_advanced = updates.len();

        // 2. Reconcile each owning bin, alerting on full-transitions
        for update in updates {
            match self
                .reconciler
                .reconcile(bins, alerts, &update.bin_id, update.level)?
            {
                Some(change) => {
                    summary.bins_reconciled += 1;
                    if change.moved() {
                        summary.status_changes += 1;
                    }
                    if change.entered_full() {
                        summary.alerts_raised += 1;
                    }
                }
                None => summary.orphaned_updates += 1,
            }
        }

        info!(
            "tick {} | advanced={} reconciled={} orphaned={} changes={} alerts={}",
            self.tick_count,
            summary.sensors_advanced,
            summary.bins_reconciled,
            summary.orphaned_updates,
            summary.status_changes,
            summary.alerts_raised,
        );

        Ok(summary)
    }

    /// Total passes started since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
