//! Port traits — the hexagonal boundary between the simulation core and the
//! rest of the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SimulationService (domain)
//! ```
//!
//! The document-store repositories, the alert pipeline, and the random
//! source all sit behind these traits. The
//! [`SimulationService`](super::service::SimulationService) consumes them at
//! call sites, so the core runs identically against production adapters and
//! test mocks.

use crate::error::StoreResult;
use crate::model::{FillSensor, WasteBin};

// ───────────────────────────────────────────────────────────────
// Sensor store (driven adapter: document store → domain)
// ───────────────────────────────────────────────────────────────

/// Read/write access to the sensor collection.
///
/// Last-write-wins per sensor; no transactional guarantee is required or
/// assumed.
pub trait SensorStore {
    /// Every sensor in the fleet, operational or not.
    fn list_all(&self) -> StoreResult<Vec<FillSensor>>;

    /// Persist a sensor, returning the stored record.
    fn save(&mut self, sensor: FillSensor) -> StoreResult<FillSensor>;
}

// ───────────────────────────────────────────────────────────────
// Bin store
// ───────────────────────────────────────────────────────────────

/// Read/write access to the bin collection.
pub trait BinStore {
    /// Look up a bin. `None` when the id is unknown — the bin may have been
    /// deleted or never provisioned, which the reconciler treats as a
    /// per-sensor no-op.
    fn find_by_id(&self, bin_id: &str) -> StoreResult<Option<WasteBin>>;

    /// Persist a bin, returning the stored record.
    fn save(&mut self, bin: WasteBin) -> StoreResult<WasteBin>;
}

// ───────────────────────────────────────────────────────────────
// Alert sink (driven adapter: domain → notification pipeline)
// ───────────────────────────────────────────────────────────────

/// Outbound alert channel.
///
/// Fire-and-forget: the core never consumes a result, and the sink must not
/// block the pass.
pub trait AlertSink {
    /// Record that `bin` has just transitioned into `Full`.
    fn raise(&mut self, bin: &WasteBin);
}

// ───────────────────────────────────────────────────────────────
// Increment source (capability: randomness)
// ───────────────────────────────────────────────────────────────

/// Capability supplying per-tick fill increments.
///
/// Injected so tests can substitute a fixed sequence for the PRNG and make
/// advancement deterministic.
pub trait IncrementSource {
    /// Next increment drawn from the closed interval `[min, max]`.
    fn next_increment(&mut self, min: f32, max: f32) -> f32;
}
