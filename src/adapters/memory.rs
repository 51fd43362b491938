//! In-memory store adapters.
//!
//! Stand-ins for the platform's document-store repositories: a `HashMap`
//! keyed by id with last-write-wins semantics, which is all the simulation
//! core requires of a store. Used by the service binary and the test suites;
//! a deployment against the real document store implements the same two
//! traits.

use std::collections::HashMap;

use crate::app::ports::{BinStore, SensorStore};
use crate::error::StoreResult;
use crate::model::{FillSensor, WasteBin};

// ───────────────────────────────────────────────────────────────
// Sensor store
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemorySensorStore {
    sensors: HashMap<String, FillSensor>,
}

impl InMemorySensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sensors(sensors: impl IntoIterator<Item = FillSensor>) -> Self {
        Self {
            sensors: sensors.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&FillSensor> {
        self.sensors.get(id)
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

impl SensorStore for InMemorySensorStore {
    fn list_all(&self) -> StoreResult<Vec<FillSensor>> {
        let mut all: Vec<_> = self.sensors.values().cloned().collect();
        // Pass order is not contractual; sorting just keeps logs and tests
        // reproducible.
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn save(&mut self, sensor: FillSensor) -> StoreResult<FillSensor> {
        self.sensors.insert(sensor.id.clone(), sensor.clone());
        Ok(sensor)
    }
}

// ───────────────────────────────────────────────────────────────
// Bin store
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryBinStore {
    bins: HashMap<String, WasteBin>,
}

impl InMemoryBinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bins(bins: impl IntoIterator<Item = WasteBin>) -> Self {
        Self {
            bins: bins.into_iter().map(|b| (b.id.clone(), b)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&WasteBin> {
        self.bins.get(id)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl BinStore for InMemoryBinStore {
    fn find_by_id(&self, bin_id: &str) -> StoreResult<Option<WasteBin>> {
        Ok(self.bins.get(bin_id).cloned())
    }

    fn save(&mut self, bin: WasteBin) -> StoreResult<WasteBin> {
        self.bins.insert(bin.id.clone(), bin.clone());
        Ok(bin)
    }
}
