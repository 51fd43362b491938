//! Sensor advancer.
//!
//! Moves every operational sensor one simulated tick forward: draw an
//! increment, clamp the sum to the 100% ceiling, derive the display band,
//! persist, and hand the new level to the bin reconciler.
//!
//! Two cases write nothing: faulty sensors (frozen entirely) and sensors
//! already pinned at exactly 100 (nothing left to advance). A measurement
//! found *above* 100 — external tampering or a prior bug — is repaired to
//! 100, persisted, and still propagated so the owning bin catches up.

use chrono::Utc;
use log::{debug, warn};

use crate::app::ports::{IncrementSource, SensorStore};
use crate::config::SimConfig;
use crate::error::StoreResult;
use crate::model::SensorColor;

/// A new measurement to be applied to the owning bin.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelUpdate {
    pub bin_id: String,
    /// Already clamped to [0, 100] by the advancer.
    pub level: f32,
}

/// Advances operational sensors by one simulated tick.
pub struct SensorAdvancer {
    min_increment: f32,
    max_increment: f32,
    warning_threshold: f32,
    critical_threshold: f32,
}

impl SensorAdvancer {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            min_increment: config.min_increment,
            max_increment: config.max_increment,
            warning_threshold: config.sensor_warning_threshold,
            critical_threshold: config.sensor_critical_threshold,
        }
    }

    /// Run one advancement pass over the whole fleet.
    ///
    /// Returns the level updates to feed into bin reconciliation, one per
    /// persisted sensor write. An empty fleet is a no-op, not an error.
    pub fn advance_all(
        &self,
        sensors: &mut impl SensorStore,
        increments: &mut impl IncrementSource,
    ) -> StoreResult<Vec<LevelUpdate>> {
        let mut updates = Vec::new();

        for mut sensor in sensors.list_all()? {
            if !sensor.is_working() {
                debug!("sensor {}: faulty, skipping", sensor.id);
                continue;
            }

            let new_measurement = if sensor.measurement > 100.0 {
                // Out-of-range from tampering or a prior bug: repair in place.
                warn!(
                    "sensor {}: measurement {:.1} out of range, clamping to 100",
                    sensor.id, sensor.measurement
                );
                100.0
            } else if sensor.measurement >= 100.0 {
                // Pinned at the ceiling: nothing to advance, nothing to write.
                continue;
            } else {
                let step = increments.next_increment(self.min_increment, self.max_increment);
                (sensor.measurement + step).min(100.0)
            };

            sensor.measurement = new_measurement;
            sensor.color = SensorColor::for_measurement(
                new_measurement,
                self.warning_threshold,
                self.critical_threshold,
            );
            sensor.last_reading = Some(Utc::now());

            let bin_id = sensor.bin_id.clone();
            sensors.save(sensor)?;
            updates.push(LevelUpdate {
                bin_id,
                level: new_measurement,
            });
        }

        Ok(updates)
    }
}
