//! Fill-level sensor entity and its display bands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a sensor is eligible for measurement advancement.
///
/// A `Faulty` sensor is frozen: the advancer never touches its measurement,
/// color, or reading timestamp, and never propagates it downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalState {
    Working,
    Faulty,
}

/// Display color band for a sensor's current measurement.
///
/// A device-health indicator for dashboards (nominal / warning / critical),
/// distinct from the bin's business status even though the default band
/// edges coincide with the bin thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorColor {
    Green,
    Orange,
    Red,
}

impl SensorColor {
    /// Band for a measurement. Bands are closed on the lower bound: a
    /// measurement of exactly `critical` is `Red`, exactly `warning` is
    /// `Orange`.
    pub fn for_measurement(measurement: f32, warning: f32, critical: f32) -> Self {
        if measurement >= critical {
            Self::Red
        } else if measurement >= warning {
            Self::Orange
        } else {
            Self::Green
        }
    }
}

/// A simulated fill-level sensor mounted in one bin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillSensor {
    pub id: String,
    /// The bin this sensor reports for. Each sensor maps to exactly one bin.
    pub bin_id: String,
    pub state: OperationalState,
    /// Percent fill reported by the sensor (0-100).
    pub measurement: f32,
    pub color: SensorColor,
    /// When the measurement was last advanced. `None` until the first tick.
    pub last_reading: Option<DateTime<Utc>>,
}

impl FillSensor {
    /// A freshly provisioned, empty, working sensor.
    pub fn new(id: impl Into<String>, bin_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bin_id: bin_id.into(),
            state: OperationalState::Working,
            measurement: 0.0,
            color: SensorColor::Green,
            last_reading: None,
        }
    }

    pub fn is_working(&self) -> bool {
        self.state == OperationalState::Working
    }
}
