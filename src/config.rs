//! Simulation configuration parameters
//!
//! All tunable parameters for the BinWatch simulation loop.
//! Values can be overridden via a JSON config file passed to the binary.

use serde::{Deserialize, Serialize};

/// Core simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    // --- Scheduling ---
    /// Seconds between simulation passes
    pub tick_interval_secs: u64,

    // --- Sensor advancement ---
    /// Smallest per-tick fill increment (percent of capacity)
    pub min_increment: f32,
    /// Largest per-tick fill increment (percent of capacity)
    pub max_increment: f32,

    // --- Sensor display bands ---
    /// Measurement (percent) at which a sensor shows the warning band
    pub sensor_warning_threshold: f32,
    /// Measurement (percent) at which a sensor shows the critical band
    pub sensor_critical_threshold: f32,

    // --- Bin status thresholds ---
    /// Fill level (percent) at which a bin counts as half full
    pub bin_half_full_threshold: f32,
    /// Fill level (percent) at which a bin counts as full (alert boundary)
    pub bin_full_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Scheduling
            tick_interval_secs: 60,

            // Advancement
            min_increment: 0.5,
            max_increment: 3.0,

            // Sensor display bands. Same numbers as the bin thresholds below,
            // but the pairs are independent knobs: one is a device health
            // indicator, the other a collection-business boundary.
            sensor_warning_threshold: 50.0,
            sensor_critical_threshold: 80.0,

            // Bin status thresholds
            bin_half_full_threshold: 50.0,
            bin_full_threshold: 80.0,
        }
    }
}
