//! Log-based alert sink adapter.
//!
//! Implements [`AlertSink`] by writing collection alerts to the service log.
//! The production deployment substitutes the notification-pipeline adapter
//! behind the same trait.

use log::warn;

use crate::app::ports::AlertSink;
use crate::model::WasteBin;

/// Adapter that logs every full-bin alert.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl LogAlertSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for LogAlertSink {
    fn raise(&mut self, bin: &WasteBin) {
        warn!(
            "ALERT | bin={} level={:.1}% capacity={:.0}L, collection required",
            bin.id, bin.current_level, bin.capacity_litres
        );
    }
}
