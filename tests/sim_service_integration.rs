//! Integration tests: SimulationService → stores → alert sink.

use binwatch::adapters::memory::{InMemoryBinStore, InMemorySensorStore};
use binwatch::app::ports::{AlertSink, IncrementSource, SensorStore};
use binwatch::app::service::SimulationService;
use binwatch::config::SimConfig;
use binwatch::error::{StoreError, StoreResult};
use binwatch::model::{BinStatus, FillSensor, OperationalState, SensorColor, WasteBin};

// ── Mock implementations ──────────────────────────────────────

/// Replays a fixed increment sequence, cycling when exhausted.
struct FixedIncrements {
    seq: Vec<f32>,
    next: usize,
}

impl FixedIncrements {
    fn new(seq: &[f32]) -> Self {
        Self {
            seq: seq.to_vec(),
            next: 0,
        }
    }
}

impl IncrementSource for FixedIncrements {
    fn next_increment(&mut self, _min: f32, _max: f32) -> f32 {
        let v = self.seq[self.next % self.seq.len()];
        self.next += 1;
        v
    }
}

struct RecordingSink {
    alerts: Vec<String>,
}

impl RecordingSink {
    fn new() -> Self {
        Self { alerts: Vec::new() }
    }
}

impl AlertSink for RecordingSink {
    fn raise(&mut self, bin: &WasteBin) {
        self.alerts.push(bin.id.clone());
    }
}

/// Sensor store that is flat-out unreachable.
struct UnreachableSensorStore;

impl SensorStore for UnreachableSensorStore {
    fn list_all(&self) -> StoreResult<Vec<FillSensor>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn save(&mut self, _sensor: FillSensor) -> StoreResult<FillSensor> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

// ── Helpers ───────────────────────────────────────────────────

fn make_sensor(id: &str, bin_id: &str, measurement: f32) -> FillSensor {
    let cfg = SimConfig::default();
    FillSensor {
        measurement,
        color: SensorColor::for_measurement(
            measurement,
            cfg.sensor_warning_threshold,
            cfg.sensor_critical_threshold,
        ),
        ..FillSensor::new(id, bin_id)
    }
}

fn make_bin(id: &str, level: f32) -> WasteBin {
    let cfg = SimConfig::default();
    WasteBin {
        current_level: level,
        status: BinStatus::for_level(level, cfg.bin_half_full_threshold, cfg.bin_full_threshold),
        ..WasteBin::new(id, 240.0)
    }
}

fn make_service() -> SimulationService {
    SimulationService::new(&SimConfig::default())
}

// ── End-to-end: threshold crossing raises exactly one alert ──

#[test]
fn crossing_into_full_raises_exactly_one_alert() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::with_sensors([make_sensor("s-1", "b-1", 78.0)]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 78.0)]);
    let mut increments = FixedIncrements::new(&[2.5]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 1);
    assert_eq!(summary.bins_reconciled, 1);
    assert_eq!(summary.alerts_raised, 1);
    assert_eq!(sink.alerts, vec!["b-1"]);

    let sensor = sensors.get("s-1").unwrap();
    assert!((sensor.measurement - 80.5).abs() < 1e-4);
    assert_eq!(sensor.color, SensorColor::Red);

    let bin = bins.get("b-1").unwrap();
    assert_eq!(bin.status, BinStatus::Full);
    assert!((bin.current_level - 80.5).abs() < 1e-4);

    // Second tick: still full, no re-alert.
    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();
    assert_eq!(summary.alerts_raised, 0);
    assert_eq!(sink.alerts.len(), 1);
}

// ── Faulty sensors are frozen for the whole pass ─────────────

#[test]
fn faulty_sensor_never_advances_or_propagates() {
    let mut service = make_service();
    let faulty = FillSensor {
        state: OperationalState::Faulty,
        ..make_sensor("s-1", "b-1", 85.0)
    };
    let mut sensors = InMemorySensorStore::with_sensors([faulty]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 40.0)]);
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 0);
    assert_eq!(summary.bins_reconciled, 0);
    assert!(sink.alerts.is_empty());

    // Neither entity moved, even though the frozen measurement is above the
    // full threshold.
    assert_eq!(sensors.get("s-1").unwrap().measurement, 85.0);
    assert_eq!(bins.get("b-1").unwrap().status, BinStatus::Empty);
}

// ── Sensor pinned at the ceiling is skipped entirely ─────────

#[test]
fn sensor_at_exactly_100_is_skipped() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::with_sensors([make_sensor("s-1", "b-1", 100.0)]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 100.0)]);
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 0);
    assert_eq!(summary.bins_reconciled, 0);
    assert!(sensors.get("s-1").unwrap().last_reading.is_none());
}

// ── Tampered measurement is repaired and still reconciled ────

#[test]
fn out_of_range_measurement_clamps_and_alerts() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::with_sensors([make_sensor("s-1", "b-1", 117.0)]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 60.0)]);
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 1);
    assert_eq!(sensors.get("s-1").unwrap().measurement, 100.0);
    assert_eq!(bins.get("b-1").unwrap().status, BinStatus::Full);
    assert_eq!(sink.alerts, vec!["b-1"]);
}

// ── Orphaned sensor is absorbed, rest of the pass continues ──

#[test]
fn orphaned_update_does_not_abort_the_pass() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::with_sensors([
        make_sensor("s-1", "bin-decommissioned", 78.0),
        make_sensor("s-2", "b-2", 78.0),
    ]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-2", 78.0)]);
    let mut increments = FixedIncrements::new(&[2.5]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 2);
    assert_eq!(summary.orphaned_updates, 1);
    assert_eq!(summary.bins_reconciled, 1);
    // The provisioned bin still crossed and alerted.
    assert_eq!(sink.alerts, vec!["b-2"]);
}

// ── Empty fleet: tick is a safe no-op ────────────────────────

#[test]
fn empty_fleet_tick_is_a_noop() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::new();
    let mut bins = InMemoryBinStore::new();
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    let summary = service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();

    assert_eq!(summary.sensors_advanced, 0);
    assert_eq!(summary.bins_reconciled, 0);
    assert!(sink.alerts.is_empty());
}

// ── Store failure fails the whole tick loudly ────────────────

#[test]
fn unreachable_store_fails_the_tick() {
    let mut service = make_service();
    let mut sensors = UnreachableSensorStore;
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 40.0)]);
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    let result = service.tick(&mut sensors, &mut bins, &mut increments, &mut sink);

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert!(sink.alerts.is_empty());
}

// ── Re-arm across ticks through the full service path ────────

#[test]
fn alert_rearms_after_collection() {
    let mut service = make_service();
    let mut sensors = InMemorySensorStore::with_sensors([make_sensor("s-1", "b-1", 79.0)]);
    let mut bins = InMemoryBinStore::with_bins([make_bin("b-1", 79.0)]);
    let mut increments = FixedIncrements::new(&[2.0]);
    let mut sink = RecordingSink::new();

    // Tick 1: 79 -> 81, first alert.
    service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();
    assert_eq!(sink.alerts.len(), 1);

    // Collection crew empties the bin and resets the sensor out-of-band.
    let mut emptied = sensors.get("s-1").unwrap().clone();
    emptied.measurement = 5.0;
    sensors.save(emptied).unwrap();

    // Tick 2: 5 -> 7, bin drops to empty, no alert.
    service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();
    assert_eq!(sink.alerts.len(), 1);
    assert_eq!(bins.get("b-1").unwrap().status, BinStatus::Empty);

    // Refill to the boundary, then cross again: second alert.
    let mut refilled = sensors.get("s-1").unwrap().clone();
    refilled.measurement = 79.0;
    sensors.save(refilled).unwrap();
    service
        .tick(&mut sensors, &mut bins, &mut increments, &mut sink)
        .unwrap();
    assert_eq!(sink.alerts.len(), 2);
}
