//! BinWatch service binary.
//!
//! Bootstraps the simulation loop: logger, configuration, fleet seeding,
//! adapter wiring, then hands control to the fixed-interval scheduler for
//! the lifetime of the process.
//!
//! ```sh
//! RUST_LOG=info binwatch --interval-secs 10
//! binwatch --config sim.json --fleet fleet.json --seed 42
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Deserialize;

use binwatch::adapters::increment::UniformIncrement;
use binwatch::adapters::log_sink::LogAlertSink;
use binwatch::adapters::memory::{InMemoryBinStore, InMemorySensorStore};
use binwatch::config::SimConfig;
use binwatch::model::{BinStatus, FillSensor, OperationalState, SensorColor, WasteBin};
use binwatch::scheduler::Scheduler;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON simulation config; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON fleet file (bins + sensors); a demo fleet is seeded when omitted.
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Override the tick interval from the config.
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Pin the increment PRNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

/// Provisioning payload for the in-memory stores.
#[derive(Debug, Deserialize)]
struct FleetFile {
    bins: Vec<WasteBin>,
    sensors: Vec<FillSensor>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("binwatch v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(args.config.as_deref())?;
    if let Some(secs) = args.interval_secs {
        config.tick_interval_secs = secs;
    }

    let (bins, sensors) = match args.fleet.as_deref() {
        Some(path) => load_fleet(path)?,
        None => demo_fleet(&config),
    };
    info!(
        "fleet: {} bins, {} sensors, tick every {}s",
        bins.len(),
        sensors.len(),
        config.tick_interval_secs
    );

    let sensors = InMemorySensorStore::with_sensors(sensors);
    let bins = InMemoryBinStore::with_bins(bins);
    let increments = match args.seed {
        Some(seed) => UniformIncrement::seeded(seed),
        None => UniformIncrement::new(),
    };

    let scheduler = Scheduler::new(&config, sensors, bins, increments, LogAlertSink::new());
    scheduler.run()
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn load_fleet(path: &Path) -> Result<(Vec<WasteBin>, Vec<FillSensor>)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading fleet file {}", path.display()))?;
    let fleet: FleetFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing fleet file {}", path.display()))?;
    Ok((fleet.bins, fleet.sensors))
}

/// A small mixed fleet for demo runs: levels spread across the status bands
/// plus one faulty sensor and one orphaned sensor to exercise the skip
/// paths.
fn demo_fleet(config: &SimConfig) -> (Vec<WasteBin>, Vec<FillSensor>) {
    let seeds: &[(&str, f32, f32)] = &[
        ("north-01", 240.0, 12.0),
        ("north-02", 240.0, 55.0),
        ("central-01", 660.0, 78.0),
        ("central-02", 660.0, 91.0),
        ("harbour-01", 1100.0, 34.0),
    ];

    let mut bins = Vec::new();
    let mut sensors = Vec::new();

    for (name, capacity, level) in seeds {
        let bin_id = format!("bin-{name}");
        bins.push(WasteBin {
            current_level: *level,
            status: BinStatus::for_level(
                *level,
                config.bin_half_full_threshold,
                config.bin_full_threshold,
            ),
            ..WasteBin::new(bin_id.clone(), *capacity)
        });
        sensors.push(FillSensor {
            measurement: *level,
            color: SensorColor::for_measurement(
                *level,
                config.sensor_warning_threshold,
                config.sensor_critical_threshold,
            ),
            ..FillSensor::new(format!("snr-{name}"), bin_id)
        });
    }

    // A dead device: never advanced, never propagated.
    sensors.push(FillSensor {
        state: OperationalState::Faulty,
        measurement: 47.0,
        ..FillSensor::new("snr-harbour-02", "bin-harbour-02")
    });

    // A sensor whose bin was decommissioned: reconciliation drops its
    // updates without aborting the pass.
    sensors.push(FillSensor {
        measurement: 20.0,
        ..FillSensor::new("snr-ghost", "bin-decommissioned")
    });

    (bins, sensors)
}
