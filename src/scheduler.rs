//! Fixed-interval tick loop.
//!
//! Drives one simulation pass per tick for the lifetime of the process.
//! Passes never overlap: the pass state sits behind a mutex, and a trigger
//! that arrives while a pass is still running is **skipped**, not queued.
//!
//! ```text
//! ┌──────────────┐    try_lock ok    ┌───────────────────────────┐
//! │  interval /  │ ────────────────▶ │ SimulationService::tick() │
//! │ manual tick()│                   └───────────────────────────┘
//! │   trigger    │ ─── lock held ──▶   skip (counted, warned)
//! └──────────────┘
//! ```
//!
//! A failed pass (store error) is logged and dropped; the next scheduled
//! tick retries from scratch. There is no cancellation: [`Scheduler::run`]
//! never returns.

use std::sync::Mutex;
use std::sync::TryLockError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, warn};

use crate::app::ports::{AlertSink, BinStore, IncrementSource, SensorStore};
use crate::app::service::{SimulationService, TickSummary};
use crate::config::SimConfig;

/// Everything one pass needs, locked together so a pass is all-or-nothing.
struct Pass<S, B, R, A> {
    service: SimulationService,
    sensors: S,
    bins: B,
    increments: R,
    alerts: A,
}

/// Owns the simulation pass and exposes the parameterless [`tick`] entry
/// point plus the blocking [`run`] loop.
///
/// [`tick`]: Scheduler::tick
/// [`run`]: Scheduler::run
pub struct Scheduler<S, B, R, A> {
    pass: Mutex<Pass<S, B, R, A>>,
    period: Duration,
    ticks_skipped: AtomicU64,
}

impl<S, B, R, A> Scheduler<S, B, R, A>
where
    S: SensorStore,
    B: BinStore,
    R: IncrementSource,
    A: AlertSink,
{
    pub fn new(config: &SimConfig, sensors: S, bins: B, increments: R, alerts: A) -> Self {
        Self {
            pass: Mutex::new(Pass {
                service: SimulationService::new(config),
                sensors,
                bins,
                increments,
                alerts,
            }),
            period: Duration::from_secs(config.tick_interval_secs),
            ticks_skipped: AtomicU64::new(0),
        }
    }

    /// Trigger one pass now.
    ///
    /// Returns the pass summary, or `None` when the trigger was skipped
    /// because a pass was still in flight, or when the pass failed on a
    /// store error. Calling with no eligible sensors is a safe no-op.
    pub fn tick(&self) -> Option<TickSummary> {
        let mut pass = match self.pass.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                // Single-flight guard: never overlap passes on the same fleet.
                self.ticks_skipped.fetch_add(1, Ordering::Relaxed);
                warn!("tick overlapped a running pass, skipping");
                return None;
            }
            // A panicked pass poisons the lock; the stores themselves are
            // still usable, so keep ticking.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let Pass {
            service,
            sensors,
            bins,
            increments,
            alerts,
        } = &mut *pass;

        match service.tick(sensors, bins, increments, alerts) {
            Ok(summary) => Some(summary),
            Err(e) => {
                // Fatal for this tick only; the next interval retries.
                error!("simulation pass failed: {e}");
                None
            }
        }
    }

    /// Run the loop forever at the configured cadence.
    ///
    /// The cadence is anchored to absolute deadlines, so a slow pass does
    /// not drift the schedule; it just eats into the following sleep.
    pub fn run(&self) -> ! {
        let mut next = Instant::now() + self.period;
        loop {
            if let Some(wait) = next.checked_duration_since(Instant::now()) {
                thread::sleep(wait);
            }
            next += self.period;
            self.tick();
        }
    }

    /// Triggers dropped because a pass was still in flight.
    pub fn ticks_skipped(&self) -> u64 {
        self.ticks_skipped.load(Ordering::Relaxed)
    }
}
