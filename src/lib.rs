//! BinWatch simulation service library.
//!
//! The fill-level sensor simulation and alerting core of the municipal
//! waste-management platform, exposed as a library for integration testing
//! and for the service binary.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  InMemorySensorStore   InMemoryBinStore                  │
//! │  LogAlertSink          UniformIncrement                  │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        SimulationService (pure logic)          │      │
//! │  │  SensorAdvancer · BinReconciler                │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  Scheduler (fixed-interval, single-flight)               │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod advancer;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod reconciler;
pub mod scheduler;
