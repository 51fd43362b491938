//! Application core — pure simulation logic, zero I/O.
//!
//! This module contains the business rules of the BinWatch loop: sensor
//! advancement, bin reconciliation, and alert-transition detection. All
//! interaction with storage and the alert pipeline happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! a live document store.

pub mod ports;
pub mod service;
