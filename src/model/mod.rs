//! Domain entities for the simulation core.
//!
//! Both entities are provisioned by the platform's management layer; this
//! subsystem only ever round-trips read-modify-write on the fields the
//! simulation owns (`measurement`/`color`/`last_reading` on sensors,
//! `current_level`/`status`/`last_updated` on bins) and deletes nothing.

pub mod bin;
pub mod sensor;

pub use bin::{BinStatus, WasteBin};
pub use sensor::{FillSensor, OperationalState, SensorColor};
