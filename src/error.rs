//! Unified error types for the BinWatch simulation service.
//!
//! The simulation core is deliberately hard to fail: missing bins are
//! absorbed where they occur and out-of-range measurements are repaired on
//! the next advance. What remains is the backing stores, and those funnel
//! into a single [`StoreError`] so the tick loop's handling stays uniform.

use thiserror::Error;

/// Failure of a backing store read or write.
///
/// Store errors are fatal for the pass that hit them: they propagate out of
/// `tick()` uncaught and the fixed-interval scheduler is the retry
/// mechanism. There is no persisted retry queue and no backoff.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A record came back in a shape the domain model cannot accept.
    #[error("corrupt {entity} record '{id}': {reason}")]
    Corrupt {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

/// Store-facing `Result` alias used throughout the port traits.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
