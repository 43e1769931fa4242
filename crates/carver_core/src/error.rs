//! Error taxonomy for the carving core.
//!
//! Severities follow the component design: `FatalSetupError` aborts a
//! session and is the only variant the coordinator returns as `Err`; the
//! rest are recorded via `tracing` and session statistics, never by
//! unwinding the main loop.

use thiserror::Error;

/// Errors that can escape the carving core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The source could not be opened or sized at all. Fatal: the caller
    /// gets this back from `CarveCoordinator::run`.
    #[error("failed to set up carving session: {0}")]
    FatalSetup(String),

    /// A read failed partway through a scan. Non-fatal: logged at `warn`
    /// and the coordinator advances past the offending chunk.
    #[error("transient read error at offset {offset}: {source}")]
    TransientRead {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// An extractor found internally inconsistent container structure.
    /// Non-fatal: treated as "unrecognised" by the coordinator.
    #[error("malformed container at offset {offset}: {reason}")]
    MalformedContainer { offset: u64, reason: String },

    /// The sink failed to persist a carved item. Non-fatal: logged and the
    /// session continues.
    #[error("sink failed to emit {name}: {reason}")]
    SinkEmit { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
