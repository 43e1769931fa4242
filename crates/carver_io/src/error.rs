use thiserror::Error;

/// Errors raised while opening a reader adapter, before any `RandomReader`
/// call is made.
#[derive(Debug, Error)]
pub enum IoAdapterError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot memory-map {path}: {reason}")]
    MmapUnavailable { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IoAdapterError>;
