//! The `Sink` port: persists a carved item once it has passed the `Filter`.

/// Implemented by embedders (file system writer, in-memory collector for
/// tests). Responsible for collision-safe naming. A failed emission
/// returns `Err` with a human-readable reason; the coordinator turns that
/// into a `CoreError::SinkEmit`, logs it at error level, and records it in
/// `SessionStats::sink_errors` rather than aborting the session.
pub trait Sink {
    fn emit(&mut self, name: &str, bytes: &[u8]) -> Result<(), String>;
}

/// An in-memory `Sink` used by tests and by callers who want the carved
/// items back directly rather than written to storage. Never fails.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub items: Vec<(String, Vec<u8>)>,
}

impl Sink for CollectingSink {
    fn emit(&mut self, name: &str, bytes: &[u8]) -> Result<(), String> {
        self.items.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
