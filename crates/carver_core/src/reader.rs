//! The `RandomReader` port: the only way the core touches raw bytes.
//!
//! Implementations live outside this crate (see `carver_io`) so the core
//! stays free of filesystem, mmap, or device-specific concerns.

/// A positioned-read source of bytes: a disk image, a block device, or a
/// forensic container, already unwrapped to a flat byte address space by
/// the embedder.
pub trait RandomReader {
    /// Total addressable size in bytes. Constant for the session.
    fn size(&self) -> u64;

    /// Reads up to `len` bytes starting at `offset`. A short read is only
    /// valid at end of input; a bad sector must be signalled as an
    /// `io::Error`, never silently zero-filled.
    fn read_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>>;

    /// Releases any resources held by the reader. Idempotent.
    fn close(&mut self) {}
}

/// An in-memory `RandomReader`, used throughout the core's own test suite
/// and available to embedders for small inputs.
pub struct SliceReader {
    data: Vec<u8>,
}

impl SliceReader {
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl RandomReader for SliceReader {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        let start = offset.min(self.data.len() as u64) as usize;
        let end = start.saturating_add(len).min(self.data.len());
        Ok(self.data[start..end].to_vec())
    }
}
