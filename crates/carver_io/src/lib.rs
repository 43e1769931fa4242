//! I/O adapters implementing `carver_core::RandomReader` over a plain file
//! and over a memory-mapped file.
//!
//! Use [`Reader::new`] to get the best available reader for a path: it
//! tries `MmapReader` first and falls back to `FileReader` for sources
//! that refuse to mmap (some block devices).

mod error;
mod file_reader;
mod mmap_reader;

pub use error::{IoAdapterError, Result};
pub use file_reader::FileReader;
pub use mmap_reader::MmapReader;

use std::path::Path;

use carver_core::RandomReader;

pub enum Reader {
    Mmap(MmapReader),
    File(FileReader),
}

impl Reader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        match MmapReader::new(path_ref) {
            Ok(r) => Ok(Reader::Mmap(r)),
            Err(_) => Ok(Reader::File(FileReader::new(path_ref)?)),
        }
    }

    #[must_use]
    pub fn is_mmap(&self) -> bool {
        matches!(self, Reader::Mmap(_))
    }
}

impl RandomReader for Reader {
    fn size(&self) -> u64 {
        match self {
            Reader::Mmap(r) => r.size(),
            Reader::File(r) => r.size(),
        }
    }

    fn read_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        match self {
            Reader::Mmap(r) => r.read_at(offset, len),
            Reader::File(r) => r.read_at(offset, len),
        }
    }
}
