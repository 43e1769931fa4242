//! Zero-copy `RandomReader` over a memory-mapped file. Preferred over
//! `FileReader` on regular files; may fail on some block devices, in
//! which case the caller should fall back.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;

use carver_core::RandomReader;
use memmap2::Mmap;

use crate::error::{IoAdapterError, Result};

pub struct MmapReader {
    mmap: Mmap,
    size: u64,
}

impl MmapReader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let mut file = File::open(path_ref).map_err(|source| IoAdapterError::Open {
            path: path_ref.display().to_string(),
            source,
        })?;

        let size = file
            .seek(SeekFrom::End(0))
            .map_err(|source| IoAdapterError::Open {
                path: path_ref.display().to_string(),
                source,
            })?;

        if size == 0 {
            return Err(IoAdapterError::MmapUnavailable {
                path: path_ref.display().to_string(),
                reason: "cannot mmap an empty file".into(),
            });
        }

        // SAFETY: read-only mapping; the caller is expected not to modify
        // the underlying file during the session (forensic read-only use).
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| IoAdapterError::MmapUnavailable {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;

        if mmap.is_empty() {
            return Err(IoAdapterError::MmapUnavailable {
                path: path_ref.display().to_string(),
                reason: "mmap returned an empty mapping (block device not supported)".into(),
            });
        }

        #[cfg(target_os = "linux")]
        {
            use memmap2::Advice;
            let _ = mmap.advise(Advice::Sequential);
            let _ = mmap.advise(Advice::WillNeed);
        }

        Ok(Self { mmap, size })
    }

    #[must_use]
    pub fn slice(&self, offset: u64, len: usize) -> Option<&[u8]> {
        let start = offset as usize;
        if start >= self.mmap.len() {
            return None;
        }
        let end = start.saturating_add(len).min(self.mmap.len());
        Some(&self.mmap[start..end])
    }
}

impl RandomReader for MmapReader {
    fn size(&self) -> u64 {
        self.size
    }

    fn read_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        Ok(self.slice(offset, len).map(<[u8]>::to_vec).unwrap_or_default())
    }
}
