//! Plain-file `RandomReader`: positioned reads via `std::fs::File`, no
//! unsafe code. Works for any path, including block devices that refuse
//! to mmap.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use carver_core::RandomReader;

use crate::error::{IoAdapterError, Result};

pub struct FileReader {
    file: File,
    size: u64,
}

impl FileReader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(false)
            .open(path_ref)
            .map_err(|source| IoAdapterError::Open {
                path: path_ref.display().to_string(),
                source,
            })?;

        #[cfg(target_os = "linux")]
        {
            use rustix::fs::{fadvise, Advice};
            let _ = fadvise(&file, 0, None, Advice::Sequential);
            let _ = fadvise(&file, 0, None, Advice::NoReuse);
        }

        let size = file
            .seek(SeekFrom::End(0))
            .map_err(|source| IoAdapterError::Open {
                path: path_ref.display().to_string(),
                source,
            })?;
        file.seek(SeekFrom::Start(0)).ok();

        Ok(Self { file, size })
    }
}

impl RandomReader for FileReader {
    fn size(&self) -> u64 {
        self.size
    }

    fn read_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(offset))?;
        let mut buffer = vec![0u8; len];
        let mut total = 0;
        loop {
            match self.file.read(&mut buffer[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
            if total == len {
                break;
            }
        }
        buffer.truncate(total);
        Ok(buffer)
    }
}
