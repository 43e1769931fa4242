//! `Sink` implementation that writes carved items to a directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use carver_core::Sink;

/// Writes each carved item under `carved_files/` inside the given output
/// directory. `synth_name` already embeds a timestamp, offset, and
/// per-run counter, so collisions are only possible across repeated runs
/// within the same second against a directory from a previous run; in
/// that case a numeric suffix is appended before the extension. Write
/// failures are returned to the coordinator rather than logged here, per
/// the `Sink` contract.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn collision_free_path(&self, name: &str) -> PathBuf {
        let candidate = self.dir.join(name);
        if !candidate.exists() {
            return candidate;
        }

        let path = Path::new(name);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
        let ext = path.extension().and_then(|s| s.to_str());

        for suffix in 1u32.. {
            let renamed = match ext {
                Some(ext) => format!("{stem}_{suffix}.{ext}"),
                None => format!("{stem}_{suffix}"),
            };
            let candidate = self.dir.join(renamed);
            if !candidate.exists() {
                return candidate;
            }
        }
        unreachable!("u32 suffix space exhausted")
    }
}

impl Sink for FileSink {
    fn emit(&mut self, name: &str, bytes: &[u8]) -> Result<(), String> {
        let path = self.collision_free_path(name);
        File::create(&path)
            .and_then(|file| {
                let mut writer = BufWriter::with_capacity(131_072, file);
                writer.write_all(bytes)?;
                writer.flush()
            })
            .map_err(|e| format!("{}: {e}", path.display()))
    }
}
