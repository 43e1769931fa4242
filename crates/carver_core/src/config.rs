//! `CarveConfig`: the knobs a `CarveCoordinator` session is constructed
//! with. No external config-file format is mandated; embedders build one
//! programmatically or from CLI flags.

use crate::extractors::ExtractConfig;
use crate::scanner::DEFAULT_CHUNK_SIZE;

#[derive(Debug, Clone)]
pub struct CarveConfig {
    /// Bytes read per scanner refill. Larger values trade memory for fewer
    /// `read_at` calls.
    pub chunk_size: usize,
    /// Offset to start scanning from, skipping everything before it.
    pub start_offset: u64,
    pub extract: ExtractConfig,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            start_offset: 0,
            extract: ExtractConfig::default(),
        }
    }
}
