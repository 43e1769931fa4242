//! `FormatExtractor` dispatch: given a reader, a start offset, and a size
//! ceiling, determine the carved extent for one format tag.

mod cfb;
mod generic;
mod jpeg;
mod mp4;
mod pdf;
mod png;
mod riff;
mod zip;

use crate::reader::RandomReader;
use crate::types::{ByteRange, FormatTag};

/// Behavioural knobs that affect individual extractors. Kept in the core
/// so the coordinator can pass one config object through without each
/// extractor needing its own constructor argument list.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Replicates the original tool's early-terminate-at-`mdat` MP4
    /// behaviour when `true`. Default `false`: walk to `ceiling`/EOF, per
    /// the redesigned spec (see DESIGN.md, "MP4 early termination").
    pub mp4_stop_at_mdat: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            mp4_stop_at_mdat: false,
        }
    }
}

/// An extractor's verdict: either a carved extent, or "unrecognised"
/// meaning the container didn't validate and the coordinator should treat
/// this hit as a false positive.
pub type ExtractResult = Option<ByteRange>;

/// Dispatches to the extractor for `format`, re-tagging RIFF hits to
/// `Wav` when the form type says so (see `riff::extract`).
///
/// Returns the possibly-retagged format alongside the extracted range, so
/// the coordinator can synthesise the right name and extension.
pub fn extract(
    reader: &mut dyn RandomReader,
    format: FormatTag,
    start: u64,
    ceiling: u64,
    config: &ExtractConfig,
) -> (FormatTag, ExtractResult) {
    match format {
        FormatTag::Jpeg => (format, jpeg::extract(reader, start, ceiling)),
        FormatTag::Png => (format, png::extract(reader, start, ceiling)),
        FormatTag::Pdf => (format, pdf::extract(reader, start, ceiling)),
        FormatTag::Mp4 | FormatTag::Mov => (format, mp4::extract(reader, start, ceiling, config)),
        FormatTag::Avi => riff::extract(reader, start, ceiling),
        FormatTag::Zip => (format, zip::extract(reader, start, ceiling)),
        FormatTag::Cfb => (format, cfb::extract(reader, start, ceiling)),
        _ => (format, generic::extract(reader, start, ceiling)),
    }
}
