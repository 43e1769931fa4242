//! PDF extractor: scan forward in 128 KiB windows up to `ceiling` and
//! locate the *last* `%%EOF` marker seen across the whole span.
//!
//! Incrementally-updated PDFs append additional `%%EOF` trailers; the last
//! one marks the true end of the document, and it may lie well past the
//! first window if the document was updated many times.

use crate::reader::RandomReader;
use crate::types::ByteRange;

const WINDOW: u64 = 128 * 1024;
const EOF_MARKER: &[u8; 5] = b"%%EOF";
const OVERLAP: u64 = EOF_MARKER.len() as u64 - 1;

pub fn extract(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<ByteRange> {
    let mut scanned = 0u64;
    let mut last_match: Option<u64> = None;

    while scanned < ceiling {
        let window_start = scanned.saturating_sub(OVERLAP.min(scanned));
        let want = WINDOW.min(ceiling - window_start) as usize;
        let data = reader.read_at(start + window_start, want).ok()?;
        if data.is_empty() {
            break;
        }

        if let Some(pos) = data.windows(EOF_MARKER.len()).rposition(|w| w == *EOF_MARKER) {
            last_match = Some(window_start + pos as u64);
        }

        let got_all = data.len() == want;
        scanned = window_start + data.len() as u64;
        if !got_all {
            break;
        }
    }

    let last = last_match?;
    let end = last + EOF_MARKER.len() as u64;
    Some(ByteRange::new(start, start + end))
}
