//! Generic extractor: the fallback for every format whose size ceiling is
//! the whole contract (GIF, BMP, TIFF, MP3, AAC, FLAC, RAR4, RAR5, 7z,
//! HTML, CSS, JS, PE). No terminator is sought; trailing noise is expected.

use crate::reader::RandomReader;
use crate::types::ByteRange;

pub fn extract(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<ByteRange> {
    let source_size = reader.size();
    if start >= source_size {
        return None;
    }
    let end = start.saturating_add(ceiling).min(source_size);
    Some(ByteRange::new(start, end))
}
