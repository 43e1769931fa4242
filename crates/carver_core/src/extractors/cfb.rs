//! CFB (Compound File Binary, legacy Office) extractor: conservative
//! recovery. A full walker would need to parse the FAT/miniFAT sector
//! chains; this returns the ceiling-bounded span, which is guaranteed to
//! contain a complete document when one exists.

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
