//! PNG extractor: read up to 64 KiB and locate the `IEND` chunk tag.

use crate::reader::RandomReader;
use crate::types::ByteRange;

const WINDOW: u64 = 64 * 1024;
const IEND: &[u8; 4] = b"IEND";

pub fn extract(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<ByteRange> {
    let want = WINDOW.min(ceiling) as usize;
    let data = reader.read_at(start, want).ok()?;

    let pos = data
        .windows(IEND.len())
        .position(|w| w == IEND)?;

    // IEND is 12 bytes total: 4-byte length, 4-byte type, 4-byte CRC. `pos`
    // points at the type field, which starts 4 bytes into the chunk.
    let end = (pos as u64 + 8).min(data.len() as u64);
    Some(ByteRange::new(start, start + end))
}
