//! JPEG extractor: read forward in 8 KiB slices until the EOI marker.

use crate::reader::RandomReader;
use crate::types::ByteRange;

const SLICE_SIZE: usize = 8 * 1024;
const EOI: [u8; 2] = [0xFF, 0xD9];

pub fn extract(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<ByteRange> {
    let mut scanned = 0u64;
    // Carries the previous slice's last byte so an EOI split across a
    // slice boundary is still found.
    let mut carry: Option<u8> = None;

    while scanned < ceiling {
        let want = (SLICE_SIZE as u64).min(ceiling - scanned) as usize;
        let chunk = reader.read_at(start + scanned, want).ok()?;
        if chunk.is_empty() {
            return None;
        }

        if carry == Some(EOI[0]) && chunk[0] == EOI[1] {
            return Some(ByteRange::new(start, start + scanned + 1));
        }

        if let Some(pos) = find_eoi(&chunk) {
            return Some(ByteRange::new(start, start + scanned + pos as u64 + 2));
        }

        carry = chunk.last().copied();
        let got_all = chunk.len() == want;
        scanned += chunk.len() as u64;

        if !got_all {
            // Reader gave us less than we asked for: EOF.
            return None;
        }
    }

    None
}

fn find_eoi(data: &[u8]) -> Option<usize> {
    data.windows(2).position(|w| w == EOI)
}
