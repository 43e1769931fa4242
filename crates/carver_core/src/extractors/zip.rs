//! ZIP family extractor: the directory lives at the end, so carving means
//! finding the End Of Central Directory record and reading its pointers
//! back into the archive.

use crate::reader::RandomReader;
use crate::types::ByteRange;

const EOCD_WINDOW: u64 = 64 * 1024;
const EOCD_SIG: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];
const EOCD_FIXED_LEN: usize = 22;

pub fn extract(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<ByteRange> {
    let source_size = reader.size();
    let search_end = start.saturating_add(ceiling).min(source_size);
    // Clamp the window so it never starts before `start`, per the resolved
    // Open Question on short archives.
    let window_len = EOCD_WINDOW.min(search_end.saturating_sub(start));
    let window_start = search_end - window_len;

    let window = reader.read_at(window_start, window_len as usize).ok()?;
    let eocd_idx = window
        .windows(EOCD_SIG.len())
        .rposition(|w| w == EOCD_SIG)?;

    if eocd_idx + EOCD_FIXED_LEN > window.len() {
        return None;
    }
    let record = &window[eocd_idx..eocd_idx + EOCD_FIXED_LEN];
    let central_dir_size = u32::from_le_bytes(record[12..16].try_into().unwrap()) as u64;
    let central_dir_offset = u32::from_le_bytes(record[16..20].try_into().unwrap()) as u64;
    let comment_length = u16::from_le_bytes(record[20..22].try_into().unwrap()) as u64;

    let end = start
        .saturating_add(central_dir_offset)
        .saturating_add(central_dir_size)
        .saturating_add(22)
        .saturating_add(comment_length);
    Some(ByteRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::SliceReader;

    fn eocd_record(central_dir_offset: u32, central_dir_size: u32, comment: &[u8]) -> Vec<u8> {
        let mut v = EOCD_SIG.to_vec();
        v.extend_from_slice(&0u16.to_le_bytes()); // disk number
        v.extend_from_slice(&0u16.to_le_bytes()); // disk with central dir
        v.extend_from_slice(&1u16.to_le_bytes()); // entries on this disk
        v.extend_from_slice(&1u16.to_le_bytes()); // total entries
        v.extend_from_slice(&central_dir_size.to_le_bytes());
        v.extend_from_slice(&central_dir_offset.to_le_bytes());
        v.extend_from_slice(&(comment.len() as u16).to_le_bytes());
        v.extend_from_slice(comment);
        v
    }

    #[test]
    fn finds_eocd_and_computes_archive_end() {
        let local_and_central = vec![0u8; 100];
        let eocd = eocd_record(80, 20, &[]);
        let mut data = local_and_central;
        data.extend_from_slice(&eocd);
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);

        let range = extract(&mut reader, 0, total_len).unwrap();
        assert_eq!(range.end, total_len);
    }

    #[test]
    fn includes_trailing_comment() {
        let local_and_central = vec![0u8; 50];
        let comment = b"hello";
        let eocd = eocd_record(30, 20, comment);
        let mut data = local_and_central;
        data.extend_from_slice(&eocd);
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);

        let range = extract(&mut reader, 0, total_len).unwrap();
        assert_eq!(range.end, total_len);
    }

    #[test]
    fn no_eocd_is_unrecognised() {
        let mut reader = SliceReader::new(vec![0u8; 1000]);
        assert!(extract(&mut reader, 0, 1000).is_none());
    }

    #[test]
    fn short_archive_clamps_window_to_start() {
        // Archive smaller than the 64 KiB search window: the window must
        // not start before `start`.
        let eocd = eocd_record(0, 0, &[]);
        let total_len = eocd.len() as u64;
        let mut reader = SliceReader::new(eocd);
        let range = extract(&mut reader, 0, total_len).unwrap();
        assert_eq!(range.end, 22);
    }
}
