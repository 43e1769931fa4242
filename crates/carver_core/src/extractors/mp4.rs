//! MP4/QuickTime extractor: walk the ISO base media box tree.

use crate::extractors::ExtractConfig;
use crate::reader::RandomReader;
use crate::types::ByteRange;

pub fn extract(
    reader: &mut dyn RandomReader,
    start: u64,
    ceiling: u64,
    config: &ExtractConfig,
) -> Option<ByteRange> {
    let source_size = reader.size();
    let stop_at = start.saturating_add(ceiling).min(source_size);

    let mut pos = start;
    while pos < stop_at {
        let header = reader.read_at(pos, 8).ok()?;
        if header.len() < 8 {
            break;
        }
        let size32 = u32::from_be_bytes(header[0..4].try_into().unwrap()) as u64;
        let box_type = &header[4..8];

        let (next_pos, is_terminal_size) = if size32 == 0 {
            (stop_at, true)
        } else if size32 == 1 {
            let ext = reader.read_at(pos + 8, 8).ok()?;
            if ext.len() < 8 {
                return None;
            }
            let largesize = u64::from_be_bytes(ext[0..8].try_into().unwrap());
            (pos + largesize, false)
        } else {
            (pos + size32, false)
        };

        if is_terminal_size {
            return Some(ByteRange::new(start, stop_at));
        }

        if next_pos <= pos {
            // Zero-size or corrupt box: no forward progress possible.
            return None;
        }

        let is_mdat = box_type == b"mdat";
        pos = next_pos.min(stop_at);

        if is_mdat && config.mp4_stop_at_mdat {
            return Some(ByteRange::new(start, pos));
        }
    }

    Some(ByteRange::new(start, pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::SliceReader;

    fn box_bytes(size: u32, kind: &[u8; 4], payload_len: usize) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&size.to_be_bytes());
        v.extend_from_slice(kind);
        v.extend(std::iter::repeat(0u8).take(payload_len));
        v
    }

    #[test]
    fn walks_ftyp_then_moov_then_mdat() {
        let mut data = box_bytes(16, b"ftyp", 8);
        data.extend(box_bytes(16, b"moov", 8));
        data.extend(box_bytes(1000, b"mdat", 992));
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);
        let config = ExtractConfig::default();
        let range = extract(&mut reader, 0, 30_000_000, &config).unwrap();
        assert_eq!(range.end, total_len);
    }

    #[test]
    fn stop_at_mdat_when_configured() {
        let mut data = box_bytes(16, b"ftyp", 8);
        let mdat_offset = data.len() as u64;
        data.extend(box_bytes(1000, b"mdat", 992));
        data.extend_from_slice(b"trailing junk after mdat consumed by walker");
        let mut reader = SliceReader::new(data);
        let config = ExtractConfig {
            mp4_stop_at_mdat: true,
        };
        let range = extract(&mut reader, 0, 30_000_000, &config).unwrap();
        assert_eq!(range.end, mdat_offset);
    }

    #[test]
    fn size_one_uses_extended_largesize() {
        let mut data = vec![0u8, 0, 0, 1];
        data.extend_from_slice(b"moov");
        data.extend_from_slice(&24u64.to_be_bytes());
        data.extend(std::iter::repeat(0u8).take(16));
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);
        let config = ExtractConfig::default();
        let range = extract(&mut reader, 0, 30_000_000, &config).unwrap();
        assert_eq!(range.end, total_len);
    }

    #[test]
    fn size_zero_runs_to_ceiling() {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(b"mdat");
        data.extend(std::iter::repeat(0u8).take(100));
        let mut reader = SliceReader::new(data);
        let config = ExtractConfig::default();
        let range = extract(&mut reader, 0, 50, &config).unwrap();
        assert_eq!(range.end, 50);
    }

    #[test]
    fn zero_progress_box_is_unrecognised() {
        // size == 1 with a largesize of 0 makes no forward progress: corrupt
        // input, not EOF.
        let mut data = vec![0u8, 0, 0, 1];
        data.extend_from_slice(b"quit");
        data.extend_from_slice(&0u64.to_be_bytes());
        let mut reader = SliceReader::new(data);
        let config = ExtractConfig::default();
        assert!(extract(&mut reader, 0, 30_000_000, &config).is_none());
    }
}
