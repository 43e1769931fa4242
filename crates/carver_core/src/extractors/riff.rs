//! RIFF extractor: AVI and WAV share a container, disambiguated by the
//! 4-byte form type that follows the `RIFF` + size header.

use crate::reader::RandomReader;
use crate::types::{ByteRange, FormatTag};

use super::ExtractResult;

const RIFF_HEADER_LEN: u64 = 12; // "RIFF" + size(4) + form type(4)

pub fn extract(
    reader: &mut dyn RandomReader,
    start: u64,
    ceiling: u64,
) -> (FormatTag, ExtractResult) {
    match walk(reader, start, ceiling) {
        Some((form, range)) => (form, Some(range)),
        None => (FormatTag::Avi, None),
    }
}

fn walk(reader: &mut dyn RandomReader, start: u64, ceiling: u64) -> Option<(FormatTag, ByteRange)> {
    let header = reader.read_at(start, RIFF_HEADER_LEN as usize).ok()?;
    if header.len() < RIFF_HEADER_LEN as usize || &header[0..4] != b"RIFF" {
        return None;
    }

    let form_type = &header[8..12];
    let tag = match form_type {
        b"AVI " => FormatTag::Avi,
        b"WAVE" => FormatTag::Wav,
        _ => return None,
    };

    let source_size = reader.size();
    let stop_at = start.saturating_add(ceiling).min(source_size);
    let mut cursor = start + RIFF_HEADER_LEN;

    while cursor + 8 <= stop_at {
        let chunk_header = reader.read_at(cursor, 8).ok()?;
        if chunk_header.len() < 8 {
            break;
        }
        let chunk_size = u32::from_le_bytes(chunk_header[4..8].try_into().unwrap()) as u64;
        let padded_size = chunk_size + (chunk_size & 1);

        // LIST chunks nest a 4-byte list type then child chunks, but
        // `chunk_size` already bounds the whole list so no recursion is
        // needed to stay within it.
        let next = cursor + 8 + padded_size;

        if next <= cursor {
            return None;
        }
        cursor = next.min(stop_at);
    }

    Some((tag, ByteRange::new(start, cursor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::SliceReader;

    fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(id);
        v.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        v.extend_from_slice(payload);
        if payload.len() % 2 == 1 {
            v.push(0);
        }
        v
    }

    fn riff_wrap(form: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut v = b"RIFF".to_vec();
        v.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
        v.extend_from_slice(form);
        v.extend_from_slice(body);
        v
    }

    #[test]
    fn recognises_wave_form_and_retags() {
        let fmt_chunk = chunk(b"fmt ", &[0u8; 16]);
        let data_chunk = chunk(b"data", &[1, 2, 3, 4]);
        let mut body = fmt_chunk;
        body.extend(data_chunk);
        let data = riff_wrap(b"WAVE", &body);
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);

        let (tag, range) = extract(&mut reader, 0, 30_000_000);
        assert_eq!(tag, FormatTag::Wav);
        let range = range.unwrap();
        assert_eq!(range.end, total_len);
    }

    #[test]
    fn recognises_avi_form() {
        let data = riff_wrap(b"AVI ", &chunk(b"hdrl", &[0u8; 8]));
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);

        let (tag, range) = extract(&mut reader, 0, 30_000_000);
        assert_eq!(tag, FormatTag::Avi);
        assert_eq!(range.unwrap().end, total_len);
    }

    #[test]
    fn unknown_form_type_is_unrecognised() {
        let data = riff_wrap(b"XXXX", &chunk(b"data", &[0u8; 4]));
        let mut reader = SliceReader::new(data);
        let (_, range) = extract(&mut reader, 0, 30_000_000);
        assert!(range.is_none());
    }

    #[test]
    fn odd_sized_chunk_is_padded() {
        let data = riff_wrap(b"WAVE", &chunk(b"data", &[1, 2, 3]));
        let total_len = data.len() as u64;
        let mut reader = SliceReader::new(data);
        let (_, range) = extract(&mut reader, 0, 30_000_000);
        assert_eq!(range.unwrap().end, total_len);
    }
}
