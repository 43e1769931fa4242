//! Immutable registry of file-format signatures.
//!
//! Declaration order is authoritative: more specific prefixes are listed
//! before less specific ones sharing the same leading bytes (RAR5 before
//! RAR4, ZIP local-file-header before ZIP EOCD), so that
//! [`SignatureCatalogue::lookup_at`] resolves same-offset ties the way
//! property **P5** requires.

use crate::types::{FormatTag, Signature};

macro_rules! sig {
    ($magic:expr, $offset:expr, $format:expr, $ceiling:expr) => {
        Signature {
            magic: $magic,
            magic_offset_in_file: $offset,
            format: $format,
            size_ceiling: $ceiling,
        }
    };
}

/// The bit-exact catalogue from the signature table. Order matters.
fn entries() -> Vec<Signature> {
    vec![
        sig!(&[0x50, 0x4B, 0x03, 0x04], 0, FormatTag::Zip, 10_000_000),
        sig!(&[0x50, 0x4B, 0x05, 0x06], 0, FormatTag::Zip, 10_000_000),
        sig!(&[0x50, 0x4B, 0x07, 0x08], 0, FormatTag::Zip, 10_000_000),
        sig!(
            &[0xD0, 0xCF, 0x11, 0xE0],
            0,
            FormatTag::Cfb,
            50_000_000
        ),
        sig!(&[0x25, 0x50, 0x44, 0x46], 0, FormatTag::Pdf, 100_000_000),
        sig!(&[0xFF, 0xD8, 0xFF], 0, FormatTag::Jpeg, 30_000_000),
        sig!(&[0x89, 0x50, 0x4E, 0x47], 0, FormatTag::Png, 50_000_000),
        sig!(&[0x47, 0x49, 0x46, 0x38], 0, FormatTag::Gif, 10_000_000),
        sig!(&[0x42, 0x4D], 0, FormatTag::Bmp, 100_000_000),
        sig!(
            &[0x49, 0x49, 0x2A, 0x00],
            0,
            FormatTag::Tiff,
            100_000_000
        ),
        sig!(
            &[0x4D, 0x4D, 0x00, 0x2A],
            0,
            FormatTag::Tiff,
            100_000_000
        ),
        sig!(
            &[0x00, 0x00, 0x00, 0x18, 0x66, 0x74, 0x79, 0x70],
            4,
            FormatTag::Mp4,
            500_000_000
        ),
        sig!(&[0x52, 0x49, 0x46, 0x46], 0, FormatTag::Avi, 500_000_000),
        sig!(
            &[0x1A, 0x45, 0xDF, 0xA3],
            0,
            FormatTag::Mkv,
            500_000_000
        ),
        sig!(
            &[0x66, 0x74, 0x79, 0x70],
            4,
            FormatTag::Mov,
            500_000_000
        ),
        sig!(
            &[0x46, 0x4C, 0x56, 0x01],
            0,
            FormatTag::Flv,
            100_000_000
        ),
        sig!(&[0x49, 0x44, 0x33], 0, FormatTag::Mp3Id3, 10_000_000),
        sig!(&[0xFF, 0xFB], 0, FormatTag::Mp3Frame, 10_000_000),
        sig!(&[0xFF, 0xF1], 0, FormatTag::Aac, 10_000_000),
        sig!(
            &[0x66, 0x4C, 0x61, 0x43],
            0,
            FormatTag::Flac,
            100_000_000
        ),
        sig!(
            &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
            0,
            FormatTag::Rar5,
            100_000_000
        ),
        sig!(
            &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00],
            0,
            FormatTag::Rar4,
            100_000_000
        ),
        sig!(
            &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
            0,
            FormatTag::SevenZ,
            100_000_000
        ),
        sig!(
            &[0x3C, 0x21, 0x44, 0x4F, 0x43, 0x54],
            0,
            FormatTag::Html,
            1_000_000
        ),
        sig!(
            &[0x2F, 0x2A, 0x20, 0x43, 0x53, 0x53],
            0,
            FormatTag::Css,
            1_000_000
        ),
        sig!(
            &[0x3C, 0x73, 0x63, 0x72, 0x69, 0x70],
            0,
            FormatTag::JsSource,
            1_000_000
        ),
        sig!(&[0x4D, 0x5A], 0, FormatTag::PeExe, 50_000_000),
    ]
}

pub struct SignatureCatalogue {
    entries: Vec<Signature>,
    max_signature_length: usize,
}

impl SignatureCatalogue {
    /// Builds the authoritative catalogue.
    #[must_use]
    pub fn standard() -> Self {
        let entries = entries();
        let max_signature_length = entries
            .iter()
            .map(|s| s.magic.len() + s.magic_offset_in_file as usize)
            .max()
            .unwrap_or(0);

        Self {
            entries,
            max_signature_length,
        }
    }

    /// The minimum window size that guarantees no signature is missed
    /// across a chunk boundary: `max(len(magic) + magic_offset_in_file)`.
    #[must_use]
    pub fn max_signature_length(&self) -> usize {
        self.max_signature_length
    }

    pub fn entries(&self) -> impl Iterator<Item = &Signature> {
        self.entries.iter()
    }

    /// Tests every signature whose magic could fit at `offset` within
    /// `window`, in declaration order, and returns the first match along
    /// with the absolute hit offset (`offset - magic_offset_in_file`).
    #[must_use]
    pub fn lookup_at(&self, window: &[u8], offset: usize) -> Option<(&Signature, u64)> {
        for sig in &self.entries {
            let magic_offset = sig.magic_offset_in_file as usize;
            if magic_offset > offset {
                continue;
            }
            let magic_start = offset;
            let magic_end = magic_start + sig.magic.len();
            if magic_end > window.len() {
                continue;
            }
            if &window[magic_start..magic_end] == sig.magic {
                let absolute_hit_offset = offset as u64 - magic_offset as u64;
                return Some((sig, absolute_hit_offset));
            }
        }
        None
    }
}

impl Default for SignatureCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}
