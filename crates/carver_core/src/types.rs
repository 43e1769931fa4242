//! Core data model: format tags, signatures, and carved items.

/// The closed set of formats the catalogue knows how to detect and carve.
///
/// Two catalogue entries may share a tag (all ZIP-family prefixes carry
/// `Zip`); two tags may share magic bytes, disambiguated only by container
/// parsing (RIFF carries `Avi` in the catalogue, but the RIFF extractor
/// re-tags the carve to `Wav` once it reads the form type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Zip,
    Cfb,
    Pdf,
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Mp4,
    Avi,
    Mkv,
    Mov,
    Flv,
    Mp3Id3,
    Mp3Frame,
    Wav,
    Aac,
    Flac,
    Rar4,
    Rar5,
    SevenZ,
    Html,
    Css,
    JsSource,
    PeExe,
    Generic,
}

impl FormatTag {
    /// The extension (without the leading dot) used when synthesising a
    /// carved file's name.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip_or_office",
            Self::Cfb => "cfb_file",
            Self::Pdf => "pdf",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Mp4 => "mp4",
            Self::Avi => "avi",
            Self::Mkv => "mkv",
            Self::Mov => "mov",
            Self::Flv => "flv",
            Self::Mp3Id3 | Self::Mp3Frame => "mp3",
            Self::Wav => "wav",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Rar4 | Self::Rar5 => "rar",
            Self::SevenZ => "7z",
            Self::Html => "html",
            Self::Css => "css",
            Self::JsSource => "js",
            Self::PeExe => "exe",
            Self::Generic => "bin",
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// An immutable catalogue entry: a magic sequence, the offset within the
/// file at which it appears, the format it identifies, and a conservative
/// upper bound on how many bytes an extractor will read for one instance.
#[derive(Debug, Clone)]
pub struct Signature {
    pub magic: &'static [u8],
    pub magic_offset_in_file: u32,
    pub format: FormatTag,
    pub size_ceiling: u64,
}

/// A half-open byte range `[start, end)` within the source, as returned by
/// a `FormatExtractor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// A successfully carved file, ready to be handed to a `Filter` and then a
/// `Sink`. Constructed by the coordinator after an extractor returns a
/// range; consumed exactly once.
#[derive(Debug, Clone)]
pub struct CarvedItem {
    pub source_offset: u64,
    pub format: FormatTag,
    pub bytes: Vec<u8>,
    pub synthesised_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_table_matches_catalogue() {
        assert_eq!(FormatTag::Zip.extension(), "zip_or_office");
        assert_eq!(FormatTag::Cfb.extension(), "cfb_file");
        assert_eq!(FormatTag::Jpeg.extension(), "jpg");
        assert_eq!(FormatTag::Mp3Id3.extension(), "mp3");
        assert_eq!(FormatTag::Mp3Frame.extension(), "mp3");
        assert_eq!(FormatTag::Rar4.extension(), "rar");
        assert_eq!(FormatTag::Rar5.extension(), "rar");
        assert_eq!(FormatTag::Generic.extension(), "bin");
    }

    #[test]
    fn byte_range_len() {
        let r = ByteRange::new(100, 160);
        assert_eq!(r.len(), 60);
        assert!(!r.is_empty());
        assert!(ByteRange::new(5, 5).is_empty());
    }

    #[test]
    fn display_uses_debug_name() {
        assert_eq!(format!("{}", FormatTag::Jpeg), "Jpeg");
    }
}
