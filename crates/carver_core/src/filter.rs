//! The `Filter` port: a predicate over a carve's synthesised name and size,
//! consulted after extraction but before the `Sink` sees any bytes.

/// Implemented by embedders; `StandardFilter` covers the CLI-exposed
/// options (`--ext`, `--name-contains`, `--max-size`).
pub trait Filter {
    fn accept(&self, name: &str, size: u64) -> bool;
}

/// AND-combination of the three filter options named in §6. An unset
/// option always passes.
#[derive(Debug, Default, Clone)]
pub struct StandardFilter {
    /// Lowercase extensions including the leading dot.
    pub extensions: Option<Vec<String>>,
    pub name_substring: Option<String>,
    pub max_size: Option<u64>,
}

impl Filter for StandardFilter {
    fn accept(&self, name: &str, size: u64) -> bool {
        if let Some(exts) = &self.extensions {
            let lower = name.to_ascii_lowercase();
            if !exts.iter().any(|ext| lower.ends_with(ext.as_str())) {
                return false;
            }
        }
        if let Some(substring) = &self.name_substring {
            let needle = substring.to_ascii_lowercase();
            if !name.to_ascii_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(max) = self.max_size {
            if size > max {
                return false;
            }
        }
        true
    }
}

/// Accepts everything; the default when no CLI filter flags are given.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl Filter for AcceptAll {
    fn accept(&self, _name: &str, _size: u64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_all_never_rejects() {
        let f = AcceptAll;
        assert!(f.accept("whatever.exe", u64::MAX));
    }

    #[test]
    fn extension_filter_is_case_insensitive_and_anchored_at_suffix() {
        let f = StandardFilter {
            extensions: Some(vec![".jpg".into(), ".png".into()]),
            ..Default::default()
        };
        assert!(f.accept("carved_1.JPG", 10));
        assert!(!f.accept("carved_1.gif", 10));
    }

    #[test]
    fn name_substring_filter() {
        let f = StandardFilter {
            name_substring: Some("photo".into()),
            ..Default::default()
        };
        assert!(f.accept("carved_PHOTO_001.jpg", 10));
        assert!(!f.accept("carved_doc_001.pdf", 10));
    }

    #[test]
    fn max_size_filter() {
        let f = StandardFilter {
            max_size: Some(1000),
            ..Default::default()
        };
        assert!(f.accept("x.bin", 1000));
        assert!(!f.accept("x.bin", 1001));
    }

    #[test]
    fn all_options_must_pass() {
        let f = StandardFilter {
            extensions: Some(vec![".jpg".into()]),
            name_substring: Some("vacation".into()),
            max_size: Some(500),
        };
        assert!(f.accept("carved_vacation_001.jpg", 400));
        assert!(!f.accept("carved_vacation_001.jpg", 600));
        assert!(!f.accept("carved_work_001.jpg", 400));
        assert!(!f.accept("carved_vacation_001.png", 400));
    }
}
