//! Vietnamese-to-latin transliteration behind the catalog's seam.

use vitrine_catalog::Transliterate;
use vitrine_catalog::latin::fold;

/// Diacritic-folding transliterator used for `name_latin` derivation.
#[derive(Debug, Default)]
pub struct VietnameseLatin;

impl VietnameseLatin {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterate for VietnameseLatin {
    fn to_latin(&self, text: &str) -> String {
        fold(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_vietnamese_names() {
        assert_eq!(VietnameseLatin::new().to_latin("Nước Tẩy Trang"), "Nuoc Tay Trang");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(VietnameseLatin::new().to_latin("Cleanser 2x"), "Cleanser 2x");
    }
}
