//! Slug derivation for product URLs.
//!
//! Slugs are built from ordered source fields (sequential id, then name),
//! folded to ASCII, lowercased, and joined with `-`. Collisions among live
//! documents are resolved with a numeric suffix starting at 2.

use vitrine_catalog::latin::fold;

/// Derives a unique slug from source fields. `is_taken` answers over live
/// (non-deleted) documents, excluding the one being written.
pub trait SlugGenerator {
    fn slugify(&self, sources: &[&str], is_taken: &dyn Fn(&str) -> bool) -> String;
}

/// Default slug derivation.
#[derive(Debug, Default)]
pub struct Slugger;

impl Slugger {
    pub fn new() -> Self {
        Self
    }

    fn base_slug(sources: &[&str]) -> String {
        let mut out = String::new();
        for source in sources {
            for c in fold(source).to_lowercase().chars() {
                if c.is_ascii_alphanumeric() {
                    out.push(c);
                } else if !out.ends_with('-') && !out.is_empty() {
                    out.push('-');
                }
            }
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
        }
        out.trim_matches('-').to_string()
    }
}

impl SlugGenerator for Slugger {
    fn slugify(&self, sources: &[&str], is_taken: &dyn Fn(&str) -> bool) -> String {
        let base = Self::base_slug(sources);
        if !is_taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
