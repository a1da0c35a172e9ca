//! Lifecycle normalization applied before every write.
//!
//! Creation works on the typed document; updates work on the raw JSON
//! payload because an update only carries the fields it touches and must
//! never fabricate the rest.

use serde_json::Value;

use crate::enums::Locale;
use crate::product::Product;

/// Transliteration collaborator. The catalog derives `name_latin` fields
/// through this seam; `vitrine-infra` supplies the Vietnamese folding
/// implementation.
pub trait Transliterate {
    fn to_latin(&self, text: &str) -> String;
}

/// Applies the pre-write derivation rules.
pub struct Normalizer<T> {
    translit: T,
}

impl<T: Transliterate> Normalizer<T> {
    pub fn new(translit: T) -> Self {
        Self { translit }
    }

    /// Normalize a document about to be created.
    ///
    /// Name resolution runs one of two directions, never both: a document
    /// without a root name takes it from the first locale entry; a document
    /// with a root name back-fills it into every supported locale that has
    /// no name of its own. A document with neither stays untouched.
    ///
    /// The latin derivations then key off the (possibly back-filled)
    /// Vietnamese name: only when it is present and non-empty are
    /// `i18n.vi.name_latin` and `brand.name_latin` written. Inside that
    /// branch a missing brand is skipped, and a brand without a name still
    /// gets an empty `name_latin`.
    pub fn on_create(&self, doc: &mut Product) {
        if doc.name.as_deref().is_none_or(str::is_empty) {
            if let Some(first) = doc.i18n.values().next() {
                if let Some(name) = first.name.clone() {
                    doc.name = Some(name);
                }
            }
        } else {
            let root_name = doc.name.clone();
            for locale in Locale::ALL {
                let entry = doc.i18n.entry(*locale).or_default();
                if entry.name.as_deref().is_none_or(str::is_empty) {
                    entry.name = root_name.clone();
                }
            }
        }

        let vi_name = doc
            .i18n
            .get(&Locale::Vi)
            .and_then(|vi| vi.name.clone())
            .filter(|n| !n.is_empty());
        if let Some(name) = vi_name {
            let latin = self.translit.to_latin(&name);
            if let Some(vi) = doc.i18n.get_mut(&Locale::Vi) {
                vi.name_latin = Some(latin);
            }
            if let Some(brand) = &mut doc.brand {
                let brand_name = brand.name.as_deref().unwrap_or_default();
                brand.name_latin = Some(self.translit.to_latin(brand_name));
            }
        }
    }

    /// Normalize a partial update payload in place.
    ///
    /// Everything hangs off the Vietnamese rename: a payload without a
    /// non-empty `i18n.vi.name` is passed through untouched, including any
    /// `brand` object it carries. When the rename is present,
    /// `i18n.vi.name_latin` is derived, and a `brand` object in the same
    /// payload gets `name_latin` recomputed from its name (empty when the
    /// snapshot carries no name).
    pub fn on_update(&self, payload: &mut Value) {
        let Some(latin) = payload
            .pointer("/i18n/vi/name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(|n| self.translit.to_latin(n))
        else {
            return;
        };

        if let Some(vi) = payload
            .pointer_mut("/i18n/vi")
            .and_then(Value::as_object_mut)
        {
            vi.insert("name_latin".into(), Value::String(latin));
        }

        if let Some(brand) = payload.get_mut("brand").and_then(Value::as_object_mut) {
            let brand_name = brand
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let brand_latin = self.translit.to_latin(brand_name);
            brand.insert("name_latin".into(), Value::String(brand_latin));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BrandSnapshot;
    use crate::latin::fold;
    use crate::product::ProductLocale;
    use proptest::prelude::*;
    use serde_json::json;

    struct Folding;

    impl Transliterate for Folding {
        fn to_latin(&self, text: &str) -> String {
            fold(text)
        }
    }

    fn normalizer() -> Normalizer<Folding> {
        Normalizer::new(Folding)
    }

    #[test]
    fn create_back_fills_every_locale_with_the_root_name() {
        let mut doc = Product::default();
        doc.name = Some("Sữa rửa mặt".into());
        normalizer().on_create(&mut doc);
        let vi = &doc.i18n[&Locale::Vi];
        assert_eq!(vi.name.as_deref(), Some("Sữa rửa mặt"));
        assert_eq!(vi.name_latin.as_deref(), Some("Sua rua mat"));
    }

    #[test]
    fn create_keeps_an_explicit_locale_name() {
        let mut doc = Product::default();
        doc.name = Some("Cleanser".into());
        let mut vi = ProductLocale::default();
        vi.name = Some("Sữa rửa mặt".into());
        doc.i18n.insert(Locale::Vi, vi);
        normalizer().on_create(&mut doc);
        assert_eq!(doc.i18n[&Locale::Vi].name.as_deref(), Some("Sữa rửa mặt"));
        assert_eq!(
            doc.i18n[&Locale::Vi].name_latin.as_deref(),
            Some("Sua rua mat")
        );
    }

    #[test]
    fn create_derives_the_root_name_from_the_first_locale() {
        let mut doc = Product::default();
        let mut vi = ProductLocale::default();
        vi.name = Some("Nước hoa hồng".into());
        doc.i18n.insert(Locale::Vi, vi);
        normalizer().on_create(&mut doc);
        assert_eq!(doc.name.as_deref(), Some("Nước hoa hồng"));
        assert_eq!(
            doc.i18n[&Locale::Vi].name_latin.as_deref(),
            Some("Nuoc hoa hong")
        );
    }

    #[test]
    fn create_without_any_name_leaves_the_locale_map_empty() {
        let mut doc = Product::default();
        normalizer().on_create(&mut doc);
        assert!(doc.name.is_none());
        assert!(doc.i18n.is_empty());
    }

    #[test]
    fn create_without_a_vietnamese_name_skips_brand_derivation() {
        let mut doc = Product::default();
        let mut brand = BrandSnapshot::default();
        brand.name = Some("Thương hiệu".into());
        doc.brand = Some(brand);
        normalizer().on_create(&mut doc);
        assert!(doc.brand.unwrap().name_latin.is_none());
    }

    #[test]
    fn create_without_a_brand_skips_brand_derivation() {
        let mut doc = Product::default();
        doc.name = Some("Toner".into());
        normalizer().on_create(&mut doc);
        assert!(doc.brand.is_none());
    }

    #[test]
    fn create_with_a_nameless_brand_writes_an_empty_latin_name() {
        let mut doc = Product::default();
        doc.name = Some("Sữa rửa mặt".into());
        doc.brand = Some(BrandSnapshot::default());
        normalizer().on_create(&mut doc);
        assert_eq!(doc.brand.unwrap().name_latin.as_deref(), Some(""));
    }

    #[test]
    fn create_is_idempotent() {
        let mut doc = Product::default();
        doc.name = Some("Nước hoa hồng".into());
        let mut brand = BrandSnapshot::default();
        brand.name = Some("Thương hiệu".into());
        doc.brand = Some(brand);
        normalizer().on_create(&mut doc);
        let once = doc.clone();
        normalizer().on_create(&mut doc);
        assert_eq!(doc, once);
    }

    #[test]
    fn update_recomputes_latin_name_when_the_payload_renames() {
        let mut payload = json!({ "i18n": { "vi": { "name": "Mặt nạ" } } });
        normalizer().on_update(&mut payload);
        assert_eq!(payload["i18n"]["vi"]["name_latin"], "Mat na");
    }

    #[test]
    fn update_leaves_untouched_paths_alone() {
        let mut payload = json!({ "position": 4 });
        normalizer().on_update(&mut payload);
        assert_eq!(payload, json!({ "position": 4 }));
    }

    #[test]
    fn update_with_an_empty_vi_name_does_not_derive() {
        let mut payload = json!({ "i18n": { "vi": { "name": "" } } });
        normalizer().on_update(&mut payload);
        assert!(payload["i18n"]["vi"].get("name_latin").is_none());
    }

    #[test]
    fn update_without_a_vi_rename_leaves_the_brand_alone() {
        let mut payload = json!({ "brand": { "name": "Thương hiệu" } });
        normalizer().on_update(&mut payload);
        assert_eq!(payload, json!({ "brand": { "name": "Thương hiệu" } }));
    }

    #[test]
    fn update_rename_recomputes_the_brand_latin_name_too() {
        let mut payload = json!({
            "i18n": { "vi": { "name": "Mặt nạ" } },
            "brand": { "name": "Thương Hiệu" }
        });
        normalizer().on_update(&mut payload);
        assert_eq!(payload["brand"]["name_latin"], "Thuong Hieu");

        // A nameless snapshot in the same rename still gets the (empty)
        // derived field.
        let mut payload = json!({
            "i18n": { "vi": { "name": "Mặt nạ" } },
            "brand": { "logo": "x.png" }
        });
        normalizer().on_update(&mut payload);
        assert_eq!(payload["brand"]["name_latin"], "");
    }

    proptest! {
        #[test]
        fn create_derivation_is_deterministic(name in "\\PC{1,40}") {
            let mut a = Product::default();
            a.name = Some(name.clone());
            let mut b = Product::default();
            b.name = Some(name);
            normalizer().on_create(&mut a);
            normalizer().on_create(&mut b);
            prop_assert_eq!(a.i18n, b.i18n);
        }
    }
}
