//! Integration tests for the full write path.
//!
//! Create → normalize → validate → identity/slug assignment → store, and
//! update → normalize payload → validate paths → validate merge result →
//! merge.

use anyhow::Result;
use serde_json::json;

use vitrine_catalog::enums::{Classification, Locale, Status};
use vitrine_catalog::product::ProductLocale;
use vitrine_catalog::{Combination, Product};

use crate::counter::InMemoryCounter;
use crate::slug::Slugger;
use crate::store::{InMemoryProductStore, ProductStore};
use crate::translit::VietnameseLatin;
use crate::writer::{CatalogWriter, WriteError};

type TestWriter = CatalogWriter<InMemoryCounter, Slugger, VietnameseLatin, InMemoryProductStore>;

fn writer() -> TestWriter {
    vitrine_observability::init();
    CatalogWriter::new(
        InMemoryCounter::new(),
        Slugger::new(),
        VietnameseLatin::new(),
        InMemoryProductStore::new(),
    )
}

fn sellable(name: &str) -> Product {
    let mut doc = Product::default();
    doc.name = Some(name.to_string());
    doc.combinations = vec![Combination::default()];
    doc
}

#[test]
fn create_assigns_identity_slug_and_timestamps() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Rose Toner"))?;

    assert_eq!(stored.doc.id, Some(1));
    assert_eq!(stored.doc.my_sociolla_sql_id, Some(1));
    assert_eq!(stored.doc.slug.as_deref(), Some("1-rose-toner"));
    assert_eq!(stored.created_at, stored.updated_at);
    assert_eq!(stored.doc.status, Status::WaitingApproval);
    // Locale back-fill and latin derivation ran.
    let vi = &stored.doc.i18n[&Locale::Vi];
    assert_eq!(vi.name.as_deref(), Some("Rose Toner"));
    assert_eq!(vi.name_latin.as_deref(), Some("Rose Toner"));
    Ok(())
}

#[test]
fn create_derives_root_name_and_slug_from_the_first_locale() -> Result<()> {
    let writer = writer();
    let mut doc = Product::default();
    doc.combinations = vec![Combination::default()];
    let mut vi = ProductLocale::default();
    vi.name = Some("Nước Tẩy Trang".into());
    doc.i18n.insert(Locale::Vi, vi);

    let stored = writer.create(doc)?;
    assert_eq!(stored.doc.name.as_deref(), Some("Nước Tẩy Trang"));
    // The derived root name feeds the slug sources.
    assert_eq!(stored.doc.slug.as_deref(), Some("1-nuoc-tay-trang"));
    Ok(())
}

#[test]
fn create_sequences_advance_per_document() -> Result<()> {
    let writer = writer();
    let first = writer.create(sellable("A"))?;
    let second = writer.create(sellable("B"))?;
    assert_eq!(first.doc.id, Some(1));
    assert_eq!(second.doc.id, Some(2));
    assert_eq!(second.doc.my_sociolla_sql_id, Some(2));
    Ok(())
}

#[test]
fn sequential_ids_keep_natural_slugs_apart() -> Result<()> {
    let writer = writer();
    let first = writer.create(sellable("Toner"))?;
    let second = writer.create(sellable("Toner"))?;
    assert_eq!(first.doc.slug.as_deref(), Some("1-toner"));
    assert_eq!(second.doc.slug.as_deref(), Some("2-toner"));
    Ok(())
}

#[test]
fn sellable_document_without_combinations_is_rejected_before_identity() {
    let writer = writer();
    let mut doc = Product::default();
    doc.name = Some("Empty".into());
    let err = writer.create(doc).unwrap_err();
    assert!(matches!(err, WriteError::Validation(_)));
    // Nothing was persisted.
    assert!(writer.store().get(1).is_err());
}

#[test]
fn non_sellable_classification_creates_without_combinations() -> Result<()> {
    let writer = writer();
    let mut doc = Product::default();
    doc.name = Some("Tester Unit".into());
    doc.classification = Some(Classification::Testers);
    writer.create(doc)?;
    Ok(())
}

#[test]
fn update_merges_only_touched_fields() -> Result<()> {
    let writer = writer();
    let mut doc = sellable("Serum");
    doc.description = Some("original".into());
    let stored = writer.create(doc)?;

    let updated = writer.update(stored.key, json!({ "position": 9 }))?;
    assert_eq!(updated.doc.position, 9);
    assert_eq!(updated.doc.description.as_deref(), Some("original"));
    assert_eq!(updated.doc.slug.as_deref(), stored.doc.slug.as_deref());
    Ok(())
}

#[test]
fn update_recomputes_vietnamese_latin_name() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Serum"))?;

    let updated = writer.update(
        stored.key,
        json!({ "i18n": { "vi": { "name": "Mặt nạ dưỡng ẩm" } } }),
    )?;
    let vi = &updated.doc.i18n[&Locale::Vi];
    assert_eq!(vi.name.as_deref(), Some("Mặt nạ dưỡng ẩm"));
    assert_eq!(vi.name_latin.as_deref(), Some("Mat na duong am"));
    Ok(())
}

#[test]
fn update_brand_latin_name_follows_the_vietnamese_rename() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Serum"))?;

    // Without a vi rename the brand snapshot is stored exactly as sent.
    let updated = writer.update(stored.key, json!({ "brand": { "name": "Thương Hiệu" } }))?;
    let brand = updated.doc.brand.unwrap();
    assert_eq!(brand.name.as_deref(), Some("Thương Hiệu"));
    assert!(brand.name_latin.is_none());

    // A rename in the same payload recomputes both latin names.
    let updated = writer.update(
        stored.key,
        json!({
            "i18n": { "vi": { "name": "Mặt nạ" } },
            "brand": { "name": "Thương Hiệu" }
        }),
    )?;
    let brand = updated.doc.brand.unwrap();
    assert_eq!(brand.name_latin.as_deref(), Some("Thuong Hieu"));

    // A nameless snapshot alongside a rename still gets the empty derived
    // field.
    let updated = writer.update(
        stored.key,
        json!({
            "i18n": { "vi": { "name": "Mặt nạ" } },
            "brand": { "logo": "b.png" }
        }),
    )?;
    assert_eq!(updated.doc.brand.unwrap().name_latin.as_deref(), Some(""));
    Ok(())
}

#[test]
fn update_rejects_enum_values_outside_the_closed_sets() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Serum"))?;
    let err = writer
        .update(stored.key, json!({ "status": "published" }))
        .unwrap_err();
    assert!(matches!(err, WriteError::Validation(_)));
    // The stored document is untouched.
    let fetched = writer.store().get(stored.key)?;
    assert_eq!(fetched.doc.status, Status::WaitingApproval);
    Ok(())
}

#[test]
fn update_rejects_unknown_locale_keys() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Serum"))?;
    let err = writer
        .update(stored.key, json!({ "i18n": { "th": { "name": "x" } } }))
        .unwrap_err();
    assert!(matches!(err, WriteError::Validation(_)));
    Ok(())
}

#[test]
fn update_cannot_take_a_live_slug() -> Result<()> {
    let writer = writer();
    writer.create(sellable("Toner"))?;
    let second = writer.create(sellable("Serum"))?;

    let err = writer
        .update(second.key, json!({ "slug": "1-toner" }))
        .unwrap_err();
    assert!(matches!(err, WriteError::Validation(_)));
    // The losing patch left the document untouched.
    let fetched = writer.store().get(second.key)?;
    assert_eq!(fetched.doc.slug.as_deref(), Some("2-serum"));
    Ok(())
}

#[test]
fn update_keeps_its_own_slug_without_a_false_collision() -> Result<()> {
    let writer = writer();
    let stored = writer.create(sellable("Toner"))?;
    // Echoing the document's current slug back is not a collision.
    let updated = writer.update(stored.key, json!({ "slug": "1-toner", "position": 2 }))?;
    assert_eq!(updated.doc.position, 2);
    Ok(())
}

#[test]
fn update_cannot_duplicate_a_combination_sql_id() -> Result<()> {
    let writer = writer();
    let mut first = sellable("A");
    first.combinations[0].my_sociolla_sql_id = Some(71);
    writer.create(first)?;
    let second = writer.create(sellable("B"))?;

    let err = writer
        .update(
            second.key,
            json!({ "combinations": [{ "my_sociolla_sql_id": 71 }] }),
        )
        .unwrap_err();
    assert!(matches!(err, WriteError::Validation(_)));
    Ok(())
}

#[test]
fn soft_deleting_frees_the_slug_for_reuse() -> Result<()> {
    let writer = writer();
    let first = writer.create(sellable("Toner"))?;
    writer.update(first.key, json!({ "is_deleted": true }))?;

    // A new document whose sources collapse to the same slug base can take
    // the exact slug back, since uniqueness only covers live documents.
    let second = writer.create(sellable("Toner"))?;
    assert_eq!(second.doc.slug.as_deref(), Some("2-toner"));
    assert!(writer.store().find_by_slug("1-toner")?.is_none());
    Ok(())
}
