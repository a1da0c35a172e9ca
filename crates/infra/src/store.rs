//! Product document store.
//!
//! The store owns persistence timestamps and the top-level merge semantics
//! of partial updates: a patch replaces whole top-level fields, it never
//! splices deeper. It also answers the validator's uniqueness questions.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use vitrine_catalog::latin::collation_key;
use vitrine_catalog::{Product, UniquenessView};
use vitrine_core::{DomainError, Entity};

/// Sequential document identity, the `id` field.
pub type ProductKey = i64;

/// A persisted product with its store-managed envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProduct {
    pub key: ProductKey,
    pub doc: Product,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for StoredProduct {
    type Id = ProductKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(ProductKey),
    #[error("product {0} already exists")]
    Conflict(ProductKey),
    /// A merged document no longer deserializes into the schema.
    #[error("patch produced an invalid document: {0}")]
    InvalidDocument(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => DomainError::not_found(format!("product {key}")),
            StoreError::Conflict(key) => DomainError::conflict(format!("product {key}")),
            StoreError::InvalidDocument(msg) => DomainError::validation(msg),
            StoreError::Unavailable(msg) => DomainError::unavailable(msg),
        }
    }
}

pub trait ProductStore {
    /// Persist a new document under `key`, stamping `created_at`/`updated_at`.
    fn insert(&self, key: ProductKey, doc: Product) -> Result<StoredProduct, StoreError>;

    fn get(&self, key: ProductKey) -> Result<StoredProduct, StoreError>;

    /// The document that `apply_patch` would produce, without persisting
    /// anything. Lets callers validate a merge result before committing.
    fn merged(&self, key: ProductKey, patch: &Value) -> Result<Product, StoreError>;

    /// Merge a partial payload into the stored document: each top-level key
    /// in the patch replaces the stored field wholesale, last writer wins.
    /// Bumps `updated_at`.
    fn apply_patch(&self, key: ProductKey, patch: &Value) -> Result<StoredProduct, StoreError>;

    /// Exact slug lookup over live (non-deleted) documents.
    fn find_by_slug(&self, slug: &str) -> Result<Option<StoredProduct>, StoreError>;

    /// Uniqueness view over every document except `exclude`, for validating
    /// an update against the rest of the collection.
    fn view_excluding(&self, exclude: ProductKey) -> Box<dyn UniquenessView + '_>;
}

fn merge_doc(doc: &Product, patch: &Value) -> Result<Product, StoreError> {
    let mut merged =
        serde_json::to_value(doc).map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
    if let (Some(target), Some(source)) = (merged.as_object_mut(), patch.as_object()) {
        for (field, value) in source {
            target.insert(field.clone(), value.clone());
        }
    }
    serde_json::from_value(merged).map_err(|e| StoreError::InvalidDocument(e.to_string()))
}

/// In-memory store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    docs: RwLock<BTreeMap<ProductKey, StoredProduct>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, key: ProductKey, doc: Product) -> Result<StoredProduct, StoreError> {
        let mut docs = self.docs.write().map_err(|_| Self::lock_err())?;
        if docs.contains_key(&key) {
            return Err(StoreError::Conflict(key));
        }
        let now = Utc::now();
        let stored = StoredProduct {
            key,
            doc,
            created_at: now,
            updated_at: now,
        };
        docs.insert(key, stored.clone());
        Ok(stored)
    }

    fn get(&self, key: ProductKey) -> Result<StoredProduct, StoreError> {
        let docs = self.docs.read().map_err(|_| Self::lock_err())?;
        docs.get(&key).cloned().ok_or(StoreError::NotFound(key))
    }

    fn merged(&self, key: ProductKey, patch: &Value) -> Result<Product, StoreError> {
        let docs = self.docs.read().map_err(|_| Self::lock_err())?;
        let stored = docs.get(&key).ok_or(StoreError::NotFound(key))?;
        merge_doc(&stored.doc, patch)
    }

    fn apply_patch(&self, key: ProductKey, patch: &Value) -> Result<StoredProduct, StoreError> {
        let mut docs = self.docs.write().map_err(|_| Self::lock_err())?;
        let stored = docs.get_mut(&key).ok_or(StoreError::NotFound(key))?;
        stored.doc = merge_doc(&stored.doc, patch)?;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<StoredProduct>, StoreError> {
        let docs = self.docs.read().map_err(|_| Self::lock_err())?;
        Ok(docs
            .values()
            .find(|s| !s.doc.is_deleted && s.doc.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn view_excluding(&self, exclude: ProductKey) -> Box<dyn UniquenessView + '_> {
        Box::new(ExcludingUniquenessView {
            store: self,
            exclude,
        })
    }
}

/// [`UniquenessView`] over an [`InMemoryProductStore`] that ignores one
/// document, so an update does not collide with the document's own stored
/// state.
pub struct ExcludingUniquenessView<'a> {
    store: &'a InMemoryProductStore,
    exclude: ProductKey,
}

impl UniquenessView for ExcludingUniquenessView<'_> {
    fn slug_taken(&self, slug_key: &str) -> bool {
        let Ok(docs) = self.store.docs.read() else {
            return true;
        };
        docs.values().any(|s| {
            s.key != self.exclude
                && !s.doc.is_deleted
                && s.doc
                    .slug
                    .as_deref()
                    .is_some_and(|slug| collation_key(slug) == slug_key)
        })
    }

    fn combination_sql_id_taken(&self, sql_id: i64) -> bool {
        let Ok(docs) = self.store.docs.read() else {
            return true;
        };
        docs.values()
            .any(|s| s.key != self.exclude && s.doc.combination_sql_ids().contains(&sql_id))
    }
}

impl UniquenessView for InMemoryProductStore {
    fn slug_taken(&self, slug_key: &str) -> bool {
        let Ok(docs) = self.docs.read() else {
            // Fail closed: an unreadable store cannot vouch for uniqueness.
            return true;
        };
        docs.values().any(|s| {
            !s.doc.is_deleted
                && s.doc
                    .slug
                    .as_deref()
                    .is_some_and(|slug| collation_key(slug) == slug_key)
        })
    }

    fn combination_sql_id_taken(&self, sql_id: i64) -> bool {
        let Ok(docs) = self.docs.read() else {
            return true;
        };
        docs.values()
            .any(|s| s.doc.combination_sql_ids().contains(&sql_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str, slug: &str) -> Product {
        let mut doc = Product::default();
        doc.name = Some(name.to_string());
        doc.slug = Some(slug.to_string());
        doc
    }

    #[test]
    fn insert_then_get_round_trips_with_timestamps() {
        let store = InMemoryProductStore::new();
        let stored = store.insert(1, named("Toner", "1-toner")).unwrap();
        assert_eq!(stored.created_at, stored.updated_at);
        let fetched = store.get(1).unwrap();
        assert_eq!(fetched.doc.name.as_deref(), Some("Toner"));
    }

    #[test]
    fn duplicate_key_conflicts() {
        let store = InMemoryProductStore::new();
        store.insert(1, named("A", "1-a")).unwrap();
        assert!(matches!(
            store.insert(1, named("B", "1-b")),
            Err(StoreError::Conflict(1))
        ));
    }

    #[test]
    fn patch_replaces_top_level_fields_wholesale() {
        let store = InMemoryProductStore::new();
        let mut doc = named("Toner", "1-toner");
        doc.description = Some("old".into());
        doc.position = 3;
        store.insert(1, doc).unwrap();

        let updated = store
            .apply_patch(1, &json!({ "description": "new" }))
            .unwrap();
        assert_eq!(updated.doc.description.as_deref(), Some("new"));
        // Untouched fields survive the merge.
        assert_eq!(updated.doc.position, 3);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn patch_that_breaks_the_schema_is_rejected() {
        let store = InMemoryProductStore::new();
        store.insert(1, named("Toner", "1-toner")).unwrap();
        let result = store.apply_patch(1, &json!({ "status": "published" }));
        assert!(matches!(result, Err(StoreError::InvalidDocument(_))));
    }

    #[test]
    fn merged_previews_without_persisting() {
        let store = InMemoryProductStore::new();
        store.insert(1, named("Toner", "1-toner")).unwrap();
        let merged = store.merged(1, &json!({ "position": 5 })).unwrap();
        assert_eq!(merged.position, 5);
        assert_eq!(store.get(1).unwrap().doc.position, 0);
    }

    #[test]
    fn excluding_view_skips_only_the_excluded_document() {
        let store = InMemoryProductStore::new();
        store.insert(1, named("Toner", "1-toner")).unwrap();
        store.insert(2, named("Serum", "2-serum")).unwrap();

        let view = store.view_excluding(1);
        assert!(!view.slug_taken(&collation_key("1-toner")));
        assert!(view.slug_taken(&collation_key("2-serum")));
    }

    #[test]
    fn slug_uniqueness_ignores_soft_deleted_documents() {
        let store = InMemoryProductStore::new();
        let mut doc = named("Toner", "1-toner");
        doc.is_deleted = true;
        store.insert(1, doc).unwrap();
        assert!(!store.slug_taken(&collation_key("1-toner")));
        assert!(store.find_by_slug("1-toner").unwrap().is_none());

        store.insert(2, named("Toner", "1-toner")).unwrap();
        assert!(store.slug_taken(&collation_key("1-TONER")));
    }
}
