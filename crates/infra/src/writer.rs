//! The catalog write path.
//!
//! `CatalogWriter` runs every create and update through the same pipeline:
//! normalize, validate, then persist. Identity (sequential ids, slug) is
//! assigned only after validation passes, so a rejected document never
//! consumes store state.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use vitrine_catalog::latin::collation_key;
use vitrine_catalog::validate::{ValidationErrors, Validator};
use vitrine_catalog::{Normalizer, Product, Transliterate, UniquenessView};
use vitrine_core::DomainError;

use crate::counter::{Counter, CounterError};
use crate::slug::SlugGenerator;
use crate::store::{ProductKey, ProductStore, StoreError, StoredProduct};

/// Counter names the writer draws identity from.
pub const PRODUCT_ID_COUNTER: &str = "products";
pub const PRODUCT_SQL_ID_COUNTER: &str = "products:my_sociolla_sql_id";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Counter(#[from] CounterError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<WriteError> for DomainError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Validation(e) => e.into(),
            WriteError::Counter(e) => e.into(),
            WriteError::Store(e) => e.into(),
        }
    }
}

/// Orchestrates catalog writes over injected collaborators.
pub struct CatalogWriter<C, S, T, P> {
    counter: C,
    slugger: S,
    normalizer: Normalizer<T>,
    store: P,
}

impl<C, S, T, P> CatalogWriter<C, S, T, P>
where
    C: Counter,
    S: SlugGenerator,
    T: Transliterate,
    P: ProductStore + UniquenessView,
{
    pub fn new(counter: C, slugger: S, translit: T, store: P) -> Self {
        Self {
            counter,
            slugger,
            normalizer: Normalizer::new(translit),
            store,
        }
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Create a product: normalize, validate, assign identity and slug,
    /// persist. On any failure before the insert nothing is persisted.
    pub fn create(&self, mut doc: Product) -> Result<StoredProduct, WriteError> {
        let span = tracing::info_span!("catalog.create");
        let _guard = span.enter();

        self.normalizer.on_create(&mut doc);
        Validator::validate(&doc, &self.store)?;

        let id = self.counter.next(PRODUCT_ID_COUNTER)?;
        let sql_id = self.counter.next(PRODUCT_SQL_ID_COUNTER)?;
        doc.id = Some(id);
        doc.my_sociolla_sql_id = Some(sql_id);

        let sources = doc.slug_sources();
        let source_refs: Vec<&str> = sources.iter().map(String::as_str).collect();
        let slug = self.slugger.slugify(&source_refs, &|candidate| {
            self.store.slug_taken(&collation_key(candidate))
        });
        doc.slug = Some(slug.clone());

        let stored = self.store.insert(id, doc)?;
        info!(id, slug = %slug, "product created");
        Ok(stored)
    }

    /// Apply a partial update: normalize the payload, validate the paths it
    /// touches, then validate the merge result against the rest of the
    /// collection (excluding this document) before persisting. A patch that
    /// would steal a live slug or duplicate a combination sql id is
    /// rejected with nothing written.
    pub fn update(&self, key: ProductKey, mut patch: Value) -> Result<StoredProduct, WriteError> {
        let span = tracing::info_span!("catalog.update", id = key);
        let _guard = span.enter();

        self.normalizer.on_update(&mut patch);
        Validator::validate_patch(&patch)?;

        let merged = self.store.merged(key, &patch)?;
        let view = self.store.view_excluding(key);
        Validator::validate(&merged, view.as_ref())?;

        let stored = self.store.apply_patch(key, &patch)?;
        info!(id = key, "product updated");
        Ok(stored)
    }
}
