//! Infrastructure layer: collaborator implementations and the write path.
//!
//! The domain crates stay IO-free; this crate supplies the counters, slug
//! generation, transliteration and document store behind their traits, plus
//! the [`CatalogWriter`] that runs a full create/update through
//! normalization, validation and persistence.

pub mod counter;
pub mod slug;
pub mod store;
pub mod translit;
pub mod writer;

#[cfg(test)]
mod integration_tests;

pub use counter::{Counter, CounterError, InMemoryCounter};
pub use slug::{SlugGenerator, Slugger};
pub use store::{
    ExcludingUniquenessView, InMemoryProductStore, ProductKey, ProductStore, StoreError,
    StoredProduct,
};
pub use translit::VietnameseLatin;
pub use writer::{CatalogWriter, WriteError};
