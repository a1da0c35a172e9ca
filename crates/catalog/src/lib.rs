//! `vitrine-catalog` — the product catalog document model.
//!
//! This crate owns the canonical shape of the Product aggregate (every
//! embedded sub-entity, every closed enumeration, every per-field default),
//! the validation invariant set that gates every write, and the lifecycle
//! normalizer that derives locale names and latin transliterations on create
//! and update.
//!
//! The crate is pure domain: no IO, no clocks beyond schema defaults, no
//! persistence. Collaborators (counter, slug, transliteration, store) are
//! consumed through traits; `vitrine-infra` provides implementations.

pub mod combination;
pub mod common;
pub mod enums;
pub mod latin;
pub mod normalize;
pub mod pack;
pub mod product;
pub mod rules;
pub mod validate;

pub use combination::{Combination, CombinationLocale};
pub use enums::{
    BogoPlatform, Classification, Condition, DeductionType, DiscountPlatform, EslSize,
    FramePlatform, InactiveState, Locale, PackClassification, Platform, PurchaseType, Status,
    StatusItem, StoreType, TacticalPromoType, Visibility,
};
pub use normalize::{Normalizer, Transliterate};
pub use product::{LocaleMap, Product, ProductLocale};
pub use validate::{UniquenessView, ValidationErrors, Validator, Violation, ViolationKind};
