//! Shared embedded value records.
//!
//! The persisted layout repeats a handful of shapes at product level, locale
//! level, combination level and pack level. Those shapes are defined once
//! here and composed everywhere they appear, instead of duplicating the
//! field lists per nesting depth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use vitrine_core::{RefId, UserId, ValueObject};

use crate::enums::{EslSize, Locale, StoreType};
use crate::product::LocaleMap;

pub(crate) fn default_true() -> bool {
    true
}

/// Helper for serde `skip_serializing_if` on locale maps.
pub(crate) fn locale_map_is_empty<T>(map: &std::collections::BTreeMap<Locale, T>) -> bool {
    map.is_empty()
}

/// Product or combination media asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_cover: bool,
    pub is_lilla_cover: bool,
    pub is_cosrx_cover: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
}

/// One variant axis value (size, shade, variant or non-specify).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The four fixed variant axes of a combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_specify: Option<Attribute>,
}

/// Aggregated review data, repeated at product, locale and pack depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewStats {
    pub total_reviews: i64,
    pub average_rating: f64,
    /// Rating types based on the product's default category; free-form keys.
    pub average_rating_by_types: JsonValue,
    pub total_recommended_count: i64,
    pub total_repurchase_maybe_count: i64,
    pub total_repurchase_no_count: i64,
    pub total_repurchase_yes_count: i64,
}

impl Default for ReviewStats {
    fn default() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            average_rating_by_types: JsonValue::Object(serde_json::Map::new()),
            total_recommended_count: 0,
            total_repurchase_maybe_count: 0,
            total_repurchase_no_count: 0,
            total_repurchase_yes_count: 0,
        }
    }
}

/// Per-storefront activation block for curated sections (what's-new,
/// bundle-pack). Identical shape at root and locale depth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_sociolla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_lulla: Option<bool>,
    pub is_active_in_sociolla_vn: bool,
    pub is_active_in_carasun: bool,
    pub is_active_in_cosrx: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// "Our Picks" section flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OurPick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i64,
}

impl Default for Award {
    fn default() -> Self {
        Self {
            name: None,
            image: None,
            title: None,
            description: None,
            year: 0,
        }
    }
}

/// Beauty-profile recommendation tag. Locale-scoped tags additionally carry
/// a transliterated name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_latin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_campaign: Option<bool>,
}

/// Denormalized category snapshot (rename propagation is out-of-band).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_show_category: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub is_promotion: bool,
    pub is_shop_by_departement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_rule_id: Option<RefId>,
}

/// Default category used for rating products in review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rating_types: Vec<String>,
}

/// Root of the category tree; distinct from the default category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
}

/// Physical or vending-machine location with its own stock and sellability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    pub sociolla_my_sql_id: i64,
    pub pos_my_sql_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(default = "default_true")]
    pub is_sellable: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "type")]
    pub store_type: StoreType,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            id: None,
            sociolla_my_sql_id: 0,
            pos_my_sql_id: 0,
            alias: None,
            stock: 0,
            safety_stock: None,
            is_sellable: true,
            is_active: true,
            store_type: StoreType::PhysicalStore,
        }
    }
}

/// Electronic shelf label assignment for a combination at a store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalPriceTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esl_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esl_size: Option<EslSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<RefId>,
}

/// Locale overrides on a brand snapshot (only the country name today).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandLocale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Point-in-time copy of brand identity with per-storefront activation.
///
/// The brand is a referenced entity elsewhere; only this snapshot lives in
/// the product document, and it does not follow source-of-truth renames.
/// Pack-detail entries embed the same type with the activation flags absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_latin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_lulla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_sociolla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_sociolla_vn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_carasun: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_cosrx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// `tags.soco_id` backing the brand-origins slug page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_tag_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "locale_map_is_empty")]
    pub i18n: LocaleMap<BrandLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_event_microsite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_event_microsite_vn: Option<bool>,
}

/// Back-office (Odoo) category assignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OdooCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChartDimensions {
    pub row: i64,
    pub column: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChartCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChartColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<SizeChartCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChartTable {
    pub size: SizeChartDimensions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub table: Vec<SizeChartColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub enabled: bool,
}

/// Lulla SEO override block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
}

/// Sister-brand content override block (carasun, cosrx). The cosrx variant
/// additionally carries the skincare-step and comparison copy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skincare_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_comparison: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct B2bMarketType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContribution {
    pub is_user_contribution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Pink-university game placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PinkUniversityGame {
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// Highest order price seen on lilla, for fast reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighestOrderPrice {
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_id: Option<RefId>,
}

impl ValueObject for Image {}
impl ValueObject for Video {}
impl ValueObject for Attribute {}
impl ValueObject for AttributeSet {}
impl ValueObject for ReviewStats {}
impl ValueObject for SectionFlags {}
impl ValueObject for Tag {}
impl ValueObject for CategoryRef {}
impl ValueObject for StoreSnapshot {}
impl ValueObject for BrandSnapshot {}
impl ValueObject for DigitalPriceTag {}
