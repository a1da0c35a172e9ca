//! Purchasable variants ("combinations") of a product.
//!
//! Every product owns at least one combination (the first is the default by
//! convention, `is_default` makes the choice explicit). A combination has
//! its own price, stock, tax, per-storefront flags, locale overrides and
//! nested rule lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{
    AttributeSet, B2bMarketType, DigitalPriceTag, Image, StoreSnapshot, locale_map_is_empty,
};
use crate::enums::StatusItem;
use crate::product::LocaleMap;
use crate::rules::{Discount, Preorder};

/// Locale override block for a combination (mirrors a subset of the root
/// combination fields; absent fields fall back to the root values).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinationLocale {
    pub attributes: AttributeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_masks: Option<i64>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit_per_order: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean_no: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub others_ean_no: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<StoreSnapshot>,
    pub stock_market_place: i64,
    pub reserved_qty: i64,
    pub reserved_stock_marketplace: i64,
    pub is_kill_product: bool,
    pub weight: f64,
    pub status_item: StatusItem,
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Combination {
    // Mask packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_masks: Option<i64>,
    /// Savings copy on the package ("save 20%").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving: Option<String>,
    pub weight: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    /// Globally unique across all combinations system-wide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,

    /// At most one combination per product may carry `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    pub attributes: AttributeSet,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpom_reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpom_expired_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub others_ean_no: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    pub available_for_guest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Ordered but not yet shipped.
    pub reserved_qty: i64,
    pub reserved_stock_marketplace: i64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit_per_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    pub soco_stock: i64,

    #[serde(skip_serializing_if = "locale_map_is_empty")]
    pub i18n: LocaleMap<CombinationLocale>,

    // Combination active on which storefront.
    pub is_active_in_review: bool,
    pub is_active_in_review_vn: bool,
    pub is_active_in_sociolla: bool,
    pub is_active_in_lulla: bool,
    pub is_active_in_sociolla_vn: bool,
    pub is_active_in_offline_store: bool,
    pub is_active_in_offline_store_vn: bool,
    pub is_active_in_offline_store_lilla: bool,
    pub is_active_in_carasun: bool,
    pub is_active_in_cosrx: bool,
    pub is_active_in_b2b: bool,
    pub is_active_in_event_microsite: bool,
    pub is_active_in_event_microsite_vn: bool,
    pub is_kill_product: bool,

    pub is_limited: bool,
    pub is_exclusive: bool,
    pub is_out_of_stock_sociolla: bool,
    pub is_out_of_stock_lulla: bool,
    pub is_out_of_stock_sociolla_vn: bool,
    pub enabled_in_freebies: bool,
    pub is_out_of_stock_carasun: bool,
    pub is_out_of_stock_cosrx: bool,
    pub stock_market_place: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Discount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preorder: Vec<Preorder>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<StoreSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub digital_price_tag: Vec<DigitalPriceTag>,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_discontinue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b2b_market_type: Option<B2bMarketType>,
    pub status_item: StatusItem,
}

impl Combination {
    /// Whether this combination is flagged as the product default.
    pub fn is_flagged_default(&self) -> bool {
        self.is_default == Some(true)
    }
}
