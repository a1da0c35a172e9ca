//! Bundle membership ("pack detail").
//!
//! A bundle product embeds summaries of the products inside the pack, each
//! with its own chosen combinations and locale overrides. The shape recurses
//! exactly one level: a pack member can never itself contain a pack.

use serde::{Deserialize, Serialize};

use vitrine_core::RefId;

use crate::common::{
    AttributeSet, BrandSnapshot, DefaultCategory, Image, ReviewStats, locale_map_is_empty,
};
use crate::enums::{PackClassification, Visibility};
use crate::product::LocaleMap;

/// Locale override block for a chosen pack combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackCombinationLocale {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A chosen combination of a pack member (narrower than a full
/// [`Combination`](crate::Combination): no nested rule lists, no stores).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackCombination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_soco_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
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
    pub product_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit_per_order: Option<i64>,
    pub is_active_in_review: bool,
    pub is_active_in_sociolla: bool,
    pub is_active_in_event_microsite: bool,
    pub is_active_in_event_microsite_vn: bool,
    pub is_active_in_lulla: bool,
    pub is_active_in_sociolla_vn: bool,
    pub is_active_in_offline_store: bool,
    pub is_active_in_carasun: bool,
    pub is_active_in_cosrx: bool,
    pub is_deleted: bool,
    pub is_limited: bool,
    pub is_exclusive: bool,
    pub visibility: Visibility,
    pub is_out_of_stock_sociolla: bool,
    pub is_out_of_stock_lulla: bool,
    pub is_out_of_stock_carasun: bool,
    pub is_out_of_stock_cosrx: bool,
    pub is_out_of_stock_sociolla_vn: bool,
    #[serde(skip_serializing_if = "locale_map_is_empty")]
    pub i18n: LocaleMap<PackCombinationLocale>,
}

/// Locale override block for a pack member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackLocale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// One cover image.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    pub review_stats: ReviewStats,
}

/// Summary of one product inside a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<PackClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active_in_sociolla: bool,
    pub is_active_in_sociolla_vn: bool,
    pub is_active_in_event_microsite: bool,
    pub is_active_in_event_microsite_vn: bool,
    pub is_active_in_lulla: bool,
    pub is_active_in_carasun: bool,
    pub is_active_in_cosrx: bool,
    pub is_out_of_stock_sociolla: bool,
    pub is_out_of_stock_lilla: bool,
    pub is_out_of_stock_sociolla_vn: bool,
    pub is_out_of_stock_carasun: bool,
    pub is_out_of_stock_cosrx: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSnapshot>,
    /// One cover image.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "locale_map_is_empty")]
    pub i18n: LocaleMap<PackLocale>,
    /// Chosen combinations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub combinations: Vec<PackCombination>,
    /// Quantity of this product inside the pack.
    pub quantity: i64,
    pub review_stats: ReviewStats,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<DefaultCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Default for PackProduct {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            classification: None,
            description: None,
            is_active_in_sociolla: false,
            is_active_in_sociolla_vn: false,
            is_active_in_event_microsite: false,
            is_active_in_event_microsite_vn: false,
            is_active_in_lulla: false,
            is_active_in_carasun: false,
            is_active_in_cosrx: false,
            is_out_of_stock_sociolla: false,
            is_out_of_stock_lilla: false,
            is_out_of_stock_sociolla_vn: false,
            is_out_of_stock_carasun: false,
            is_out_of_stock_cosrx: false,
            brand: None,
            images: Vec::new(),
            i18n: LocaleMap::new(),
            combinations: Vec::new(),
            quantity: 1,
            review_stats: ReviewStats::default(),
            is_deleted: false,
            short_description: None,
            how_to_use: None,
            ingredients: None,
            default_category: None,
            slug: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_member_quantity_defaults_to_one() {
        let member: PackProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(member.quantity, 1);
        assert!(!member.is_deleted);
        assert_eq!(member.review_stats.total_reviews, 0);
    }

    #[test]
    fn pack_member_rejects_paper_bag_classification() {
        let result = serde_json::from_value::<PackProduct>(serde_json::json!({
            "classification": "paper_bag"
        }));
        assert!(result.is_err());
        let ok: PackProduct = serde_json::from_value(serde_json::json!({
            "classification": "egift"
        }))
        .unwrap();
        assert_eq!(ok.classification, Some(PackClassification::Egift));
    }

    #[test]
    fn pack_combination_visibility_defaults_to_nowhere() {
        let combination: PackCombination = serde_json::from_str("{}").unwrap();
        assert_eq!(combination.visibility, Visibility::Nowhere);
    }
}
