//! The Product aggregate root.
//!
//! One document is one consistency unit: everything embedded here (locale
//! overrides, combinations, rules, snapshots) is written and read as a
//! whole. The field list reproduces the persisted layout field-for-field;
//! renaming anything breaks every consumer of the stored documents.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::UserId;

use crate::combination::Combination;
use crate::common::{
    Award, BrandSnapshot, CategoryRef, DefaultCategory, HighestOrderPrice, Image, OdooCategory,
    OurPick, ParentCategory, PinkUniversityGame, ReviewStats, SectionFlags, SeoMeta,
    SizeChartTable, StoreSnapshot, StorefrontContent, Tag, UserContribution, Video, default_true,
    locale_map_is_empty,
};
use crate::enums::{
    Classification, Condition, InactiveState, Locale, Platform, PurchaseType, Status,
    TacticalPromoType,
};
use crate::pack::PackProduct;
use crate::rules::{BogoRule, CuratedMaskBox, CuratedPlan, Discount, FrameRule, MaskDetail, Preorder};

/// Sparse per-locale override tree, keyed by the closed [`Locale`] set.
///
/// A `BTreeMap` keyed by the enum gives a total, documented iteration order
/// (enum declaration order) and rejects unknown locale codes during
/// deserialization instead of admitting them silently.
pub type LocaleMap<T> = BTreeMap<Locale, T>;

/// Locale override record for a product. Every field is optional; an absent
/// field falls back to the root-level field of the same meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductLocale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Derived by the normalizer; never written by callers directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_latin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keyword: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<DefaultCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<ParentCategory>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_whats_new: Option<SectionFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bundle_pack: Option<SectionFlags>,
    pub is_limited: bool,
    #[serde(default = "default_true")]
    pub is_active_in_review: bool,
    pub is_exclusive: bool,
    pub is_online: bool,
    pub is_product_testing: bool,
    pub is_dangerous: bool,
    pub is_kill_product: bool,
    pub is_liquid: bool,
    /// Brand-page most-popular and default product-list sort.
    pub is_most_popular: bool,
    /// Event tickets cannot be combined with other products in one order.
    pub is_product_ticket: bool,
    pub is_soco_event: bool,
    /// When true only super-product vouchers apply.
    pub is_non_discounted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bogo_rules: Vec<BogoRule>,
    pub two_days_total_views: i64,
    pub total_orders: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_sociolla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<Award>,
    pub review_stats: ReviewStats,
}

impl Default for ProductLocale {
    fn default() -> Self {
        Self {
            name: None,
            name_latin: None,
            description: None,
            short_description: None,
            how_to_use: None,
            ingredients: None,
            meta_title: None,
            meta_description: None,
            meta_keyword: None,
            categories: Vec::new(),
            default_category: None,
            parent_category: None,
            tags: Vec::new(),
            is_whats_new: None,
            is_bundle_pack: None,
            is_limited: false,
            is_active_in_review: true,
            is_exclusive: false,
            is_online: false,
            is_product_testing: false,
            is_dangerous: false,
            is_kill_product: false,
            is_liquid: false,
            is_most_popular: false,
            is_product_ticket: false,
            is_soco_event: false,
            is_non_discounted: false,
            images: Vec::new(),
            bogo_rules: Vec::new(),
            two_days_total_views: 0,
            total_orders: 0,
            url_sociolla: None,
            margin: None,
            awards: Vec::new(),
            review_stats: ReviewStats::default(),
        }
    }
}

/// The Product aggregate: one sellable item across every storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Assigned once from the `products` counter; immutable afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Legacy SQL identity, assigned from its own counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
    pub ninty_days_total_views: i64,
    pub ninty_days_total_views_vn: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "locale_map_is_empty")]
    pub i18n: LocaleMap<ProductLocale>,
    pub highest_order_price_lilla: HighestOrderPrice,
    /// URL-friendly, globally unique among non-deleted products. Derived
    /// from `my_sociolla_sql_id` + `name` by the slug collaborator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub is_slug_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_sociolla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,

    // Size chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclamer: Option<String>,
    pub size_chart_table: SizeChartTable,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,

    // SEO.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    pub lulla: SeoMeta,
    pub carasun: StorefrontContent,
    pub cosrx: StorefrontContent,

    /// Set when any combination carries any sort of discount.
    pub is_sale: bool,
    pub is_sale_lilla: bool,
    pub is_sale_sociolla_vn: bool,
    pub is_sale_cosrx: bool,
    pub is_flashsale: bool,
    pub is_pre_order: bool,
    pub is_pre_order_lilla: bool,
    pub is_pre_order_sociolla_vn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_promo_type: Option<TacticalPromoType>,
    /// Tracks featured products in tactical promos.
    pub is_featured_tracking_promo: bool,
    pub is_deleted: bool,
    /// Admin approval of products added by customers.
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_state: Option<InactiveState>,

    // Product active on which storefront.
    pub is_active_in_review: bool,
    pub is_active_in_sociolla: bool,
    /// Latest enabled date, default sort key.
    #[serde(default = "Utc::now")]
    pub enabled_at_sociolla: DateTime<Utc>,
    pub is_active_in_lulla: bool,
    pub is_active_in_offline_store: bool,
    pub is_active_in_event_microsite: bool,
    pub is_active_in_event_microsite_vn: bool,
    pub is_active_in_sociolla_vn: bool,
    pub is_active_in_review_vn: bool,
    pub is_active_in_lulla_vn: bool,
    pub is_active_in_offline_store_vn: bool,
    pub is_active_in_offline_store_lilla: bool,
    pub is_active_in_carasun: bool,
    pub is_active_in_cosrx: bool,
    pub is_active_in_b2b: bool,
    pub is_limited: bool,
    pub is_exclusive: bool,
    pub is_online: bool,
    pub is_disable_in_apps: bool,
    pub is_organic_product: bool,

    pub is_kill_product: bool,

    /// Omnichannel pickup availability at offline stores.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pick_up_at_stores: Vec<StoreSnapshot>,

    pub is_product_testing: bool,
    pub is_dangerous: bool,
    pub is_liquid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_type: Option<PurchaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpom_reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    pub total_orders: i64,
    pub total_store_orders: i64,
    pub total_wishlist: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_our_pick: Option<OurPick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_whats_new: Option<SectionFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bundle_pack: Option<SectionFlags>,
    pub is_most_popular: bool,
    pub is_product_ticket: bool,
    pub is_soco_event: bool,
    pub is_non_discounted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Hide the pack's member products on the detail page.
    pub hide_pack_content: bool,

    /// Used for `classification == mask_packages`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curated_mask_boxes: Vec<CuratedMaskBox>,

    /// Details of the products in the pack (bundle classifications only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pack_detail: Vec<PackProduct>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curated_plans: Vec<CuratedPlan>,
    /// Whether the subscription plan offers a free product.
    pub has_free_products: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    /// Sort key for subscription plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
    /// Sort key for curated boxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_ranking: Option<i64>,
    pub is_mask: bool,
    pub mask_detail: MaskDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bogo_rules: Vec<BogoRule>,
    pub is_pink_university_game: PinkUniversityGame,

    /// Active discounts applicable through product/brand/category rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Discount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preorder: Vec<Preorder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSnapshot>,
    /// Shop-by-department categories, capped at 3.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sbd_categories: Vec<CategoryRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odoo_category: Option<OdooCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<DefaultCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<ParentCategory>,

    /// At least one combination is compulsory for sellable classifications;
    /// the first one is treated as the default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub combinations: Vec<Combination>,
    /// Denormalized copy of the chosen default combination, for fast reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_combination: Option<Combination>,

    pub review_stats: ReviewStats,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<Award>,

    /// Beauty-profile recommendation tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by_user: Option<UserId>,
    pub user_contribution: UserContribution,
    /// Whether any combination is marked priority (offline).
    pub is_priority: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_days_total_views: Option<i64>,
    pub is_out_of_stock_sociolla: bool,
    pub is_out_of_stock_lilla: bool,
    pub is_out_of_stock_carasun: bool,
    pub is_out_of_stock_cosrx: bool,
    pub is_out_of_stock_sociolla_vn: bool,
    #[serde(default = "default_true")]
    pub is_in_stock_sociolla: bool,
    #[serde(default = "default_true")]
    pub is_in_stock_lulla: bool,
    #[serde(default = "default_true")]
    pub is_in_stock_sociolla_vn: bool,
    #[serde(default = "default_true")]
    pub is_in_stock_carasun: bool,
    #[serde(default = "default_true")]
    pub is_in_stock_cosrx: bool,
    /// New-arrival markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_for_sociolla_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_for_sociolla_vn_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_for_lilla_at: Option<DateTime<Utc>>,
    pub is_internal_brand_lulla: bool,
    pub is_internal_brand_sociolla: bool,
    pub is_internal_brand_sociolla_vn: bool,
    pub is_internal_brand_carasun: bool,
    pub is_internal_brand_cosrx: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_days_total_orders: Option<i64>,
    pub just_arrived: bool,
    pub position: i64,
    pub seven_days_total_orders: i64,
    pub thirty_days_total_orders: i64,
    pub is_discontinue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frame_rules: Vec<FrameRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpom_expired_at: Option<DateTime<Utc>>,
    pub is_for_moms: bool,
    pub is_for_baby_kids: bool,
    pub is_red_carpet: bool,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            my_sociolla_sql_id: None,
            ninty_days_total_views: 0,
            ninty_days_total_views_vn: 0,
            name: None,
            i18n: LocaleMap::new(),
            highest_order_price_lilla: HighestOrderPrice::default(),
            slug: None,
            is_slug_updated: false,
            url_sociolla: None,
            description: None,
            short_description: None,
            how_to_use: None,
            ingredients: None,
            disclamer: None,
            size_chart_table: SizeChartTable::default(),
            images: Vec::new(),
            videos: Vec::new(),
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            lulla: SeoMeta::default(),
            carasun: StorefrontContent::default(),
            cosrx: StorefrontContent::default(),
            is_sale: false,
            is_sale_lilla: false,
            is_sale_sociolla_vn: false,
            is_sale_cosrx: false,
            is_flashsale: false,
            is_pre_order: false,
            is_pre_order_lilla: false,
            is_pre_order_sociolla_vn: false,
            tactical_promo_type: None,
            is_featured_tracking_promo: false,
            is_deleted: false,
            status: Status::default(),
            inactive_state: None,
            is_active_in_review: false,
            is_active_in_sociolla: false,
            enabled_at_sociolla: Utc::now(),
            is_active_in_lulla: false,
            is_active_in_offline_store: false,
            is_active_in_event_microsite: false,
            is_active_in_event_microsite_vn: false,
            is_active_in_sociolla_vn: false,
            is_active_in_review_vn: false,
            is_active_in_lulla_vn: false,
            is_active_in_offline_store_vn: false,
            is_active_in_offline_store_lilla: false,
            is_active_in_carasun: false,
            is_active_in_cosrx: false,
            is_active_in_b2b: false,
            is_limited: false,
            is_exclusive: false,
            is_online: false,
            is_disable_in_apps: false,
            is_organic_product: false,
            is_kill_product: false,
            pick_up_at_stores: Vec::new(),
            is_product_testing: false,
            is_dangerous: false,
            is_liquid: false,
            condition: None,
            purchase_type: None,
            bpom_reg_no: None,
            margin: None,
            total_orders: 0,
            total_store_orders: 0,
            total_wishlist: 0,
            is_featured: None,
            is_our_pick: None,
            is_whats_new: None,
            is_bundle_pack: None,
            is_most_popular: false,
            is_product_ticket: false,
            is_soco_event: false,
            is_non_discounted: false,
            classification: None,
            hide_pack_content: false,
            curated_mask_boxes: Vec::new(),
            pack_detail: Vec::new(),
            curated_plans: Vec::new(),
            has_free_products: false,
            plan_logo_url: None,
            background_image_url: None,
            ranking: None,
            plan_ranking: None,
            is_mask: false,
            mask_detail: MaskDetail::default(),
            bogo_rules: Vec::new(),
            is_pink_university_game: PinkUniversityGame::default(),
            discounts: Vec::new(),
            preorder: Vec::new(),
            brand: None,
            sbd_categories: Vec::new(),
            categories: Vec::new(),
            odoo_category: None,
            default_category: None,
            parent_category: None,
            combinations: Vec::new(),
            default_combination: None,
            review_stats: ReviewStats::default(),
            awards: Vec::new(),
            tags: Vec::new(),
            added_by_user: None,
            user_contribution: UserContribution::default(),
            is_priority: false,
            platforms: Vec::new(),
            two_days_total_views: None,
            is_out_of_stock_sociolla: false,
            is_out_of_stock_lilla: false,
            is_out_of_stock_carasun: false,
            is_out_of_stock_cosrx: false,
            is_out_of_stock_sociolla_vn: false,
            is_in_stock_sociolla: true,
            is_in_stock_lulla: true,
            is_in_stock_sociolla_vn: true,
            is_in_stock_carasun: true,
            is_in_stock_cosrx: true,
            active_for_sociolla_at: None,
            active_for_sociolla_vn_at: None,
            active_for_lilla_at: None,
            is_internal_brand_lulla: false,
            is_internal_brand_sociolla: false,
            is_internal_brand_sociolla_vn: false,
            is_internal_brand_carasun: false,
            is_internal_brand_cosrx: false,
            two_days_total_orders: None,
            just_arrived: false,
            position: 0,
            seven_days_total_orders: 0,
            thirty_days_total_orders: 0,
            is_discontinue: false,
            created_by: None,
            updated_by: None,
            frame_rules: Vec::new(),
            bpom_expired_at: None,
            is_for_moms: false,
            is_for_baby_kids: false,
            is_red_carpet: false,
        }
    }
}

impl Product {
    /// The combination readers treat as default: the one flagged
    /// `is_default`, else the first in the list by convention.
    pub fn default_combination_ref(&self) -> Option<&Combination> {
        self.combinations
            .iter()
            .find(|c| c.is_flagged_default())
            .or_else(|| self.combinations.first())
    }

    /// Source fields the slug collaborator derives the slug from.
    pub fn slug_sources(&self) -> Vec<String> {
        let mut sources = Vec::with_capacity(2);
        if let Some(sql_id) = self.my_sociolla_sql_id {
            sources.push(sql_id.to_string());
        }
        if let Some(name) = &self.name {
            sources.push(name.clone());
        }
        sources
    }

    /// Every combination `my_sociolla_sql_id` carried by this document,
    /// including pack-member combinations (they share the global space).
    pub fn combination_sql_ids(&self) -> Vec<i64> {
        let own = self
            .combinations
            .iter()
            .filter_map(|c| c.my_sociolla_sql_id);
        let packed = self
            .pack_detail
            .iter()
            .flat_map(|p| p.combinations.iter().filter_map(|c| c.my_sociolla_sql_id));
        own.chain(packed).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combination::Combination;

    #[test]
    fn defaults_mirror_the_schema() {
        let product: Product = serde_json::from_str("{}").unwrap();
        assert_eq!(product.status, Status::WaitingApproval);
        assert!(!product.is_active_in_sociolla);
        assert!(product.is_in_stock_sociolla);
        assert!(product.is_in_stock_cosrx);
        assert!(!product.is_deleted);
        assert_eq!(product.position, 0);
        assert!(product.i18n.is_empty());
        assert!(product.combinations.is_empty());
    }

    #[test]
    fn serialization_keeps_wire_field_names() {
        let mut product = Product::default();
        product.name = Some("Serum".into());
        product.my_sociolla_sql_id = Some(42);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["name"], "Serum");
        assert_eq!(value["my_sociolla_sql_id"], 42);
        assert_eq!(value["status"], "waiting-approval");
        // Sparse: unset optional trees stay absent, not null.
        assert!(value.get("brand").is_none());
        assert!(value.get("i18n").is_none());
    }

    #[test]
    fn default_combination_prefers_the_flagged_entry() {
        let mut product = Product::default();
        let mut first = Combination::default();
        first.my_sociolla_sql_id = Some(1);
        let mut second = Combination::default();
        second.my_sociolla_sql_id = Some(2);
        second.is_default = Some(true);
        product.combinations = vec![first, second];
        assert_eq!(
            product.default_combination_ref().unwrap().my_sociolla_sql_id,
            Some(2)
        );
        // Without a flag, convention picks the first entry.
        product.combinations[1].is_default = None;
        assert_eq!(
            product.default_combination_ref().unwrap().my_sociolla_sql_id,
            Some(1)
        );
    }

    #[test]
    fn combination_sql_ids_cover_pack_members() {
        let mut product = Product::default();
        let mut own = Combination::default();
        own.my_sociolla_sql_id = Some(10);
        product.combinations = vec![own];
        let mut member = crate::pack::PackProduct::default();
        let mut chosen = crate::pack::PackCombination::default();
        chosen.my_sociolla_sql_id = Some(11);
        member.combinations = vec![chosen];
        product.pack_detail = vec![member];
        assert_eq!(product.combination_sql_ids(), vec![10, 11]);
    }

    #[test]
    fn unknown_root_locale_is_rejected() {
        let result = serde_json::from_value::<Product>(serde_json::json!({
            "i18n": { "id": { "name": "nama" } }
        }));
        assert!(result.is_err());
    }
}
