//! Promotional and merchandising rule records.
//!
//! Each rule list is independently timestamped and platform-scoped. The
//! rules are embedded by value: they are created and destroyed only as part
//! of a full product document rewrite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{RefId, ValueObject};

use crate::enums::{BogoPlatform, DeductionType, DiscountPlatform, FramePlatform, TacticalPromoType};

/// Store reference carried inside a discount (id + alias only).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountStore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Time-boxed percentage-or-amount deduction, scoped to storefronts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sociolla_sql_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_type: Option<DeductionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_for_sociolla: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_for_brand: Option<f64>,
    pub apply_discount_for: Vec<DiscountPlatform>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<DiscountStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_promo_type: Option<TacticalPromoType>,
    /// Discount priority flag.
    pub is_flashsale: bool,
    /// Discount priority after flash sale.
    pub is_tactical_sales: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_rule_id: Option<RefId>,
    /// Name of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_rule_name: Option<String>,
    // Flash-sale quota counters.
    pub total_quota: i64,
    pub max_item: i64,
    pub sold_quota: i64,
    pub starting_counter: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_show_as_percentage: Option<bool>,
}

impl Discount {
    /// Quota check consumed by pricing components: a flash-sale discount is
    /// only applicable while `sold_quota <= total_quota`.
    pub fn quota_exhausted(&self) -> bool {
        self.total_quota > 0 && self.sold_quota > self.total_quota
    }
}

/// Pre-order window with per-user and total quotas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_preorder_rules_id: Option<RefId>,
    pub total_quota: i64,
    pub sold_quota: i64,
    pub per_user_quota: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_sociolla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_lulla: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_sociolla_vn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_carasun: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active_in_cosrx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Buy-one-get-one rule. The locale-scoped copies carry no platform list;
/// the root list is scoped through [`BogoPlatform`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BogoRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_id: Option<RefId>,
    /// Product id of the free item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_id: Option<RefId>,
    pub quantity: i64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apply_discount_for: Vec<BogoPlatform>,
}

/// Decorative frame overlay on product imagery for a campaign window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub combination_ids: Vec<RefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub applicable_for: Vec<FramePlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One (product, combination) reference inside a mask tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskTierProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_id: Option<RefId>,
}

/// One quota tier of a mask subscription package.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskTier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<MaskTierProduct>,
}

/// Three fixed tiers; read only when `classification == mask_packages`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskDetail {
    pub tier1: MaskTier,
    pub tier2: MaskTier,
    pub tier3: MaskTier,
}

/// Reference to a curated mask box product (`classification == bundle_non_sellable`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratedMaskBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Plan info stored on curated boxes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratedPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ValueObject for Discount {}
impl ValueObject for Preorder {}
impl ValueObject for BogoRule {}
impl ValueObject for FrameRule {}
impl ValueObject for MaskDetail {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_quota_applicability() {
        let mut discount = Discount {
            total_quota: 10,
            sold_quota: 10,
            ..Discount::default()
        };
        assert!(!discount.quota_exhausted());
        discount.sold_quota = 11;
        assert!(discount.quota_exhausted());
        // Non-flash-sale discounts carry zero quotas and never exhaust.
        discount.total_quota = 0;
        discount.sold_quota = 0;
        assert!(!discount.quota_exhausted());
    }

    #[test]
    fn discount_defaults_mirror_the_schema() {
        let discount: Discount = serde_json::from_str("{}").unwrap();
        assert_eq!(discount.total_quota, 0);
        assert_eq!(discount.max_item, 0);
        assert_eq!(discount.starting_counter, 0);
        assert!(!discount.is_flashsale);
        assert!(!discount.is_tactical_sales);
        assert!(discount.apply_discount_for.is_empty());
    }

    #[test]
    fn bogo_platform_scoping_deserializes() {
        let rule: BogoRule = serde_json::from_value(serde_json::json!({
            "name": "buy 1 get 1",
            "quantity": 1,
            "apply_discount_for": ["sociolla", "sociolla_store"]
        }))
        .unwrap();
        assert_eq!(
            rule.apply_discount_for,
            vec![BogoPlatform::Sociolla, BogoPlatform::SociollaStore]
        );
        // "brand_page" belongs to the discount set, not the bogo set.
        let bad = serde_json::from_value::<BogoRule>(serde_json::json!({
            "apply_discount_for": ["brand_page"]
        }));
        assert!(bad.is_err());
    }
}
