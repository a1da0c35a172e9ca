//! Closed enumerations of the persisted layout.
//!
//! Every enumerated field in the document shape is a member of one of these
//! sets; anything outside the set is a validation error, never silently
//! accepted. The three platform-scoping sets (discounts, bogo rules, frame
//! rules) overlap but are **not identical**, so each gets its own type.

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $s:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $s)] $variant, )+
        }

        impl $name {
            /// Every member of the closed set, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The persisted wire strings of the closed set, in declaration order.
            pub const ALLOWED: &'static [&'static str] = &[ $( $s, )+ ];

            /// The persisted wire string for this value.
            pub fn as_str(self) -> &'static str {
                match self { $( $name::$variant => $s, )+ }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// What kind of sellable (or non-sellable) entity a product row represents.
    Classification {
        SellableProducts => "sellable_products",
        GwpNonSellable => "gwp_non_sellable",
        BundleVirtual => "bundle_virtual",
        BundleNonSellable => "bundle_non_sellable",
        BundlePhysical => "bundle_physical",
        Egift => "egift",
        MaskPackages => "mask_packages",
        PaperBag => "paper_bag",
        Testers => "testers",
    }
}

impl Classification {
    /// Whether a product of this classification is directly purchasable and
    /// therefore must carry at least one combination.
    ///
    /// Gifts-with-purchase, curated mask boxes and testers are stocked but
    /// never sold on their own.
    pub fn is_sellable(self) -> bool {
        !matches!(
            self,
            Classification::GwpNonSellable
                | Classification::BundleNonSellable
                | Classification::Testers
        )
    }
}

string_enum! {
    /// Classification of a bundle member. Same set as [`Classification`]
    /// minus `paper_bag` (paper bags never appear inside a pack).
    PackClassification {
        SellableProducts => "sellable_products",
        GwpNonSellable => "gwp_non_sellable",
        BundleVirtual => "bundle_virtual",
        BundleNonSellable => "bundle_non_sellable",
        BundlePhysical => "bundle_physical",
        Egift => "egift",
        MaskPackages => "mask_packages",
        Testers => "testers",
    }
}

string_enum! {
    /// Admin approval state for customer-added products.
    Status {
        Approved => "approved",
        WaitingApproval => "waiting-approval",
        Rejected => "rejected",
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::WaitingApproval
    }
}

string_enum! {
    Condition {
        New => "new",
        Used => "used",
        Refurbished => "refurbished",
    }
}

string_enum! {
    PurchaseType {
        DirectPurchase => "direct_purchase",
        Consignment => "consignment",
    }
}

string_enum! {
    DeductionType {
        Percentage => "percentage",
        Amount => "amount",
    }
}

string_enum! {
    /// Storefront scoping for general discounts (`apply_discount_for`).
    DiscountPlatform {
        All => "all",
        Sociolla => "sociolla",
        Ios => "ios",
        Android => "android",
        BrandPage => "brand_page",
        OfflineStore => "offline_store",
        OfflineStoreVn => "offline_store_vn",
        Lulla => "lulla",
        LullaIos => "lulla_ios",
        LullaAndroid => "lulla_android",
        SociollaVn => "sociolla_vn",
        SociollaVnAndroid => "sociolla_vn_android",
        SociollaVnIos => "sociolla_vn_ios",
        AllVn => "all_vn",
        Carasun => "carasun",
        Cosrx => "cosrx",
    }
}

string_enum! {
    /// Storefront scoping for buy-one-get-one rules. Overlaps the discount
    /// set but drops the wildcard members and adds `sociolla_store`.
    BogoPlatform {
        OfflineStore => "offline_store",
        Ios => "ios",
        Android => "android",
        Sociolla => "sociolla",
        Lulla => "lulla",
        LullaIos => "lulla_ios",
        LullaAndroid => "lulla_android",
        SociollaVn => "sociolla_vn",
        SociollaVnAndroid => "sociolla_vn_android",
        SociollaVnIos => "sociolla_vn_ios",
        OfflineStoreVn => "offline_store_vn",
        Carasun => "carasun",
        Cosrx => "cosrx",
        SociollaStore => "sociolla_store",
    }
}

string_enum! {
    /// Storefront scoping for frame overlays (`applicable_for`).
    FramePlatform {
        All => "all",
        Sociolla => "sociolla",
        Ios => "ios",
        Android => "android",
        SociollaVn => "sociolla_vn",
        SociollaVnAndroid => "sociolla_vn_android",
        SociollaVnIos => "sociolla_vn_ios",
    }
}

string_enum! {
    /// Consumer-facing storefronts a product is listed on (root `platforms`).
    Platform {
        Sociolla => "sociolla",
        SociollaVn => "sociolla_vn",
        Lulla => "lulla",
        Carasun => "carasun",
        Cosrx => "cosrx",
    }
}

string_enum! {
    StoreType {
        PhysicalStore => "physical_store",
        VendingMachine => "vending_machine",
    }
}

impl Default for StoreType {
    fn default() -> Self {
        StoreType::PhysicalStore
    }
}

string_enum! {
    /// Electronic shelf label sizes.
    EslSize {
        S => "S",
        M => "M",
        Xl => "XL",
    }
}

string_enum! {
    TacticalPromoType {
        SociollaSale => "sociolla_sale",
        SociollaDeals => "sociolla_deals",
    }
}

string_enum! {
    InactiveState {
        No => "no",
        Temporary => "temporary",
        Permanent => "permanent",
    }
}

string_enum! {
    /// Merchandising life state of a combination.
    StatusItem {
        NotSelected => "not_selected",
        Active => "active",
        ToBeDiscontinue => "to_be_discontinue",
        Discontinue => "discontinue",
        New => "new",
    }
}

impl Default for StatusItem {
    fn default() -> Self {
        StatusItem::NotSelected
    }
}

string_enum! {
    /// Pack-member combination visibility. Capitalized on the wire.
    Visibility {
        Everywhere => "Everywhere",
        Nowhere => "Nowhere",
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Nowhere
    }
}

string_enum! {
    /// The closed set of supported locale codes for `i18n` override trees.
    ///
    /// The override maps are keyed by this type, so unknown locale keys are
    /// rejected at the boundary instead of being silently admitted.
    Locale {
        Vi => "vi",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_set_is_closed_and_exact() {
        assert_eq!(Classification::ALLOWED.len(), 9);
        assert_eq!(
            Classification::ALLOWED,
            &[
                "sellable_products",
                "gwp_non_sellable",
                "bundle_virtual",
                "bundle_non_sellable",
                "bundle_physical",
                "egift",
                "mask_packages",
                "paper_bag",
                "testers",
            ]
        );
        assert!(serde_json::from_str::<Classification>("\"not_a_real_value\"").is_err());
    }

    #[test]
    fn platform_scoping_sets_are_distinct() {
        assert_eq!(DiscountPlatform::ALLOWED.len(), 16);
        assert_eq!(BogoPlatform::ALLOWED.len(), 14);
        assert_eq!(FramePlatform::ALLOWED.len(), 7);
        // bogo scoping has no wildcard, but knows the physical store channel
        assert!(!BogoPlatform::ALLOWED.contains(&"all"));
        assert!(BogoPlatform::ALLOWED.contains(&"sociolla_store"));
        assert!(!DiscountPlatform::ALLOWED.contains(&"sociolla_store"));
        assert!(!FramePlatform::ALLOWED.contains(&"carasun"));
    }

    #[test]
    fn wire_strings_round_trip() {
        for status in Status::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        let status: Status = serde_json::from_str("\"waiting-approval\"").unwrap();
        assert_eq!(status, Status::WaitingApproval);
        assert_eq!(Status::default(), Status::WaitingApproval);
    }

    #[test]
    fn sellable_classifications() {
        assert!(Classification::SellableProducts.is_sellable());
        assert!(Classification::BundlePhysical.is_sellable());
        assert!(Classification::MaskPackages.is_sellable());
        assert!(!Classification::GwpNonSellable.is_sellable());
        assert!(!Classification::BundleNonSellable.is_sellable());
        assert!(!Classification::Testers.is_sellable());
    }
}
