//! Write-gate validation for product documents and update payloads.
//!
//! Validation never mutates. It collects every violation it can find in one
//! pass so callers surface the full list instead of fixing errors one at a
//! time. Uniqueness checks (slug, combination sql ids) consult a
//! [`UniquenessView`] supplied by the persistence layer.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use vitrine_core::DomainError;

use crate::enums::{
    BogoPlatform, Classification, Condition, DiscountPlatform, FramePlatform, InactiveState,
    Locale, PackClassification, Platform, PurchaseType, Status, StatusItem, TacticalPromoType,
};
use crate::latin::collation_key;
use crate::product::Product;

/// Shop-by-department category cap on one product.
pub const MAX_SBD_CATEGORIES: usize = 3;

/// What went wrong at one path of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value is not a member of the closed set for this field.
    Enum { allowed: &'static [&'static str] },
    /// Value collides with another document (or another entry in this one).
    Uniqueness,
    /// Too many or too few entries.
    Cardinality,
    /// JSON value has the wrong shape for the field.
    TypeMismatch,
    /// Locale key is outside the supported set.
    UnknownLocale,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum { allowed } => write!(f, "not one of {allowed:?}"),
            Self::Uniqueness => write!(f, "already in use"),
            Self::Cardinality => write!(f, "wrong number of entries"),
            Self::TypeMismatch => write!(f, "wrong value type"),
            Self::UnknownLocale => write!(f, "unsupported locale"),
        }
    }
}

/// One violation, addressed by a dotted document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// The full set of violations found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document failed validation: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<Violation>);

fn summarize(violations: &[Violation]) -> String {
    let first = violations
        .first()
        .map(Violation::to_string)
        .unwrap_or_default();
    format!("{} violation(s), first: {first}", violations.len())
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::validation(errors.to_string())
    }
}

/// Persistence-side uniqueness oracle.
///
/// `slug_taken` receives the collation key of the candidate slug and must
/// answer over non-deleted documents only, excluding the document being
/// written.
pub trait UniquenessView {
    fn slug_taken(&self, slug_key: &str) -> bool;
    fn combination_sql_id_taken(&self, sql_id: i64) -> bool;
}

/// Stateless validator over full documents and partial update payloads.
pub struct Validator;

impl Validator {
    /// Validate a complete document before it is persisted.
    pub fn validate(product: &Product, view: &dyn UniquenessView) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        // Slug uniqueness is scoped to live documents; a soft-deleted
        // document releases its slug.
        if !product.is_deleted {
            if let Some(slug) = &product.slug {
                if view.slug_taken(&collation_key(slug)) {
                    violations.push(Violation::new("slug", ViolationKind::Uniqueness));
                }
            }
        }

        // Sellable products must carry at least one combination. An unset
        // classification counts as sellable.
        let sellable = product
            .classification
            .map_or(true, |c| c.is_sellable());
        if sellable && product.combinations.is_empty() {
            violations.push(Violation::new("combinations", ViolationKind::Cardinality));
        }

        if product.sbd_categories.len() > MAX_SBD_CATEGORIES {
            violations.push(Violation::new("sbd_categories", ViolationKind::Cardinality));
        }

        let defaults = product
            .combinations
            .iter()
            .filter(|c| c.is_flagged_default())
            .count();
        if defaults > 1 {
            violations.push(Violation::new("combinations", ViolationKind::Cardinality));
        }

        // Combination sql ids live in one global space: reject duplicates
        // within the document and collisions with other documents.
        let mut seen = HashSet::new();
        for sql_id in product.combination_sql_ids() {
            if !seen.insert(sql_id) || view.combination_sql_id_taken(sql_id) {
                violations.push(Violation::new(
                    "combinations.my_sociolla_sql_id",
                    ViolationKind::Uniqueness,
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    /// Validate a partial update payload before it is merged.
    ///
    /// The payload is raw JSON: only the paths it touches are checked, and
    /// every enum-valued path must stay inside its closed set.
    pub fn validate_patch(patch: &Value) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        let Some(root) = patch.as_object() else {
            violations.push(Violation::new("", ViolationKind::TypeMismatch));
            return Err(ValidationErrors(violations));
        };

        check_enum(&mut violations, root, "status", "status", Status::ALLOWED);
        check_enum(
            &mut violations,
            root,
            "inactive_state",
            "inactive_state",
            InactiveState::ALLOWED,
        );
        check_enum(
            &mut violations,
            root,
            "classification",
            "classification",
            Classification::ALLOWED,
        );
        check_enum(
            &mut violations,
            root,
            "condition",
            "condition",
            Condition::ALLOWED,
        );
        check_enum(
            &mut violations,
            root,
            "purchase_type",
            "purchase_type",
            PurchaseType::ALLOWED,
        );
        check_enum(
            &mut violations,
            root,
            "tactical_promo_type",
            "tactical_promo_type",
            TacticalPromoType::ALLOWED,
        );
        check_enum_array(&mut violations, root, "platforms", "platforms", Platform::ALLOWED);

        if let Some(i18n) = root.get("i18n") {
            match i18n.as_object() {
                Some(map) => {
                    for key in map.keys() {
                        if !Locale::ALLOWED.contains(&key.as_str()) {
                            violations.push(Violation::new(
                                format!("i18n.{key}"),
                                ViolationKind::UnknownLocale,
                            ));
                        }
                    }
                }
                None => violations.push(Violation::new("i18n", ViolationKind::TypeMismatch)),
            }
        }

        if let Some(sbd) = root.get("sbd_categories") {
            match sbd.as_array() {
                Some(entries) if entries.len() > MAX_SBD_CATEGORIES => {
                    violations.push(Violation::new("sbd_categories", ViolationKind::Cardinality));
                }
                Some(_) => {}
                None => {
                    violations.push(Violation::new("sbd_categories", ViolationKind::TypeMismatch));
                }
            }
        }

        check_rule_arrays(&mut violations, root, "");

        if let Some(combinations) = root.get("combinations") {
            match combinations.as_array() {
                Some(entries) => {
                    for (i, entry) in entries.iter().enumerate() {
                        let Some(obj) = entry.as_object() else {
                            violations.push(Violation::new(
                                format!("combinations[{i}]"),
                                ViolationKind::TypeMismatch,
                            ));
                            continue;
                        };
                        check_enum(
                            &mut violations,
                            obj,
                            "status_item",
                            &format!("combinations[{i}].status_item"),
                            StatusItem::ALLOWED,
                        );
                        check_rule_arrays(&mut violations, obj, &format!("combinations[{i}]."));
                    }
                }
                None => {
                    violations.push(Violation::new("combinations", ViolationKind::TypeMismatch));
                }
            }
        }

        if let Some(pack) = root.get("pack_detail") {
            match pack.as_array() {
                Some(entries) => {
                    for (i, entry) in entries.iter().enumerate() {
                        if let Some(obj) = entry.as_object() {
                            check_enum(
                                &mut violations,
                                obj,
                                "classification",
                                &format!("pack_detail[{i}].classification"),
                                PackClassification::ALLOWED,
                            );
                        }
                    }
                }
                None => {
                    violations.push(Violation::new("pack_detail", ViolationKind::TypeMismatch));
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }
}

/// Discount, bogo and frame rules each scope to their own platform set.
fn check_rule_arrays(
    violations: &mut Vec<Violation>,
    obj: &serde_json::Map<String, Value>,
    prefix: &str,
) {
    check_nested_enum_arrays(
        violations,
        obj,
        "discounts",
        "apply_discount_for",
        prefix,
        DiscountPlatform::ALLOWED,
    );
    check_nested_enum_arrays(
        violations,
        obj,
        "bogo_rules",
        "apply_discount_for",
        prefix,
        BogoPlatform::ALLOWED,
    );
    check_nested_enum_arrays(
        violations,
        obj,
        "frame_rules",
        "applicable_for",
        prefix,
        FramePlatform::ALLOWED,
    );
}

fn check_enum(
    violations: &mut Vec<Violation>,
    obj: &serde_json::Map<String, Value>,
    field: &str,
    path: &str,
    allowed: &'static [&'static str],
) {
    match obj.get(field) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => {
            if !allowed.contains(&s.as_str()) {
                violations.push(Violation::new(path, ViolationKind::Enum { allowed }));
            }
        }
        Some(_) => violations.push(Violation::new(path, ViolationKind::TypeMismatch)),
    }
}

fn check_enum_array(
    violations: &mut Vec<Violation>,
    obj: &serde_json::Map<String, Value>,
    field: &str,
    path: &str,
    allowed: &'static [&'static str],
) {
    match obj.get(field) {
        None | Some(Value::Null) => {}
        Some(Value::Array(values)) => {
            for (i, value) in values.iter().enumerate() {
                match value.as_str() {
                    Some(s) if allowed.contains(&s) => {}
                    Some(_) => violations.push(Violation::new(
                        format!("{path}[{i}]"),
                        ViolationKind::Enum { allowed },
                    )),
                    None => violations.push(Violation::new(
                        format!("{path}[{i}]"),
                        ViolationKind::TypeMismatch,
                    )),
                }
            }
        }
        Some(_) => violations.push(Violation::new(path, ViolationKind::TypeMismatch)),
    }
}

fn check_nested_enum_arrays(
    violations: &mut Vec<Violation>,
    obj: &serde_json::Map<String, Value>,
    rules_field: &str,
    platforms_field: &str,
    prefix: &str,
    allowed: &'static [&'static str],
) {
    let Some(Value::Array(rules)) = obj.get(rules_field) else {
        if matches!(obj.get(rules_field), Some(v) if !v.is_null()) {
            violations.push(Violation::new(
                format!("{prefix}{rules_field}"),
                ViolationKind::TypeMismatch,
            ));
        }
        return;
    };
    for (i, rule) in rules.iter().enumerate() {
        if let Some(rule_obj) = rule.as_object() {
            check_enum_array(
                violations,
                rule_obj,
                platforms_field,
                &format!("{prefix}{rules_field}[{i}].{platforms_field}"),
                allowed,
            );
        }
    }
}
