use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smartwaste_core::{DomainError, DomainResult, Entity, ItemId, ValidationKind};

use crate::expiry::ExpiryDate;
use crate::risk::{ExpiryStatus, classify_date};

/// Unit used when the draft leaves it blank.
pub const DEFAULT_UNIT: &str = "pcs";

/// A strictly positive, finite amount of stock.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(ValidationKind::InvalidQuantity))
        }
    }

    /// Parse quantity text as typed into a form.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(ValidationKind::InvalidQuantity))?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Raw "add item" input, exactly as collected from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    pub expiry: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            expiry: expiry.into(),
        }
    }
}

/// A perishable item currently in stock.
///
/// Items are never edited after creation; they only leave stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    unit: String,
    expiry: ExpiryDate,
}

impl InventoryItem {
    /// Validate a draft and build the item it describes.
    ///
    /// Checks run in form order: name, expiry, quantity. Name and unit are
    /// trimmed; a blank unit becomes [`DEFAULT_UNIT`].
    pub fn from_draft(id: ItemId, draft: &ItemDraft) -> DomainResult<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(ValidationKind::MissingName));
        }

        let expiry = draft.expiry.trim();
        if expiry.is_empty() {
            return Err(DomainError::validation(ValidationKind::MissingExpiry));
        }
        let expiry = ExpiryDate::parse(expiry)?;

        let quantity = Quantity::new(draft.quantity)?;

        let unit = match draft.unit.trim() {
            "" => DEFAULT_UNIT,
            unit => unit,
        };

        Ok(Self {
            id,
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            expiry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn expiry(&self) -> &ExpiryDate {
        &self.expiry
    }

    /// Risk classification of this item relative to `today`.
    pub fn status(&self, today: NaiveDate) -> ExpiryStatus {
        classify_date(self.expiry.date(), today)
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::risk::Tone;

    fn draft(name: &str, quantity: f64, unit: &str, expiry: &str) -> ItemDraft {
        ItemDraft::new(name, quantity, unit, expiry)
    }

    #[test]
    fn builds_item_from_valid_draft() {
        let id = ItemId::new();
        let item = InventoryItem::from_draft(id, &draft("Milk", 8.0, "L", "2026-01-22")).unwrap();
        assert_eq!(item.id(), id);
        assert_eq!(item.name(), "Milk");
        assert_eq!(item.quantity().value(), 8.0);
        assert_eq!(item.unit(), "L");
        assert_eq!(item.expiry().as_str(), "2026-01-22");
    }

    #[test]
    fn trims_name_and_defaults_blank_unit() {
        let item =
            InventoryItem::from_draft(ItemId::new(), &draft("  Basil ", 2.0, "   ", "2026-01-22"))
                .unwrap();
        assert_eq!(item.name(), "Basil");
        assert_eq!(item.unit(), DEFAULT_UNIT);
    }

    #[test]
    fn blank_name_is_missing_name() {
        let err = InventoryItem::from_draft(ItemId::new(), &draft(" \t", 1.0, "pcs", "2026-01-01"))
            .unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationKind::MissingName));
    }

    #[test]
    fn blank_expiry_is_missing_expiry() {
        let err =
            InventoryItem::from_draft(ItemId::new(), &draft("Eggs", 1.0, "pcs", "")).unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationKind::MissingExpiry));
    }

    #[test]
    fn impossible_expiry_is_invalid_date() {
        let err = InventoryItem::from_draft(ItemId::new(), &draft("Eggs", 1.0, "pcs", "2026-02-31"))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDate(_)));
    }

    #[test]
    fn non_positive_or_non_finite_quantity_is_rejected() {
        for q in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let eggs = draft("Eggs", q, "pcs", "2026-01-01");
            let err = InventoryItem::from_draft(ItemId::new(), &eggs).unwrap_err();
            assert_eq!(err, DomainError::Validation(ValidationKind::InvalidQuantity));
        }
    }

    #[test]
    fn quantity_parses_form_text() {
        assert_eq!(Quantity::parse(" 2.5 ").unwrap().value(), 2.5);
        assert_eq!(
            Quantity::parse("a dozen"),
            Err(DomainError::Validation(ValidationKind::InvalidQuantity))
        );
        assert_eq!(
            Quantity::parse("0"),
            Err(DomainError::Validation(ValidationKind::InvalidQuantity))
        );
    }

    #[test]
    fn status_uses_item_expiry() {
        let milk = draft("Milk", 1.0, "L", "2026-01-18");
        let item = InventoryItem::from_draft(ItemId::new(), &milk).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
        let status = item.status(today);
        assert_eq!(status.tone, Tone::Danger);
        assert_eq!(status.days, -1);
    }

    #[test]
    fn serializes_with_canonical_expiry() {
        let milk = draft("Milk", 8.0, "L", "2026-01-22");
        let item = InventoryItem::from_draft(ItemId::new(), &milk).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["quantity"], 8.0);
        assert_eq!(json["expiry"], "2026-01-22");
    }

    proptest! {
        /// Property: any non-blank name and positive quantity is accepted and
        /// preserved verbatim apart from trimming.
        #[test]
        fn valid_drafts_round_trip(
            name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
            quantity in 0.001f64..10_000.0,
            unit in "[a-zA-Z]{1,5}"
        ) {
            let item = InventoryItem::from_draft(
                ItemId::new(),
                &draft(&name, quantity, &unit, "2026-06-30"),
            ).unwrap();
            prop_assert_eq!(item.name(), name.trim());
            prop_assert_eq!(item.quantity().value(), quantity);
            prop_assert_eq!(item.unit(), unit.as_str());
        }
    }
}
