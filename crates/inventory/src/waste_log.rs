//! Outcome log: the append-only record of items leaving stock.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use smartwaste_core::{DomainError, DomainResult, Entity, ItemId, LogEntryId, ValidationKind};

use crate::expiry::ExpiryDate;
use crate::item::Quantity;
use crate::risk::Tone;
use crate::workflow::PendingRemoval;

/// What happened to an item when it left stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    SoldUsed,
    Donated,
    Wasted,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::SoldUsed, Outcome::Donated, Outcome::Wasted];

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::SoldUsed => "sold_used",
            Outcome::Donated => "donated",
            Outcome::Wasted => "wasted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::SoldUsed => "Sold / Used",
            Outcome::Donated => "Donated",
            Outcome::Wasted => "Wasted",
        }
    }

    /// Badge tone for the log view.
    pub fn tone(self) -> Tone {
        match self {
            Outcome::Wasted => Tone::Danger,
            Outcome::SoldUsed | Outcome::Donated => Tone::Ok,
        }
    }

    /// Sold, used and donated stock counts as saved.
    pub fn is_saved(self) -> bool {
        match self {
            Outcome::SoldUsed | Outcome::Donated => true,
            Outcome::Wasted => false,
        }
    }

    /// Parse form input. Blank means no outcome was picked; anything outside
    /// the closed set is `InvalidOutcome`.
    pub fn parse_input(input: &str) -> DomainResult<Option<Self>> {
        match input.trim() {
            "" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Outcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or(DomainError::validation(ValidationKind::InvalidOutcome))
    }
}

/// Immutable snapshot of an item at the moment its outcome was logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteLogEntry {
    id: LogEntryId,
    item_id: ItemId,
    name: String,
    quantity: Quantity,
    unit: String,
    expiry: ExpiryDate,
    outcome: Outcome,
    notes: Option<String>,
    #[serde(rename = "atISO")]
    at: DateTime<Utc>,
}

impl WasteLogEntry {
    /// Snapshot the pending item. Blank notes are stored as `None`.
    pub fn record(
        id: LogEntryId,
        pending: &PendingRemoval,
        outcome: Outcome,
        notes: Option<&str>,
        at: DateTime<Utc>,
    ) -> Self {
        let item = pending.item();
        Self {
            id,
            item_id: item.id(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            unit: item.unit().to_string(),
            expiry: item.expiry().clone(),
            outcome,
            notes: notes.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string),
            at,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
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

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Timestamp in ISO-8601 with millisecond precision, e.g.
    /// `2026-01-19T08:30:00.000Z`.
    pub fn at_iso(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Entity for WasteLogEntry {
    type Id = LogEntryId;

    fn id(&self) -> LogEntryId {
        self.id
    }
}

/// Saved vs wasted totals over the log.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub total: usize,
    pub saved: usize,
    pub wasted: usize,
}

impl LogSummary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a WasteLogEntry>) -> Self {
        entries
            .into_iter()
            .fold(LogSummary::default(), |mut acc, entry| {
                acc.total += 1;
                if entry.outcome().is_saved() {
                    acc.saved += 1;
                } else {
                    acc.wasted += 1;
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::item::{InventoryItem, ItemDraft};

    fn pending(name: &str) -> PendingRemoval {
        let item = InventoryItem::from_draft(
            ItemId::new(),
            &ItemDraft::new(name, 30.0, "pcs", "2026-01-18"),
        )
        .unwrap();
        PendingRemoval::new(item)
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn outcome_parses_only_the_closed_set() {
        assert_eq!("sold_used".parse::<Outcome>().unwrap(), Outcome::SoldUsed);
        assert_eq!("donated".parse::<Outcome>().unwrap(), Outcome::Donated);
        assert_eq!("wasted".parse::<Outcome>().unwrap(), Outcome::Wasted);
        for bad in ["Wasted", "sold", "", "binned"] {
            assert_eq!(
                bad.parse::<Outcome>(),
                Err(DomainError::Validation(ValidationKind::InvalidOutcome))
            );
        }
    }

    #[test]
    fn parse_input_separates_missing_from_invalid() {
        assert_eq!(Outcome::parse_input("  "), Ok(None));
        assert_eq!(Outcome::parse_input(" donated "), Ok(Some(Outcome::Donated)));
        assert_eq!(
            Outcome::parse_input("lost"),
            Err(DomainError::Validation(ValidationKind::InvalidOutcome))
        );
    }

    #[test]
    fn outcome_metadata() {
        assert_eq!(Outcome::SoldUsed.label(), "Sold / Used");
        assert_eq!(Outcome::Wasted.tone(), Tone::Danger);
        assert_eq!(Outcome::Donated.tone(), Tone::Ok);
        assert!(Outcome::Donated.is_saved());
        assert!(!Outcome::Wasted.is_saved());
    }

    #[test]
    fn record_snapshots_item_fields() {
        let p = pending("Tomatoes");
        let entry =
            WasteLogEntry::record(LogEntryId::new(), &p, Outcome::Wasted, Some("spoiled"), at());
        assert_eq!(entry.item_id(), p.item_id());
        assert_eq!(entry.name(), "Tomatoes");
        assert_eq!(entry.quantity().value(), 30.0);
        assert_eq!(entry.unit(), "pcs");
        assert_eq!(entry.expiry().as_str(), "2026-01-18");
        assert_eq!(entry.outcome(), Outcome::Wasted);
        assert_eq!(entry.notes(), Some("spoiled"));
        assert_eq!(entry.at_iso(), "2026-01-19T08:30:00.000Z");
    }

    #[test]
    fn blank_notes_are_dropped() {
        let p = pending("Milk");
        let entry =
            WasteLogEntry::record(LogEntryId::new(), &p, Outcome::Donated, Some("   "), at());
        assert_eq!(entry.notes(), None);
    }

    #[test]
    fn serializes_wire_names() {
        let p = pending("Milk");
        let entry = WasteLogEntry::record(LogEntryId::new(), &p, Outcome::SoldUsed, None, at());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["outcome"], "sold_used");
        assert_eq!(json["itemId"], p.item_id().to_string());
        assert!(json["atISO"].as_str().unwrap().starts_with("2026-01-19T08:30:00"));
        assert!(json["notes"].is_null());
    }

    #[test]
    fn summary_counts_saved_and_wasted() {
        let p = pending("Milk");
        let outcomes = [
            Outcome::SoldUsed,
            Outcome::Donated,
            Outcome::Wasted,
            Outcome::Wasted,
        ];
        let entries: Vec<WasteLogEntry> = outcomes
            .into_iter()
            .map(|o| WasteLogEntry::record(LogEntryId::new(), &p, o, None, at()))
            .collect();
        assert_eq!(
            LogSummary::from_entries(&entries),
            LogSummary {
                total: 4,
                saved: 2,
                wasted: 2
            }
        );
        assert_eq!(LogSummary::from_entries(&[]), LogSummary::default());
    }
}
