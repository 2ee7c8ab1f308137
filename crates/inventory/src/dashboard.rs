//! Dashboard aggregates, computed on demand from the store's collections.

use chrono::NaiveDate;
use serde::Serialize;

use crate::item::InventoryItem;
use crate::ranking::RankedItem;
use crate::risk::{ExpiryStatus, Tone};
use crate::store::InventoryStore;
use crate::waste_log::LogSummary;

/// Number of in-stock items per tone.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToneCounts {
    pub danger: usize,
    pub warning: usize,
    pub ok: usize,
}

impl ToneCounts {
    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a InventoryItem>,
        today: NaiveDate,
    ) -> Self {
        let mut counts = ToneCounts::default();
        for item in items {
            match item.status(today).tone {
                Tone::Danger => counts.danger += 1,
                Tone::Warning => counts.warning += 1,
                Tone::Ok => counts.ok += 1,
            }
        }
        counts
    }

    pub fn get(&self, tone: Tone) -> usize {
        match tone {
            Tone::Danger => self.danger,
            Tone::Warning => self.warning,
            Tone::Ok => self.ok,
        }
    }
}

/// One row of the "top urgent items" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgentItem {
    pub item: InventoryItem,
    pub status: ExpiryStatus,
    pub badge: String,
    pub suggested_action: &'static str,
}

impl From<RankedItem> for UrgentItem {
    fn from(ranked: RankedItem) -> Self {
        Self {
            badge: ranked.status.badge_text(),
            suggested_action: ranked.status.suggested_action(),
            item: ranked.item,
            status: ranked.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub total_items: usize,
    pub counts: ToneCounts,
    pub top_urgent: Vec<UrgentItem>,
    pub log: LogSummary,
}

impl DashboardSummary {
    pub fn build(store: &InventoryStore, today: NaiveDate, top_n: usize) -> Self {
        Self {
            today,
            total_items: store.item_count(),
            counts: store.tone_counts(today),
            top_urgent: store
                .top_urgent(today, top_n)
                .into_iter()
                .map(UrgentItem::from)
                .collect(),
            log: store.log_summary(),
        }
    }
}
