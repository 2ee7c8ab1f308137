//! Urgency ordering over inventory items.

use core::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::item::InventoryItem;
use crate::risk::ExpiryStatus;

/// An item paired with its classification at ranking time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub item: InventoryItem,
    pub status: ExpiryStatus,
}

impl RankedItem {
    pub fn new(item: &InventoryItem, today: NaiveDate) -> Self {
        Self {
            item: item.clone(),
            status: item.status(today),
        }
    }
}

/// Most urgent first: tone rank, then canonical expiry text ascending.
pub fn urgency_cmp(a: &RankedItem, b: &RankedItem) -> Ordering {
    a.status
        .tone
        .rank()
        .cmp(&b.status.tone.rank())
        .then_with(|| a.item.expiry().as_str().cmp(b.item.expiry().as_str()))
}

/// Rank items by urgency without touching the input.
///
/// The sort is stable: items with the same tone and expiry keep their input
/// order.
pub fn rank(items: &[InventoryItem], today: NaiveDate) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items.iter().map(|i| RankedItem::new(i, today)).collect();
    ranked.sort_by(urgency_cmp);
    ranked
}

/// The first `n` items of [`rank`].
pub fn top_urgent(items: &[InventoryItem], today: NaiveDate, n: usize) -> Vec<RankedItem> {
    let mut ranked = rank(items, today);
    ranked.truncate(n);
    ranked
}
