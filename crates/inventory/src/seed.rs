//! Demo stock for a fresh session.

use chrono::{Days, NaiveDate};

use smartwaste_core::{DomainError, DomainResult};

use crate::item::ItemDraft;

/// (name, quantity, unit, days until expiry), in display order.
const DEMO_ITEMS: [(&str, f64, &str, u64); 3] = [
    ("Milk", 8.0, "L", 5),
    ("Chicken breast", 12.0, "pcs", 3),
    ("Tomatoes", 30.0, "pcs", 2),
];

/// Drafts for the demo items, with expiry dates relative to `today`.
pub fn demo_drafts(today: NaiveDate) -> DomainResult<Vec<ItemDraft>> {
    DEMO_ITEMS
        .iter()
        .map(|&(name, quantity, unit, offset)| -> DomainResult<ItemDraft> {
            let expiry = today
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| DomainError::invalid_date(format!("{today} + {offset} days")))?;
            Ok(ItemDraft::new(
                name,
                quantity,
                unit,
                expiry.format("%Y-%m-%d").to_string(),
            ))
        })
        .collect()
}
