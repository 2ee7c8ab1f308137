//! Perishable inventory and outcome logging.
//!
//! This crate contains the business rules (expiry-risk classification,
//! urgency ranking, the in-memory store and the removal workflow) as
//! deterministic domain logic. "Today" always comes from an injected
//! [`smartwaste_core::Clock`].

pub mod config;
pub mod dashboard;
pub mod expiry;
pub mod item;
pub mod ranking;
pub mod risk;
pub mod seed;
pub mod session;
pub mod store;
pub mod waste_log;
pub mod workflow;

pub use config::SessionConfig;
pub use dashboard::{DashboardSummary, ToneCounts, UrgentItem};
pub use expiry::ExpiryDate;
pub use item::{DEFAULT_UNIT, InventoryItem, ItemDraft, Quantity};
pub use ranking::{RankedItem, rank, top_urgent};
pub use risk::{ExpiryStatus, Tone, classify, classify_date};
pub use session::{Page, Session};
pub use store::{InventoryStore, StoreCommand, StoreEvent};
pub use waste_log::{LogSummary, Outcome, WasteLogEntry};
pub use workflow::{PendingRemoval, RemovalWorkflow};
