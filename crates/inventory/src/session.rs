//! Session context: the boundary the presentation layer talks to.
//!
//! A `Session` owns everything that is mutable for one operator session (the
//! store, the pending removal, the current page) so none of it lives in
//! ambient global state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smartwaste_core::{Clock, DomainError, DomainResult, Entity, ItemId, SystemClock};

use crate::config::SessionConfig;
use crate::dashboard::DashboardSummary;
use crate::item::{InventoryItem, ItemDraft};
use crate::ranking::{RankedItem, rank};
use crate::risk::{ExpiryStatus, classify};
use crate::seed::demo_drafts;
use crate::store::InventoryStore;
use crate::waste_log::{LogSummary, Outcome, WasteLogEntry};
use crate::workflow::{PendingRemoval, RemovalWorkflow};

/// Top-level views of the application.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Inventory,
    Logs,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Inventory, Page::Logs];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Logs => "logs",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    store: InventoryStore,
    workflow: RemovalWorkflow,
    page: Page,
    clock: C,
    config: SessionConfig,
}

impl<C: Clock> Session<C> {
    /// Empty session; ignores `config.seed_demo`.
    pub fn new(clock: C, config: SessionConfig) -> Self {
        Self {
            store: InventoryStore::new(),
            workflow: RemovalWorkflow::default(),
            page: Page::default(),
            clock,
            config,
        }
    }

    /// Session seeded with the demo items when `config.seed_demo` is set.
    pub fn start(clock: C, config: SessionConfig) -> DomainResult<Self> {
        let mut session = Self::new(clock, config);
        if session.config.seed_demo {
            let drafts = demo_drafts(session.today())?;
            // add in reverse so the first demo item ends up first in the list
            for draft in drafts.iter().rev() {
                session.add_item(draft)?;
            }
            tracing::info!(items = drafts.len(), "seeded demo inventory");
        }
        Ok(session)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ---- queries ----

    pub fn list_inventory(&self) -> &[InventoryItem] {
        self.store.list_inventory()
    }

    /// Full inventory listing in urgency order.
    pub fn ranked_inventory(&self) -> Vec<RankedItem> {
        self.store.ranked(self.today())
    }

    pub fn list_waste_log(&self) -> Vec<WasteLogEntry> {
        self.store.list_waste_log()
    }

    pub fn classify(&self, expiry: &str) -> DomainResult<ExpiryStatus> {
        classify(expiry, self.today())
    }

    pub fn rank(&self, items: &[InventoryItem]) -> Vec<RankedItem> {
        rank(items, self.today())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(&self.store, self.today(), self.config.top_urgent)
    }

    pub fn log_summary(&self) -> LogSummary {
        self.store.log_summary()
    }

    pub fn pending_removal(&self) -> Option<&PendingRemoval> {
        self.workflow.pending()
    }

    pub fn current_page(&self) -> Page {
        self.page
    }

    // ---- commands ----

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
    }

    pub fn add_item(&mut self, draft: &ItemDraft) -> DomainResult<InventoryItem> {
        let item = self
            .store
            .add_item(draft, self.clock.now())
            .inspect_err(|err| tracing::debug!(error = %err, "add item rejected"))?;
        tracing::info!(
            item_id = %item.id(),
            name = item.name(),
            expiry = %item.expiry(),
            "item added"
        );
        Ok(item)
    }

    /// Start the outcome workflow for an in-stock item.
    ///
    /// Replaces any removal that was already pending.
    pub fn request_removal(&mut self, item_id: ItemId) -> DomainResult<&PendingRemoval> {
        let item = self
            .store
            .get(item_id)
            .ok_or_else(|| DomainError::not_found(format!("item {item_id}")))?;
        let pending = self.store.request_removal(item);

        if let Some(previous) = self.workflow.request(pending) {
            tracing::debug!(replaced = %previous.item_id(), "pending removal replaced");
        }
        tracing::debug!(item_id = %item_id, "awaiting outcome");

        self.workflow
            .pending()
            .ok_or_else(|| DomainError::invariant("workflow lost its pending removal"))
    }

    pub fn cancel_pending_removal(&mut self) -> Option<PendingRemoval> {
        let cancelled = self.workflow.cancel();
        if let Some(pending) = &cancelled {
            tracing::debug!(item_id = %pending.item_id(), "removal cancelled");
        }
        cancelled
    }

    /// Submit the outcome for the pending removal.
    ///
    /// `None` is rejected with `MissingOutcome` and the removal stays pending.
    pub fn commit_outcome(
        &mut self,
        outcome: Option<Outcome>,
        notes: Option<&str>,
    ) -> DomainResult<WasteLogEntry> {
        let at = self.clock.now();
        let store = &mut self.store;
        let entry = self
            .workflow
            .submit(outcome, |pending, outcome| {
                store.commit_outcome(pending, outcome, notes, at)
            })
            .inspect_err(|err| tracing::debug!(error = %err, "outcome rejected"))?;

        tracing::info!(
            entry_id = %entry.id(),
            item_id = %entry.item_id(),
            outcome = %entry.outcome(),
            "outcome logged"
        );
        Ok(entry)
    }

    /// [`Self::commit_outcome`] with the outcome as raw form text.
    pub fn commit_outcome_input(
        &mut self,
        outcome: &str,
        notes: Option<&str>,
    ) -> DomainResult<WasteLogEntry> {
        let outcome = Outcome::parse_input(outcome)?;
        self.commit_outcome(outcome, notes)
    }

    /// Remove an item without logging an outcome. Fails with `NotFound` if
    /// the item is not in stock.
    pub fn remove_item_immediately(&mut self, item_id: ItemId) -> DomainResult<()> {
        self.store.remove_item_immediately(item_id, self.clock.now())?;
        tracing::info!(item_id = %item_id, "item removed without outcome");
        Ok(())
    }
}

impl Session<SystemClock> {
    /// Wall-clock session configured from the environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::start(SystemClock, SessionConfig::from_env())
    }
}
