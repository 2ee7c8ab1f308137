use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use smartwaste_core::{Aggregate, DomainError, DomainResult, Entity, ItemId, LogEntryId};
use smartwaste_events::{Event, execute};

use crate::dashboard::ToneCounts;
use crate::item::{InventoryItem, ItemDraft};
use crate::ranking::{RankedItem, rank, top_urgent};
use crate::waste_log::{LogSummary, Outcome, WasteLogEntry};
use crate::workflow::PendingRemoval;

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItem {
    pub item_id: ItemId,
    pub draft: ItemDraft,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItemImmediately (no log entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItemImmediately {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: CommitOutcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    pub entry_id: LogEntryId,
    pub pending: PendingRemoval,
    pub outcome: Outcome,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    AddItem(AddItem),
    RemoveItemImmediately(RemoveItemImmediately),
    CommitOutcome(CommitOutcome),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemAdded {
    pub item: InventoryItem,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRemoved {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OutcomeLogged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeLogged {
    pub entry: WasteLogEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StoreEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    OutcomeLogged(OutcomeLogged),
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::ItemAdded(_) => "inventory.item.added",
            StoreEvent::ItemRemoved(_) => "inventory.item.removed",
            StoreEvent::OutcomeLogged(_) => "inventory.outcome.logged",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::ItemAdded(e) => e.occurred_at,
            StoreEvent::ItemRemoved(e) => e.occurred_at,
            StoreEvent::OutcomeLogged(e) => e.entry.at(),
        }
    }
}

/// In-memory inventory: the in-stock items plus the append-only outcome log.
///
/// Every mutation goes through [`Aggregate::handle`] (validate, emit events)
/// and [`Aggregate::apply`] (evolve state), so a rejected command never
/// changes anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    log: Vec<WasteLogEntry>,
    version: u64,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft`, assign a fresh id and put the item at the front.
    pub fn add_item(
        &mut self,
        draft: &ItemDraft,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryItem> {
        let item_id = ItemId::new();
        self.dispatch(&StoreCommand::AddItem(AddItem {
            item_id,
            draft: draft.clone(),
            occurred_at: at,
        }))?;
        self.get(item_id)
            .cloned()
            .ok_or_else(|| DomainError::invariant("added item missing from stock"))
    }

    /// Remove an item without logging an outcome.
    ///
    /// Fails with `NotFound` if the id is not in stock.
    pub fn remove_item_immediately(
        &mut self,
        item_id: ItemId,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.dispatch(&StoreCommand::RemoveItemImmediately(RemoveItemImmediately {
            item_id,
            occurred_at: at,
        }))?;
        Ok(())
    }

    /// Begin the outcome workflow for `item`. Does not touch the store.
    pub fn request_removal(&self, item: &InventoryItem) -> PendingRemoval {
        PendingRemoval::new(item.clone())
    }

    /// Log the outcome and take the item out of stock, as one unit.
    ///
    /// If the item already left stock the entry is still written from the
    /// pending snapshot and the removal is skipped. The handle is consumed, so
    /// one request yields at most one log entry:
    ///
    /// ```compile_fail
    /// use chrono::Utc;
    /// use smartwaste_inventory::{InventoryStore, ItemDraft, Outcome};
    ///
    /// let mut store = InventoryStore::new();
    /// let draft = ItemDraft::new("Milk", 8.0, "L", "2026-01-24");
    /// let item = store.add_item(&draft, Utc::now()).unwrap();
    /// let pending = store.request_removal(&item);
    /// store.commit_outcome(pending, Outcome::Wasted, None, Utc::now()).unwrap();
    /// store.commit_outcome(pending, Outcome::Wasted, None, Utc::now()).unwrap();
    /// ```
    pub fn commit_outcome(
        &mut self,
        pending: PendingRemoval,
        outcome: Outcome,
        notes: Option<&str>,
        at: DateTime<Utc>,
    ) -> DomainResult<WasteLogEntry> {
        let entry_id = LogEntryId::new();
        self.dispatch(&StoreCommand::CommitOutcome(CommitOutcome {
            entry_id,
            pending,
            outcome,
            notes: notes.map(str::to_string),
            occurred_at: at,
        }))?;
        self.log
            .iter()
            .rev()
            .find(|e| e.id() == entry_id)
            .cloned()
            .ok_or_else(|| DomainError::invariant("logged entry missing from log"))
    }

    pub fn get(&self, item_id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id() == item_id)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.get(item_id).is_some()
    }

    /// In-stock items, most recently added first.
    pub fn list_inventory(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Log entries, most recent first. Entries with the same timestamp are
    /// ordered by most recently appended first.
    pub fn list_waste_log(&self) -> Vec<WasteLogEntry> {
        let mut entries: Vec<WasteLogEntry> = self.log.iter().rev().cloned().collect();
        entries.sort_by(|a, b| b.at().cmp(&a.at()));
        entries
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn tone_counts(&self, today: NaiveDate) -> ToneCounts {
        ToneCounts::from_items(&self.items, today)
    }

    pub fn log_summary(&self) -> LogSummary {
        LogSummary::from_entries(&self.log)
    }

    pub fn ranked(&self, today: NaiveDate) -> Vec<RankedItem> {
        rank(&self.items, today)
    }

    pub fn top_urgent(&self, today: NaiveDate, n: usize) -> Vec<RankedItem> {
        top_urgent(&self.items, today, n)
    }
}

impl Aggregate for InventoryStore {
    type Command = StoreCommand;
    type Event = StoreEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StoreEvent::ItemAdded(e) => {
                self.items.insert(0, e.item.clone());
            }
            StoreEvent::ItemRemoved(e) => {
                self.items.retain(|i| i.id() != e.item_id);
            }
            StoreEvent::OutcomeLogged(e) => {
                self.log.push(e.entry.clone());
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StoreCommand::AddItem(cmd) => self.handle_add(cmd),
            StoreCommand::RemoveItemImmediately(cmd) => self.handle_remove(cmd),
            StoreCommand::CommitOutcome(cmd) => self.handle_commit(cmd),
        }
    }
}

impl InventoryStore {
    /// Decide and apply one command, tracing every applied event.
    fn dispatch(&mut self, command: &StoreCommand) -> DomainResult<Vec<StoreEvent>> {
        let events = execute(self, command)?;
        for event in &events {
            tracing::trace!(
                event_type = event.event_type(),
                event_version = event.version(),
                store_version = self.version,
                "applied"
            );
        }
        Ok(events)
    }

    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<StoreEvent>, DomainError> {
        if self.contains(cmd.item_id) {
            return Err(DomainError::invariant("item id already in stock"));
        }
        let item = InventoryItem::from_draft(cmd.item_id, &cmd.draft)?;
        Ok(vec![StoreEvent::ItemAdded(ItemAdded {
            item,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItemImmediately) -> Result<Vec<StoreEvent>, DomainError> {
        if !self.contains(cmd.item_id) {
            return Err(DomainError::not_found(format!("item {}", cmd.item_id)));
        }
        Ok(vec![StoreEvent::ItemRemoved(ItemRemoved {
            item_id: cmd.item_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_commit(&self, cmd: &CommitOutcome) -> Result<Vec<StoreEvent>, DomainError> {
        if self.log.iter().any(|e| e.id() == cmd.entry_id) {
            return Err(DomainError::invariant("log entry id already used"));
        }

        let entry = WasteLogEntry::record(
            cmd.entry_id,
            &cmd.pending,
            cmd.outcome,
            cmd.notes.as_deref(),
            cmd.occurred_at,
        );
        let mut events = vec![StoreEvent::OutcomeLogged(OutcomeLogged { entry })];

        // already gone from stock: the log entry alone satisfies the commit
        let item_id = cmd.pending.item_id();
        if self.contains(item_id) {
            events.push(StoreEvent::ItemRemoved(ItemRemoved {
                item_id,
                occurred_at: cmd.occurred_at,
            }));
        }
        Ok(events)
    }
}
