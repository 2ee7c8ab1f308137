//! Outcome logging workflow: `Idle -> AwaitingOutcome -> Idle`.

use serde::Serialize;

use smartwaste_core::{DomainError, DomainResult, Entity, ItemId, ValidationKind};

use crate::item::InventoryItem;
use crate::waste_log::Outcome;

/// Handle for an item whose removal has been requested but not committed.
///
/// Carries a full snapshot of the item, so committing does not depend on the
/// item still being in stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingRemoval {
    item: InventoryItem,
}

impl PendingRemoval {
    pub fn new(item: InventoryItem) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &InventoryItem {
        &self.item
    }

    pub fn item_id(&self) -> ItemId {
        self.item.id()
    }
}

/// At most one removal is pending at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemovalWorkflow {
    #[default]
    Idle,
    AwaitingOutcome(PendingRemoval),
}

impl RemovalWorkflow {
    pub fn pending(&self) -> Option<&PendingRemoval> {
        match self {
            RemovalWorkflow::Idle => None,
            RemovalWorkflow::AwaitingOutcome(pending) => Some(pending),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RemovalWorkflow::Idle)
    }

    /// Start awaiting an outcome for `pending`.
    ///
    /// Last request wins: a previously pending removal is returned and dropped
    /// from the workflow.
    pub fn request(&mut self, pending: PendingRemoval) -> Option<PendingRemoval> {
        match core::mem::replace(self, RemovalWorkflow::AwaitingOutcome(pending)) {
            RemovalWorkflow::Idle => None,
            RemovalWorkflow::AwaitingOutcome(previous) => Some(previous),
        }
    }

    /// Discard the pending removal, if any.
    pub fn cancel(&mut self) -> Option<PendingRemoval> {
        match core::mem::take(self) {
            RemovalWorkflow::Idle => None,
            RemovalWorkflow::AwaitingOutcome(pending) => Some(pending),
        }
    }

    /// Validate the collected outcome and hand the pending removal to `commit`.
    ///
    /// The workflow returns to `Idle` only when `commit` succeeds; on any
    /// error the pending removal stays in place so the user can retry.
    pub fn submit<T, F>(&mut self, outcome: Option<Outcome>, commit: F) -> DomainResult<T>
    where
        F: FnOnce(PendingRemoval, Outcome) -> DomainResult<T>,
    {
        let RemovalWorkflow::AwaitingOutcome(pending) = &*self else {
            return Err(DomainError::invariant("no removal is pending"));
        };
        let outcome = outcome.ok_or(DomainError::validation(ValidationKind::MissingOutcome))?;

        let committed = commit(pending.clone(), outcome)?;
        *self = RemovalWorkflow::Idle;
        Ok(committed)
    }
}
