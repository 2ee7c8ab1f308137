//! `smartwaste-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod aggregate;
pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::Aggregate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationKind};
pub use id::{ItemId, LogEntryId};
