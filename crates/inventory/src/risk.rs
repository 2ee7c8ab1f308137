//! Expiry-risk classification.
//!
//! Both dates are plain calendar dates, so the day difference is exact and
//! independent of time of day or daylight-saving shifts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smartwaste_core::DomainResult;

use crate::expiry::ExpiryDate;

/// Items expiring within this many days (inclusive) are `Warning`.
pub const WARNING_WINDOW_DAYS: i64 = 2;

/// Risk bucket. Declaration order is urgency order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Danger,
    Warning,
    Ok,
}

impl Tone {
    /// Urgency rank: lower is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Tone::Danger => 0,
            Tone::Warning => 1,
            Tone::Ok => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Ok => "ok",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Danger => "Overdue",
            Tone::Warning => "Expiring soon",
            Tone::Ok => "OK",
        }
    }

    pub fn suggested_action(self) -> &'static str {
        match self {
            Tone::Danger => "Dispose / log waste",
            Tone::Warning => "Use first / apply discount",
            Tone::Ok => "Monitor",
        }
    }
}

impl core::fmt::Display for Tone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived classification of one expiry date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryStatus {
    pub tone: Tone,
    /// Days until expiry; negative when overdue.
    pub days: i64,
    pub label: &'static str,
}

impl ExpiryStatus {
    /// Badge text: "OK", or the label with the day count, e.g. "Overdue (-1d)".
    pub fn badge_text(&self) -> String {
        match self.tone {
            Tone::Ok => self.label.to_string(),
            Tone::Danger | Tone::Warning => format!("{} ({}d)", self.label, self.days),
        }
    }

    pub fn suggested_action(&self) -> &'static str {
        self.tone.suggested_action()
    }
}

/// Whole days from `today` until `expiry`.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

pub fn tone_for_days(days: i64) -> Tone {
    if days < 0 {
        Tone::Danger
    } else if days <= WARNING_WINDOW_DAYS {
        Tone::Warning
    } else {
        Tone::Ok
    }
}

/// Classify an already-validated date.
pub fn classify_date(expiry: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    let days = days_until(expiry, today);
    let tone = tone_for_days(days);
    ExpiryStatus {
        tone,
        days,
        label: tone.label(),
    }
}

/// Classify canonical `YYYY-MM-DD` text.
///
/// Fails with `InvalidDate` for malformed or non-existent dates.
pub fn classify(expiry: &str, today: NaiveDate) -> DomainResult<ExpiryStatus> {
    let expiry = ExpiryDate::parse(expiry)?;
    Ok(classify_date(expiry.date(), today))
}
