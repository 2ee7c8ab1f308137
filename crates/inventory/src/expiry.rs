//! Canonical `YYYY-MM-DD` expiry dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smartwaste_core::{DomainError, DomainResult};

/// A real calendar date held in canonical `YYYY-MM-DD` form.
///
/// Parsing checks the shape and each component explicitly, so text such as
/// `2026-02-31` is rejected instead of rolling over into March. Ordering is
/// the lexicographic order of the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpiryDate {
    text: String,
    date: NaiveDate,
}

impl ExpiryDate {
    pub fn parse(input: &str) -> DomainResult<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(DomainError::invalid_date(format!(
                "expected YYYY-MM-DD, got {input:?}"
            )));
        }

        let component = |range: core::ops::Range<usize>| -> Option<u32> {
            bytes[range].iter().try_fold(0u32, |acc, b| {
                b.is_ascii_digit().then(|| acc * 10 + u32::from(*b - b'0'))
            })
        };

        let (Some(year), Some(month), Some(day)) =
            (component(0..4), component(5..7), component(8..10))
        else {
            return Err(DomainError::invalid_date(format!(
                "expected YYYY-MM-DD, got {input:?}"
            )));
        };

        // year has at most four digits, so it always fits in i32
        let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
            DomainError::invalid_date(format!("{input} is not a calendar date"))
        })?;

        Ok(Self {
            text: input.to_string(),
            date,
        })
    }

    /// Build from a date, failing for years that have no four-digit form.
    pub fn from_date(date: NaiveDate) -> DomainResult<Self> {
        Self::parse(&date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl core::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl core::str::FromStr for ExpiryDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExpiryDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExpiryDate> for String {
    fn from(value: ExpiryDate) -> Self {
        value.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_canonical_dates() {
        let d = ExpiryDate::parse("2026-01-19").unwrap();
        assert_eq!(d.as_str(), "2026-01-19");
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
    }

    #[test]
    fn accepts_leap_day_only_in_leap_years() {
        assert!(ExpiryDate::parse("2028-02-29").is_ok());
        assert!(matches!(
            ExpiryDate::parse("2026-02-29"),
            Err(DomainError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_day_that_would_roll_over() {
        let err = ExpiryDate::parse("2026-02-31").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidDate("2026-02-31 is not a calendar date".to_string())
        );
    }

    #[test]
    fn rejects_non_canonical_shapes() {
        for input in [
            "",
            "2026-1-19",
            "2026/01/19",
            "26-01-19",
            " 2026-01-19",
            "2026-01-19T00:00",
            "2026-0a-19",
            "+026-01-19",
            "2026-13-01",
            "2026-00-10",
            "2026-01-00",
        ] {
            assert!(
                matches!(ExpiryDate::parse(input), Err(DomainError::InvalidDate(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn serde_uses_canonical_text() {
        let d = ExpiryDate::parse("2026-03-01").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2026-03-01\"");

        let back: ExpiryDate = serde_json::from_str("\"2026-03-01\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<ExpiryDate>("\"2026-04-31\"").is_err());
    }

    proptest! {
        /// Property: every real calendar date survives formatting and parsing,
        /// and string order agrees with calendar order.
        #[test]
        fn canonical_text_orders_like_dates(a in 0i32..3_000_000, b in 0i32..3_000_000) {
            let da = NaiveDate::from_num_days_from_ce_opt(a + 1).unwrap();
            let db = NaiveDate::from_num_days_from_ce_opt(b + 1).unwrap();
            let ea = ExpiryDate::from_date(da).unwrap();
            let eb = ExpiryDate::from_date(db).unwrap();
            prop_assert_eq!(ea.date(), da);
            prop_assert_eq!(ea.as_str().cmp(eb.as_str()), da.cmp(&db));
        }
    }
}
