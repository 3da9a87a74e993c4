use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

/// The journal's lookup key: one calendar day.
///
/// Serialized as the ISO `YYYY-MM-DD` string, whose lexicographic order
/// matches chronological order.
pub type DateKey = NaiveDate;

/// The whole journal: date → entry. Iteration is chronological.
pub type EntryMap = BTreeMap<DateKey, Entry>;

/// One day's recorded result and/or notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Signed profit or loss for the day. `None` means no result recorded.
    #[serde(default)]
    pub pnl: Option<f64>,

    /// Free-text notes (may be empty)
    #[serde(default)]
    pub notes: String,

    /// Time of the last write. Informational only; records persisted
    /// without it load with the Unix epoch.
    #[serde(rename = "updated", default)]
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(pnl: Option<f64>, notes: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            pnl,
            notes: notes.into(),
            updated_at,
        }
    }

    /// Whether a record with these fields is allowed to exist in the store.
    ///
    /// An entry with no numeric result and blank notes is never stored.
    #[must_use]
    pub fn is_storable(pnl: Option<f64>, notes: &str) -> bool {
        pnl.is_some() || !notes.trim().is_empty()
    }

    /// `true` if this entry has content worth keeping.
    #[must_use]
    pub fn has_content(&self) -> bool {
        Self::is_storable(self.pnl, &self.notes)
    }

    /// PnL with a missing value counted as zero.
    #[must_use]
    pub fn pnl_or_zero(&self) -> f64 {
        self.pnl.unwrap_or(0.0)
    }
}

/// Parse a `YYYY-MM-DD` string into a [`DateKey`].
pub fn parse_date_key(s: &str) -> Result<DateKey, CoreError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(s.to_string()))
}

/// Render a [`DateKey`] in its canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date_key(date: DateKey) -> String {
    date.format("%Y-%m-%d").to_string()
}
