use chrono::{DateTime, Utc};

use crate::models::entry::{DateKey, Entry, EntryMap};

/// Applies edits to the journal mapping.
///
/// Pure business logic — no I/O. Each operation takes the current snapshot
/// and returns the next one, so callers decide when to persist.
pub struct EntryService;

impl EntryService {
    pub fn new() -> Self {
        Self
    }

    /// Write one day's values.
    ///
    /// A missing PnL together with blank notes deletes the day instead of
    /// storing an empty record. Non-finite PnL values are treated as missing.
    #[must_use]
    pub fn upsert(
        &self,
        mut entries: EntryMap,
        date: DateKey,
        pnl: Option<f64>,
        notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> EntryMap {
        let pnl = pnl.filter(|v| v.is_finite());
        let notes = notes.into();

        if Entry::is_storable(pnl, &notes) {
            entries.insert(date, Entry::new(pnl, notes, now));
        } else {
            entries.remove(&date);
        }
        entries
    }

    /// Delete one day. Absent keys are a no-op.
    #[must_use]
    pub fn remove(&self, mut entries: EntryMap, date: DateKey) -> EntryMap {
        entries.remove(&date);
        entries
    }

    /// Drop everything.
    #[must_use]
    pub fn reset(&self) -> EntryMap {
        EntryMap::new()
    }
}

impl Default for EntryService {
    fn default() -> Self {
        Self::new()
    }
}
