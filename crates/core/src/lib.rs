pub mod display;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{DateTime, NaiveDate, Utc};
use models::{
    analytics::{MonthReport, MonthlyStats},
    calendar::{MonthMatrix, YearMonth},
    chart::SeriesPoint,
    entry::{DateKey, Entry, EntryMap},
    settings::Settings,
};
use services::{
    aggregation_service::AggregationService, calendar_service::CalendarService,
    entry_service::EntryService,
};
use storage::{kv::KeyValueStore, manager::StorageManager};
use tracing::{debug, info};

use errors::CoreError;

/// Query parameter that wipes the persisted journal at startup.
pub const RESET_QUERY_PARAM: &str = "reset";

/// Main entry point for the PnL Journal core library.
/// Owns the storage handle, the current journal snapshot and the viewed month.
#[must_use]
pub struct PnlJournal {
    store: Box<dyn KeyValueStore>,
    settings: Settings,
    entries: EntryMap,
    viewed: YearMonth,
    entry_service: EntryService,
    calendar_service: CalendarService,
    aggregation_service: AggregationService,
}

impl std::fmt::Debug for PnlJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PnlJournal")
            .field("entries", &self.entries.len())
            .field("settings", &self.settings)
            .field("viewed", &self.viewed.to_string())
            .finish()
    }
}

impl PnlJournal {
    /// Open a journal backed by `store`, viewing the month containing `today`.
    /// Unreadable persisted data yields an empty journal.
    pub fn open(
        store: Box<dyn KeyValueStore>,
        settings: Settings,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let entries = StorageManager::load(store.as_ref(), &settings.storage_key);
        Ok(Self::build(store, settings, entries, today))
    }

    /// Like [`open`](Self::open), but honours a startup query string
    /// (e.g. `"?reset=1"`): when it requests a reset, persisted data is
    /// cleared and the journal starts empty.
    pub fn open_with_query(
        store: Box<dyn KeyValueStore>,
        settings: Settings,
        today: NaiveDate,
        query: &str,
    ) -> Result<Self, CoreError> {
        if !reset_requested(query) {
            return Self::open(store, settings, today);
        }
        settings.validate()?;
        let mut journal = Self::build(store, settings, EntryMap::new(), today);
        info!(key = %journal.settings.storage_key, "reset requested at startup");
        StorageManager::clear(journal.store.as_mut(), &journal.settings.storage_key);
        Ok(journal)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Record a day's PnL and notes, timestamped now, and persist.
    /// A missing PnL with blank notes deletes the day.
    pub fn upsert(&mut self, date: DateKey, pnl: Option<f64>, notes: impl Into<String>) {
        self.upsert_at(date, pnl, notes, Utc::now());
    }

    /// [`upsert`](Self::upsert) with an explicit write timestamp.
    pub fn upsert_at(
        &mut self,
        date: DateKey,
        pnl: Option<f64>,
        notes: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = self.entry_service.upsert(entries, date, pnl, notes, now);
        debug!(%date, stored = self.entries.contains_key(&date), "upsert");
        self.persist();
    }

    /// Delete a day unconditionally and persist.
    pub fn remove(&mut self, date: DateKey) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = self.entry_service.remove(entries, date);
        debug!(%date, "remove");
        self.persist();
    }

    /// Drop every entry and clear persisted state.
    pub fn reset(&mut self) {
        self.entries = self.entry_service.reset();
        info!(key = %self.settings.storage_key, "journal reset");
        StorageManager::clear(self.store.as_mut(), &self.settings.storage_key);
    }

    // ── Entries ─────────────────────────────────────────────────────

    /// The full journal, oldest first.
    #[must_use]
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, date: DateKey) -> Option<&Entry> {
        self.entries.get(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Close the journal and hand back its storage handle.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    // ── Navigation ──────────────────────────────────────────────────

    #[must_use]
    pub fn viewed_month(&self) -> YearMonth {
        self.viewed
    }

    pub fn set_viewed_month(&mut self, month: YearMonth) {
        self.viewed = month;
    }

    pub fn next_month(&mut self) -> YearMonth {
        self.viewed = self.viewed.next();
        self.viewed
    }

    pub fn prev_month(&mut self) -> YearMonth {
        self.viewed = self.viewed.prev();
        self.viewed
    }

    /// View the month containing `date`.
    pub fn go_to(&mut self, date: NaiveDate) -> YearMonth {
        self.viewed = YearMonth::from_date(date);
        self.viewed
    }

    // ── Derived views (viewed month) ────────────────────────────────

    #[must_use]
    pub fn month_matrix(&self) -> MonthMatrix {
        self.calendar_service
            .build_for(self.viewed, self.settings.week_start)
    }

    #[must_use]
    pub fn monthly_entries(&self) -> Vec<(DateKey, &Entry)> {
        self.aggregation_service
            .monthly_entries(&self.entries, self.viewed)
    }

    #[must_use]
    pub fn stats(&self) -> MonthlyStats {
        self.aggregation_service.stats(&self.entries, self.viewed)
    }

    #[must_use]
    pub fn weekly_totals(&self) -> Vec<Option<f64>> {
        self.aggregation_service
            .weekly_totals(&self.entries, &self.month_matrix())
    }

    #[must_use]
    pub fn daily_series(&self) -> Vec<SeriesPoint> {
        self.aggregation_service
            .daily_series(&self.entries, self.viewed)
    }

    #[must_use]
    pub fn cumulative_series(&self) -> Vec<SeriesPoint> {
        self.aggregation_service
            .cumulative_series(&self.entries, self.viewed)
    }

    /// Stats, weekly totals and both series for the viewed month.
    #[must_use]
    pub fn report(&self) -> MonthReport {
        self.aggregation_service
            .month_report(&self.entries, &self.month_matrix())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&mut self) {
        StorageManager::save(
            self.store.as_mut(),
            &self.settings.storage_key,
            &self.entries,
        );
    }

    fn build(
        store: Box<dyn KeyValueStore>,
        settings: Settings,
        entries: EntryMap,
        today: NaiveDate,
    ) -> Self {
        Self {
            store,
            settings,
            entries,
            viewed: YearMonth::from_date(today),
            entry_service: EntryService::new(),
            calendar_service: CalendarService::new(),
            aggregation_service: AggregationService::new(),
        }
    }
}

/// `true` if a URL-style query string carries `reset=1`.
///
/// Accepts an optional leading `?`; other parameters are ignored.
#[must_use]
pub fn reset_requested(query: &str) -> bool {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == RESET_QUERY_PARAM && value == "1")
}
