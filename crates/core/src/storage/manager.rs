use tracing::{debug, warn};

use crate::models::entry::EntryMap;

use super::format;
use super::kv::KeyValueStore;

/// High-level persistence of the journal through a [`KeyValueStore`].
///
/// Every operation fails soft: storage errors are logged and absorbed so the
/// journal keeps working in memory.
pub struct StorageManager;

impl StorageManager {
    /// Read the journal stored under `key`.
    ///
    /// Flow: store.get(key) → JSON → EntryMap. A missing key, an access error
    /// or a parse error all yield an empty journal.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> EntryMap {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no persisted journal, starting empty");
                return EntryMap::new();
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read persisted journal, starting empty");
                return EntryMap::new();
            }
        };

        match format::from_json(&raw) {
            Ok(entries) => {
                debug!(key, entries = entries.len(), "loaded journal");
                entries
            }
            Err(e) => {
                warn!(key, error = %e, "persisted journal is unreadable, starting empty");
                EntryMap::new()
            }
        }
    }

    /// Write the full journal under `key`. Failures are logged, never returned.
    pub fn save(store: &mut dyn KeyValueStore, key: &str, entries: &EntryMap) {
        let json = match format::to_json(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize journal, not saved");
                return;
            }
        };
        if let Err(e) = store.set(key, &json) {
            warn!(key, error = %e, "failed to persist journal");
        }
    }

    /// Delete the persisted journal. Failures are logged, never returned.
    pub fn clear(store: &mut dyn KeyValueStore, key: &str) {
        if let Err(e) = store.remove(key) {
            warn!(key, error = %e, "failed to clear persisted journal");
        }
    }
}
