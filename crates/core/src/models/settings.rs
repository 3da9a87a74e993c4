use serde::{Deserialize, Serialize};

use super::calendar::WeekStart;
use crate::errors::CoreError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "pnl_journal_entries_v1";

/// User-configurable settings for a journal instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The single key under which the serialized journal is persisted.
    pub storage_key: String,

    /// First day of the calendar week.
    pub week_start: WeekStart,

    /// Symbol prefixed to formatted PnL values (e.g., "$", "€").
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            week_start: WeekStart::default(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Settings {
    /// Reject storage keys that are empty or could escape a storage directory.
    pub fn validate(&self) -> Result<(), CoreError> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(CoreError::Validation("storage_key must not be empty".into()));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(CoreError::Validation(format!(
                "storage_key '{}' must not contain path separators",
                self.storage_key
            )));
        }
        Ok(())
    }
}
