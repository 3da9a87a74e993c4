use crate::errors::CoreError;
use crate::models::entry::EntryMap;

/// Serialize the full journal to its persisted JSON form.
///
/// Layout:
/// ```text
/// { "YYYY-MM-DD": { "pnl": number|null, "notes": string, "updated": ISO-8601 }, ... }
/// ```
pub fn to_json(entries: &EntryMap) -> Result<String, CoreError> {
    serde_json::to_string(entries)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize journal: {e}")))
}

/// Parse a persisted journal. Strict: any malformed key or record is an error.
///
/// Records that carry neither a PnL nor notes are dropped so the returned
/// map holds only storable entries.
pub fn from_json(data: &str) -> Result<EntryMap, CoreError> {
    let mut entries: EntryMap = serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse journal: {e}")))?;
    entries.retain(|_, entry| entry.has_content());
    Ok(entries)
}
