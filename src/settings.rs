use tracing::warn;

use crate::models::Settings;
use crate::storage::{KeyValueStore, StorageError, SETTINGS_KEY};

/// Load the settings record, falling back to defaults when it is missing
/// or unreadable.
pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Result<Settings, StorageError> {
    let Some(raw) = store.get(SETTINGS_KEY)? else {
        return Ok(Settings::default());
    };
    match serde_json::from_str(&raw) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            warn!(%err, "discarding corrupt settings record");
            Ok(Settings::default())
        }
    }
}

/// Overwrite the whole record. There is no partial update.
pub fn save(store: &mut (impl KeyValueStore + ?Sized), settings: &Settings) -> Result<(), StorageError> {
    store.set(SETTINGS_KEY, &serde_json::to_string(settings)?)
}
