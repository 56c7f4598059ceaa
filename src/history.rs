use tracing::warn;

use crate::models::CycleEntry;
use crate::storage::{KeyValueStore, StorageError, HISTORY_KEY};

/// Hard cap on stored cycles; appending past it evicts the oldest.
pub const MAX_ENTRIES: usize = 50;

/// Load the saved history, newest first. A missing key is an empty
/// history; a corrupt record is discarded with a warning rather than
/// surfaced as an error.
pub fn list(store: &(impl KeyValueStore + ?Sized)) -> Result<Vec<CycleEntry>, StorageError> {
    let Some(raw) = store.get(HISTORY_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => Ok(entries),
        Err(err) => {
            warn!(%err, "discarding corrupt cycle history");
            Ok(Vec::new())
        }
    }
}

/// Prepend a new entry and persist, evicting the oldest entry beyond the
/// cap.
pub fn append(store: &mut (impl KeyValueStore + ?Sized), entry: CycleEntry) -> Result<(), StorageError> {
    let mut entries = list(store)?;
    entries.insert(0, entry);
    entries.truncate(MAX_ENTRIES);
    persist(store, &entries)
}

/// Entry at `index` for loading back into the inputs. Read-only: editing
/// is recompute-and-resave, which prepends a new entry.
pub fn entry_at(store: &(impl KeyValueStore + ?Sized), index: usize) -> Result<Option<CycleEntry>, StorageError> {
    Ok(list(store)?.into_iter().nth(index))
}

/// Remove the entry at `index`. Out of bounds is a no-op.
pub fn delete_at(store: &mut (impl KeyValueStore + ?Sized), index: usize) -> Result<(), StorageError> {
    let mut entries = list(store)?;
    if index >= entries.len() {
        return Ok(());
    }
    entries.remove(index);
    persist(store, &entries)
}

/// Drop the whole history.
pub fn clear(store: &mut (impl KeyValueStore + ?Sized)) -> Result<(), StorageError> {
    store.remove(HISTORY_KEY)
}

fn persist(store: &mut (impl KeyValueStore + ?Sized), entries: &[CycleEntry]) -> Result<(), StorageError> {
    store.set(HISTORY_KEY, &serde_json::to_string(entries)?)
}
