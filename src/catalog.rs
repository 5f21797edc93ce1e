//! Record access facade: every read and mutation of the drama list goes
//! through [`Catalog`], which pairs the CSV store with the per-record folders.

use std::sync::Mutex;

use crate::folders::{FolderError, FolderManager};
use crate::store::{Record, RecordStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Folder(#[from] FolderError),
}

/// Store + folders behind one lock.
///
/// The lock makes each read-modify-write sequence atomic within this
/// process. Indexes are positional: they refer to the order of the file at
/// the moment the operation runs.
#[derive(Debug)]
pub struct Catalog {
    store: RecordStore,
    folders: FolderManager,
    lock: Mutex<()>,
}

impl Catalog {
    pub fn new(store: RecordStore, folders: FolderManager) -> Self {
        Self {
            store,
            folders,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn folders(&self) -> &FolderManager {
        &self.folders
    }

    pub fn list(&self) -> Result<Vec<Record>, CatalogError> {
        let _guard = self.guard();
        Ok(self.store.read()?)
    }

    pub fn get(&self, index: usize) -> Result<Option<Record>, CatalogError> {
        let _guard = self.guard();
        Ok(self.store.read()?.into_iter().nth(index))
    }

    /// Append a record and create its folder if absent.
    pub fn add(&self, name: &str, genre: &str) -> Result<(), CatalogError> {
        let _guard = self.guard();
        self.folders.create(name)?;

        let mut records = self.store.read()?;
        records.push(Record::new(name, genre));
        self.store.write(&records)?;

        tracing::info!("Added {:?} ({}) at index {}", name, genre, records.len() - 1);
        Ok(())
    }

    /// Remove the record at `index`, returning it. Its folder goes too if it
    /// is empty. The store is rewritten even when `index` is out of range.
    pub fn remove(&self, index: usize) -> Result<Option<Record>, CatalogError> {
        let _guard = self.guard();
        let mut records = self.store.read()?;

        let removed = if index < records.len() {
            skip_invalid_name(self.folders.remove_if_empty(&records[index].name))?;
            Some(records.remove(index))
        } else {
            tracing::debug!("Delete index {} out of range ({} records)", index, records.len());
            None
        };

        self.store.write(&records)?;
        if let Some(record) = &removed {
            tracing::info!("Removed {:?} from index {}", record.name, index);
        }
        Ok(removed)
    }

    /// Overwrite the record at `index`, returning the previous value. The
    /// folder follows the name when it changes. Out of range changes
    /// nothing but still rewrites the store.
    pub fn edit(
        &self,
        index: usize,
        name: &str,
        genre: &str,
    ) -> Result<Option<Record>, CatalogError> {
        let _guard = self.guard();
        let mut records = self.store.read()?;

        let previous = match records.get_mut(index) {
            Some(slot) => {
                // Validate the new name even if the old one can't be renamed.
                self.folders.path_for(name)?;
                skip_invalid_name(self.folders.rename(&slot.name, name))?;
                Some(std::mem::replace(slot, Record::new(name, genre)))
            }
            None => {
                tracing::debug!("Edit index {} out of range ({} records)", index, records.len());
                None
            }
        };

        self.store.write(&records)?;
        if let Some(old) = &previous {
            tracing::info!("Edited index {}: {:?} -> {:?}", index, old.name, name);
        }
        Ok(previous)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Records loaded from disk may carry names that were never valid folder
/// names. Their folder side effect is skipped so the record itself stays
/// editable and deletable.
fn skip_invalid_name(result: Result<(), FolderError>) -> Result<(), FolderError> {
    match result {
        Err(FolderError::InvalidName(name)) => {
            tracing::warn!("Skipping folder update for unsafe name {:?}", name);
            Ok(())
        }
        other => other,
    }
}
