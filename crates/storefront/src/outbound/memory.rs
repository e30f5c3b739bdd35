//! In-memory blob store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{BlobStore, BlobStoreError};

/// Blob store backed by a mutex-guarded map.
///
/// Contents vanish when the value is dropped.
///
/// # Examples
/// ```
/// use storefront::{BlobStore, InMemoryBlobStore};
///
/// let store = InMemoryBlobStore::default();
/// store.set("wishlist", "[\"1\"]").unwrap();
/// assert_eq!(store.get("wishlist").unwrap().as_deref(), Some("[\"1\"]"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, &'static str> {
        self.entries.lock().map_err(|_| "store lock poisoned")
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let entries = self
            .lock()
            .map_err(|message| BlobStoreError::read(key, message))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let mut entries = self
            .lock()
            .map_err(|message| BlobStoreError::write(key, message))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobStoreError> {
        let mut entries = self
            .lock()
            .map_err(|message| BlobStoreError::write(key, message))?;
        entries.remove(key);
        Ok(())
    }
}
