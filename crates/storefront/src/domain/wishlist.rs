//! Shopper-side wishlist of saved product ids.
//!
//! The list lives under its own key and never touches the catalogue; ids of
//! deleted products simply linger until toggled off.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{BlobStore, BlobStoreError};

/// Storage key holding the wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Ordered set of product ids the shopper has saved.
pub struct Wishlist<S> {
    storage: Arc<S>,
}

impl<S> Wishlist<S>
where
    S: BlobStore,
{
    /// Create a wishlist over the given blob backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Saved ids in the order they were added.
    ///
    /// Absent, unreadable, or malformed data reads as an empty list.
    pub fn ids(&self) -> Vec<String> {
        let raw = match self.storage.get(WISHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(key = WISHLIST_KEY, %error, "wishlist unreadable; treating as empty");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(key = WISHLIST_KEY, %error, "wishlist malformed; treating as empty");
            Vec::new()
        })
    }

    /// Whether `product_id` is saved.
    pub fn contains(&self, product_id: &str) -> bool {
        self.ids().iter().any(|id| id == product_id)
    }

    /// Add `product_id` when absent, remove it when present, and persist.
    ///
    /// Returns whether the id is saved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the updated list cannot be encoded or
    /// written.
    pub fn toggle(&self, product_id: &str) -> Result<bool, BlobStoreError> {
        let mut ids = self.ids();
        let saved = match ids.iter().position(|id| id == product_id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(product_id.to_owned());
                true
            }
        };

        let payload = serde_json::to_string(&ids)
            .map_err(|error| BlobStoreError::serialize(WISHLIST_KEY, error.to_string()))?;
        self.storage.set(WISHLIST_KEY, &payload)?;
        debug!(product_id, saved, "wishlist toggled");
        Ok(saved)
    }
}
