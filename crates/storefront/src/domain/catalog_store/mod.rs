//! Catalogue store: the single source of truth for products.
//!
//! The whole collection lives as one JSON array under [`PRODUCTS_KEY`]. Every
//! write reads the full collection, mutates it in memory, and writes it back,
//! so concurrent writers race and the last write wins. The owner session flag
//! is kept under its own key.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::auth::OwnerSecret;
use super::ports::{BlobStore, BlobStoreError};
use super::seed_catalog::seed_products;
use super::{Product, ProductDraft, ProductId, ProductValidationError};

#[cfg(test)]
mod tests;

/// Storage key holding the serialised product collection.
pub const PRODUCTS_KEY: &str = "calicut_store_products";

/// Storage key holding the owner session flag.
pub const OWNER_SESSION_KEY: &str = "calicut_store_auth";

const SESSION_ACTIVE: &str = "true";

/// Errors raised by catalogue writes.
///
/// Reads never fail: absent, unreadable, or malformed data reads as an empty
/// catalogue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogStoreError {
    /// The submitted product failed validation; nothing was written.
    #[error("product rejected: {0}")]
    Validation(#[from] ProductValidationError),
    /// The blob store failed to read or write.
    #[error("catalogue storage failed: {0}")]
    Storage(#[from] BlobStoreError),
    /// The stored collection could not be decoded, so it cannot be updated
    /// without losing data.
    #[error("stored catalogue is malformed: {message}")]
    Corrupt {
        /// Decoder failure description.
        message: String,
    },
}

/// Result of [`CatalogStore::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The example catalogue was written.
    Applied,
    /// A catalogue already existed and was left untouched.
    AlreadySeeded,
}

/// Store owning the product collection and the owner session flag.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use storefront::{CatalogStore, InMemoryBlobStore, OwnerSecret, ProductDraft};
///
/// let store = CatalogStore::new(
///     Arc::new(InMemoryBlobStore::default()),
///     Arc::new(DefaultClock),
///     OwnerSecret::default(),
/// );
/// let saved = store
///     .save(ProductDraft {
///         name: Some("Yoga Mat".to_owned()),
///         price: Some(799.0),
///         category: "Sports".to_owned(),
///         ..ProductDraft::default()
///     })
///     .unwrap();
/// assert_eq!(store.read_by_id(saved.id().as_ref()), Some(saved));
/// ```
pub struct CatalogStore<S> {
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
    owner_secret: OwnerSecret,
}

impl<S> Clone for CatalogStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            clock: Arc::clone(&self.clock),
            owner_secret: self.owner_secret.clone(),
        }
    }
}

impl<S> CatalogStore<S> {
    /// Create a store over the given blob backend.
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>, owner_secret: OwnerSecret) -> Self {
        Self {
            storage,
            clock,
            owner_secret,
        }
    }

    fn now_ms(&self) -> i64 {
        self.clock.utc().timestamp_millis()
    }
}

impl<S> CatalogStore<S>
where
    S: BlobStore,
{
    /// Write the example catalogue if no catalogue has ever been stored.
    ///
    /// Existing data is never overwritten, including an empty collection
    /// left behind by deleting every product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogStoreError::Storage`] when the key cannot be checked
    /// or the seed cannot be written.
    pub fn initialize(&self) -> Result<SeedingResult, CatalogStoreError> {
        if self.storage.get(PRODUCTS_KEY)?.is_some() {
            info!(key = PRODUCTS_KEY, "catalogue already present; seeding skipped");
            return Ok(SeedingResult::AlreadySeeded);
        }

        let products = seed_products(self.now_ms())?;
        self.write_products(&products)?;
        info!(
            key = PRODUCTS_KEY,
            product_count = products.len(),
            "example catalogue seeded"
        );
        Ok(SeedingResult::Applied)
    }

    /// Every stored product, in stored order.
    ///
    /// Returns an empty collection when nothing is stored or the stored blob
    /// cannot be read or decoded.
    pub fn read_all(&self) -> Vec<Product> {
        match self.load_products() {
            Ok(products) => products,
            Err(error) => {
                warn!(
                    key = PRODUCTS_KEY,
                    %error,
                    "catalogue unreadable; treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// The product stored under `id`, if any.
    pub fn read_by_id(&self, id: &str) -> Option<Product> {
        self.read_all()
            .into_iter()
            .find(|product| product.id().as_ref() == id)
    }

    /// Insert or fully replace a product.
    ///
    /// A blank or absent id creates a new product under a fresh identifier.
    /// The discount is always recomputed and the visibility flags coerced to
    /// booleans. Replacing keeps the stored creation time; creating uses the
    /// draft's creation time or, failing that, the current time.
    ///
    /// Returns the record exactly as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogStoreError::Validation`] before touching storage when
    /// the name or price is missing or invalid, and
    /// [`CatalogStoreError::Storage`] or [`CatalogStoreError::Corrupt`] when
    /// the collection cannot be read back or written.
    pub fn save(&self, draft: ProductDraft) -> Result<Product, CatalogStoreError> {
        let id = match draft.id.as_deref() {
            Some(raw) if !raw.trim().is_empty() => ProductId::new(raw)?,
            _ => ProductId::random(),
        };
        // Validate with a provisional timestamp so a rejected draft never
        // reaches storage.
        let candidate = Product::new(id.clone(), 0, draft.clone())?;

        let mut products = self.load_products()?;
        let existing = products
            .iter()
            .position(|product| product.id() == candidate.id());
        let created_at = existing
            .and_then(|index| products.get(index))
            .map(Product::created_at)
            .or(draft.created_at)
            .unwrap_or_else(|| self.now_ms());
        let product = Product::new(id, created_at, draft)?;

        match existing.and_then(|index| products.get_mut(index)) {
            Some(slot) => {
                *slot = product.clone();
                info!(product_id = %product.id(), "product replaced");
            }
            None => {
                products.push(product.clone());
                info!(product_id = %product.id(), "product created");
            }
        }

        self.write_products(&products)?;
        Ok(product)
    }

    /// Remove the product stored under `id`.
    ///
    /// Deleting an unknown id leaves storage untouched and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogStoreError::Storage`] or
    /// [`CatalogStoreError::Corrupt`] when the collection cannot be read back
    /// or written.
    pub fn delete_by_id(&self, id: &str) -> Result<(), CatalogStoreError> {
        let mut products = self.load_products()?;
        let before = products.len();
        products.retain(|product| product.id().as_ref() != id);

        if products.len() == before {
            debug!(product_id = id, "delete requested for unknown product");
            return Ok(());
        }

        self.write_products(&products)?;
        info!(product_id = id, "product deleted");
        Ok(())
    }

    /// Unlock the owner view when `code` matches the shared secret.
    ///
    /// A wrong code returns `false` and leaves the session flag untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogStoreError::Storage`] when the flag cannot be written.
    pub fn login_owner(&self, code: &str) -> Result<bool, CatalogStoreError> {
        if !self.owner_secret.matches(code) {
            info!("owner login rejected");
            return Ok(false);
        }
        self.storage.set(OWNER_SESSION_KEY, SESSION_ACTIVE)?;
        info!("owner session started");
        Ok(true)
    }

    /// Whether the owner view is currently unlocked.
    pub fn is_owner_session_active(&self) -> bool {
        match self.storage.get(OWNER_SESSION_KEY) {
            Ok(flag) => flag.as_deref() == Some(SESSION_ACTIVE),
            Err(error) => {
                warn!(
                    key = OWNER_SESSION_KEY,
                    %error,
                    "session flag unreadable; treating as inactive"
                );
                false
            }
        }
    }

    /// Lock the owner view.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogStoreError::Storage`] when the flag cannot be removed.
    pub fn logout_owner(&self) -> Result<(), CatalogStoreError> {
        self.storage.remove(OWNER_SESSION_KEY)?;
        info!("owner session ended");
        Ok(())
    }

    fn load_products(&self) -> Result<Vec<Product>, CatalogStoreError> {
        let Some(raw) = self.storage.get(PRODUCTS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|error| CatalogStoreError::Corrupt {
            message: error.to_string(),
        })
    }

    fn write_products(&self, products: &[Product]) -> Result<(), CatalogStoreError> {
        let payload = serde_json::to_string(products)
            .map_err(|error| BlobStoreError::serialize(PRODUCTS_KEY, error.to_string()))?;
        self.storage.set(PRODUCTS_KEY, &payload)?;
        debug!(
            key = PRODUCTS_KEY,
            product_count = products.len(),
            "catalogue persisted"
        );
        Ok(())
    }
}
