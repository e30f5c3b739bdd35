//! Product catalogue core for a single-owner storefront.
//!
//! The crate owns the product collection behind a key-value blob port, derives
//! the visible catalogue from a filter specification, and keeps a small
//! consumer-side wishlist. Rendering, routing, and checkout live elsewhere.
//!
//! # Overview
//!
//! - [`CatalogStore`] seeds, reads, saves, and deletes products and tracks the
//!   owner session flag.
//! - [`filter_products`] narrows the catalogue with a [`FilterSpec`].
//! - [`sort_products`] orders a visible subset by a [`SortOption`].
//! - [`Wishlist`] toggles saved product ids under its own storage key.
//! - [`InMemoryBlobStore`] and [`DirectoryBlobStore`] implement the
//!   [`BlobStore`] port.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use storefront::{CatalogStore, FilterSpec, InMemoryBlobStore, OwnerSecret, filter_products};
//!
//! let store = CatalogStore::new(
//!     Arc::new(InMemoryBlobStore::default()),
//!     Arc::new(DefaultClock),
//!     OwnerSecret::default(),
//! );
//! store.initialize().expect("seeding succeeds");
//!
//! let products = store.read_all();
//! let spec = FilterSpec::from_query("category=Electronics");
//! let visible = filter_products(&products, &spec);
//!
//! assert_eq!(visible.len(), 2);
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::{StartupError, StorefrontSettings, open_catalog_store};
pub use domain::ports::{BlobStore, BlobStoreError};
pub use domain::{
    CATEGORIES, CatalogStore, CatalogStoreError, FilterSpec, OwnerSecret, OwnerSecretError,
    Product, ProductDraft, ProductId, ProductValidationError, SeedingResult, SortOption, Wishlist,
    discount_percent, effective_price, featured_products, filter_products, is_known_category,
    sort_products,
};
pub use outbound::{DirectoryBlobStore, InMemoryBlobStore};
