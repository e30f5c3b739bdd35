//! Domain types and services for the storefront catalogue.
//!
//! Public surface:
//! - `Product` / `ProductDraft` / `ProductId`: the persisted entity, the owner
//!   submission it is built from, and its identifier.
//! - `CatalogStore`: seeding, reads, upserts, deletes, and the owner session.
//! - `FilterSpec` with `filter_products` and `featured_products`: pure
//!   derivation of the visible catalogue.
//! - `SortOption` with `sort_products`: listing orders.
//! - `Wishlist`: saved product ids under a separate key.
//! - `ports`: the `BlobStore` boundary implemented by `crate::outbound`.

pub mod ports;

mod auth;
mod catalog_store;
mod category;
mod filter;
mod pricing;
mod product;
mod seed_catalog;
mod sort;
mod wishlist;

pub use self::auth::{DEFAULT_OWNER_SECRET, OwnerSecret, OwnerSecretError};
pub use self::catalog_store::{
    CatalogStore, CatalogStoreError, OWNER_SESSION_KEY, PRODUCTS_KEY, SeedingResult,
};
pub use self::category::{CATEGORIES, is_known_category};
pub use self::filter::{
    DEFAULT_MAX_PRICE, FEATURED_STRIP_LEN, FilterSpec, featured_products, filter_products,
};
pub use self::pricing::{discount_percent, effective_price};
pub use self::product::{Product, ProductDraft, ProductId, ProductValidationError};
pub use self::sort::{SortOption, sort_products};
pub use self::wishlist::{WISHLIST_KEY, Wishlist};
