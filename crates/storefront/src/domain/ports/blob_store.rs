//! Driven port for the key-value blob substrate.
//!
//! The catalogue, the owner session flag, and the wishlist each live under
//! their own string key. Adapters store opaque text and know nothing about
//! the payload shape; serialisation stays on the domain side of the boundary.

use super::define_port_error;

define_port_error! {
    /// Errors raised by blob store adapters.
    pub enum BlobStoreError {
        /// The stored value could not be read.
        Read {
            /// Key being read.
            key: String,
            /// Adapter-specific failure description.
            message: String
        } => "failed to read blob '{key}': {message}",
        /// The value could not be written or removed.
        Write {
            /// Key being written.
            key: String,
            /// Adapter-specific failure description.
            message: String
        } => "failed to write blob '{key}': {message}",
        /// A domain value could not be encoded for storage.
        Serialize {
            /// Key the value was destined for.
            key: String,
            /// Encoder failure description.
            message: String
        } => "failed to encode blob '{key}': {message}",
    }
}

/// Synchronous string-keyed blob storage.
///
/// Every call is expected to complete immediately. Absence of a key is
/// reported as `Ok(None)`, never as an error.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore: Send + Sync {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError>;

    /// Remove `key`. Removing a key that does not exist succeeds.
    fn remove(&self, key: &str) -> Result<(), BlobStoreError>;
}
