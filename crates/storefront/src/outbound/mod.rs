//! Outbound adapters implementing the blob store port.
//!
//! - **memory**: process-local map, used by tests and embedders that persist
//!   elsewhere.
//! - **directory**: one file per key inside a data directory, written
//!   atomically.
//!
//! Adapters move opaque strings and contain no catalogue logic.

mod atomic_io;
pub mod directory;
pub mod memory;

pub use self::directory::DirectoryBlobStore;
pub use self::memory::InMemoryBlobStore;
