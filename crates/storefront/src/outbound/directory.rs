//! Filesystem blob store: one file per key inside a data directory.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::{TEMP_PREFIX, write_atomic};
use crate::domain::ports::{BlobStore, BlobStoreError};

/// Blob store persisting each key as a file named after the key.
///
/// All access goes through a capability handle on the data directory, so
/// keys cannot escape it. Writes replace the file atomically.
#[derive(Debug)]
pub struct DirectoryBlobStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl DirectoryBlobStore {
    /// Open `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be created
    /// or opened.
    pub fn open(root: &Utf8Path) -> io::Result<Self> {
        std::fs::create_dir_all(root)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        debug!(root = %root, "blob directory opened");
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory holding the blob files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Check that `key` names a plain file directly inside the data directory.
fn file_name(key: &str) -> Result<&str, String> {
    if key.starts_with(TEMP_PREFIX) {
        return Err(format!("key must not start with '{TEMP_PREFIX}'"));
    }
    let mut components = Utf8Path::new(key).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) if name == key => Ok(name),
        _ => Err("key must be a single file name".to_owned()),
    }
}

impl BlobStore for DirectoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let name = file_name(key).map_err(|message| BlobStoreError::read(key, message))?;
        match self.dir.read_to_string(name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobStoreError::read(key, err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let name = file_name(key).map_err(|message| BlobStoreError::write(key, message))?;
        write_atomic(&self.dir, name, value)
            .map_err(|err| BlobStoreError::write(key, err.to_string()))?;
        debug!(key, bytes = value.len(), root = %self.root, "blob written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobStoreError> {
        let name = file_name(key).map_err(|message| BlobStoreError::write(key, message))?;
        match self.dir.remove_file(name) {
            Ok(()) => {
                debug!(key, root = %self.root, "blob removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(BlobStoreError::write(key, err.to_string())),
        }
    }
}
