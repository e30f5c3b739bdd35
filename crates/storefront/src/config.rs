//! Storefront configuration loaded via OrthoConfig, and store start-up.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::{
    CatalogStore, CatalogStoreError, DEFAULT_OWNER_SECRET, OwnerSecret, OwnerSecretError,
    SeedingResult,
};
use crate::outbound::DirectoryBlobStore;

const DEFAULT_DATA_DIR: &str = "./storefront-data";

/// Configuration values controlling where and how the catalogue is stored.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Directory holding the blob files.
    pub data_dir: Option<PathBuf>,
    /// Override for the owner access code.
    pub owner_secret: Option<String>,
    /// Write the example catalogue when no catalogue exists yet.
    pub seed_on_startup: Option<bool>,
}

impl StorefrontSettings {
    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Return the configured owner secret, falling back to the default.
    pub fn owner_secret(&self) -> &str {
        self.owner_secret.as_deref().unwrap_or(DEFAULT_OWNER_SECRET)
    }

    /// Whether to seed an empty store on start-up; defaults to `true`.
    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(true)
    }
}

impl fmt::Debug for StorefrontSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontSettings")
            .field("data_dir", &self.data_dir)
            .field(
                "owner_secret",
                &self.owner_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("seed_on_startup", &self.seed_on_startup)
            .finish()
    }
}

/// Errors returned while opening the catalogue store.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The data directory path is not valid UTF-8.
    #[error("data directory {} is not valid UTF-8", .path.display())]
    NonUtf8DataDir {
        /// Offending path.
        path: PathBuf,
    },
    /// The data directory could not be created or opened.
    #[error("failed to open data directory {path}: {source}")]
    DataDir {
        /// Data directory path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configured owner secret is unusable.
    #[error("invalid owner secret: {0}")]
    Secret(#[from] OwnerSecretError),
    /// Seeding the example catalogue failed.
    #[error("catalogue seeding failed: {0}")]
    Seeding(#[from] CatalogStoreError),
}

/// Open the file-backed catalogue store described by `settings`.
///
/// Seeds the example catalogue unless `seed_on_startup` is `false`, and only
/// when no catalogue has been stored before.
///
/// # Examples
///
/// ```rust,no_run
/// use storefront::{StorefrontSettings, open_catalog_store};
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = StorefrontSettings {
///     data_dir: Some("/var/lib/storefront".into()),
///     owner_secret: None,
///     seed_on_startup: None,
/// };
/// let store = open_catalog_store(&settings)?;
/// assert!(!store.read_all().is_empty());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when the data directory is unusable, the owner
/// secret is empty, or seeding fails.
pub fn open_catalog_store(
    settings: &StorefrontSettings,
) -> Result<CatalogStore<DirectoryBlobStore>, StartupError> {
    let data_dir = Utf8PathBuf::from_path_buf(settings.data_dir())
        .map_err(|path| StartupError::NonUtf8DataDir { path })?;
    let owner_secret = OwnerSecret::new(settings.owner_secret())?;
    let storage = DirectoryBlobStore::open(&data_dir).map_err(|source| StartupError::DataDir {
        path: data_dir.clone(),
        source,
    })?;

    let store = CatalogStore::new(Arc::new(storage), Arc::new(DefaultClock), owner_secret);
    if settings.seed_on_startup() {
        let outcome = store.initialize()?;
        info!(
            data_dir = %data_dir,
            seeded = outcome == SeedingResult::Applied,
            "catalogue store opened"
        );
    } else {
        info!(
            data_dir = %data_dir,
            reason = "disabled",
            "catalogue store opened; seeding skipped"
        );
    }
    Ok(store)
}
