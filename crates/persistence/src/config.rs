// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage selection.
//!
//! The backend is chosen once at startup. Explicit values (usually command
//! line flags) win over the environment, which wins over the defaults.
//!
//! | Setting | Environment variable | Default |
//! |---|---|---|
//! | storage kind | `TUTORIAS_STORAGE` | `file` |
//! | data directory | `TUTORIAS_DATA_DIR` | `datos` |

use crate::error::PersistenceError;
use crate::source::FileDataSource;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tutorias::{DataSource, VolatileDataSource};

/// Environment variable naming the storage kind.
pub const ENV_STORAGE: &str = "TUTORIAS_STORAGE";

/// Environment variable naming the data directory.
pub const ENV_DATA_DIR: &str = "TUTORIAS_DATA_DIR";

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = "datos";

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Collections in memory, persisted to flat files in the data directory.
    #[default]
    File,
    /// Collections in memory only. Nothing survives the process.
    Volatile,
}

impl FromStr for StorageKind {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "fichero" => Ok(Self::File),
            "volatile" | "memoria" => Ok(Self::Volatile),
            _ => Err(PersistenceError::UnknownStorageKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Volatile => write!(f, "volatile"),
        }
    }
}

/// Resolved storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Which backend holds the data.
    pub kind: StorageKind,
    /// Directory for store files. Unused by the volatile backend.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StorageConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnknownStorageKind` if `TUTORIAS_STORAGE`
    /// names no known backend.
    pub fn from_env() -> Result<Self, PersistenceError> {
        Self::resolve(None, None)
    }

    /// Builds the configuration from explicit values, falling back to the
    /// environment and then to the defaults for anything not given.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnknownStorageKind` if the storage kind
    /// comes from the environment and is not recognized.
    pub fn resolve(
        kind: Option<StorageKind>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, PersistenceError> {
        Self::resolve_with(kind, data_dir, |key| std::env::var(key).ok())
    }

    /// Same as `resolve`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UnknownStorageKind` if the looked-up
    /// storage kind is not recognized.
    pub fn resolve_with<F>(
        kind: Option<StorageKind>,
        data_dir: Option<PathBuf>,
        lookup: F,
    ) -> Result<Self, PersistenceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind: StorageKind = match kind {
            Some(kind) => kind,
            None => lookup(ENV_STORAGE)
                .filter(|v| !v.trim().is_empty())
                .map_or(Ok(StorageKind::default()), |v| v.parse())?,
        };

        let data_dir: PathBuf = data_dir
            .or_else(|| {
                lookup(ENV_DATA_DIR)
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self { kind, data_dir })
    }
}

/// Creates the data source selected by `config`.
#[must_use]
pub fn create_data_source(config: &StorageConfig) -> Box<dyn DataSource> {
    match config.kind {
        StorageKind::File => {
            info!(data_dir = %config.data_dir.display(), "Using file storage");
            Box::new(FileDataSource::new(&config.data_dir))
        }
        StorageKind::Volatile => {
            info!("Using volatile storage, nothing will be saved");
            Box::new(VolatileDataSource::new())
        }
    }
}
