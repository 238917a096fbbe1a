// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::file_store::FileStore;
use std::path::{Path, PathBuf};
use tutorias::{
    Alumnos, Citas, DataSource, Repository, STORE_ALUMNOS, STORE_CITAS, STORE_SESIONES,
    STORE_TUTORIAS, Sesiones, Tutorias,
};

/// Extension of every store file.
pub const STORE_EXTENSION: &str = "dat";

/// A data source keeping one store file per repository in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDataSource {
    data_dir: PathBuf,
}

impl FileDataSource {
    /// Creates a source rooted at `data_dir`.
    ///
    /// The directory is created on the first save if it does not exist.
    #[must_use]
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the file backing the store called `name`.
    #[must_use]
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.{STORE_EXTENSION}"))
    }
}

impl DataSource for FileDataSource {
    fn alumnos(&self) -> Alumnos {
        Repository::new(Box::new(FileStore::new(
            STORE_ALUMNOS,
            self.store_path(STORE_ALUMNOS),
        )))
    }

    fn tutorias(&self) -> Tutorias {
        Repository::new(Box::new(FileStore::new(
            STORE_TUTORIAS,
            self.store_path(STORE_TUTORIAS),
        )))
    }

    fn sesiones(&self) -> Sesiones {
        Repository::new(Box::new(FileStore::new(
            STORE_SESIONES,
            self.store_path(STORE_SESIONES),
        )))
    }

    fn citas(&self) -> Citas {
        Repository::new(Box::new(FileStore::new(
            STORE_CITAS,
            self.store_path(STORE_CITAS),
        )))
    }
}
