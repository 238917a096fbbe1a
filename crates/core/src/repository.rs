// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::Entity;
use crate::error::{RepositoryError, StoreError};
use crate::store::{LoadedRecords, RecordStore};
use std::cmp::Ordering;
use tracing::{debug, error, info, warn};

/// Outcome of loading a repository from its store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// The store that was read.
    pub store: String,
    /// Records added to the collection.
    pub loaded: usize,
    /// Records that were unreadable or duplicated an earlier record.
    pub skipped: usize,
}

/// An in-memory collection of one entity type backed by a record store.
///
/// The collection keeps insertion order internally and never hands out
/// references to it: every accessor returns owned copies.
pub struct Repository<T: Entity> {
    coleccion: Vec<T>,
    store: Box<dyn RecordStore<T>>,
}

impl<T: Entity> Repository<T> {
    /// Creates an empty repository over the given store.
    ///
    /// Nothing is read until `comenzar` is called.
    #[must_use]
    pub fn new(store: Box<dyn RecordStore<T>>) -> Self {
        Self {
            coleccion: Vec::new(),
            store,
        }
    }

    /// Stores a copy of `entidad`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if an entity with the same
    /// identity key is already stored.
    pub fn insertar(&mut self, entidad: &T) -> Result<(), RepositoryError> {
        self.push_unique(entidad.clone())
    }

    /// Returns a copy of the stored entity with the same identity key, if any.
    #[must_use]
    pub fn buscar(&self, entidad: &T) -> Option<T> {
        self.coleccion.iter().find(|e| *e == entidad).cloned()
    }

    /// Removes the stored entity with the same identity key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such entity is stored.
    pub fn borrar(&mut self, entidad: &T) -> Result<(), RepositoryError> {
        let indice: usize = self
            .coleccion
            .iter()
            .position(|e| e == entidad)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: T::KIND,
                key: entidad.identity(),
            })?;
        self.coleccion.remove(indice);
        debug!(entity = T::KIND, key = %entidad.identity(), "Deleted");
        Ok(())
    }

    /// Returns copies of every stored entity in listing order.
    #[must_use]
    pub fn listar(&self) -> Vec<T> {
        let mut copia: Vec<T> = self.coleccion.clone();
        copia.sort_by(T::listing_order);
        copia
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn tamano(&self) -> usize {
        self.coleccion.len()
    }

    /// Loads the backing store into memory.
    ///
    /// Records are appended to whatever is already held. Unreadable records
    /// and records whose key is already present are logged and skipped. A
    /// store that cannot be read at all leaves the collection as it was.
    pub fn comenzar(&mut self) -> LoadSummary {
        let store: String = self.store.name().to_string();
        let mut summary: LoadSummary = LoadSummary {
            store: store.clone(),
            loaded: 0,
            skipped: 0,
        };

        let loaded: LoadedRecords<T> = match self.store.load() {
            Ok(loaded) => loaded,
            Err(StoreError::NotFound(_)) => {
                info!(%store, "No stored records yet, starting empty");
                return summary;
            }
            Err(err) => {
                warn!(%store, error = %err, "Could not read store, starting empty");
                return summary;
            }
        };

        for reason in &loaded.skipped {
            warn!(%store, %reason, "Skipped unreadable record");
        }
        summary.skipped = loaded.skipped.len();

        for registro in loaded.records {
            match self.push_unique(registro) {
                Ok(()) => summary.loaded += 1,
                Err(err) => {
                    warn!(%store, error = %err, "Skipped stored record");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            %store,
            loaded = summary.loaded,
            skipped = summary.skipped,
            "Loaded stored records"
        );
        summary
    }

    /// Writes the collection to the backing store in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails. The error is also logged;
    /// the in-memory collection is unaffected.
    pub fn terminar(&self) -> Result<(), StoreError> {
        let store: &str = self.store.name();
        match self.store.save(&self.coleccion) {
            Ok(()) => {
                info!(store, written = self.coleccion.len(), "Saved records");
                Ok(())
            }
            Err(err) => {
                error!(store, error = %err, "Could not save records");
                Err(err)
            }
        }
    }

    /// Returns copies of the entities matching `filtro`, sorted by `orden`.
    pub(crate) fn filtrar<F, O>(&self, filtro: F, orden: O) -> Vec<T>
    where
        F: Fn(&T) -> bool,
        O: FnMut(&T, &T) -> Ordering,
    {
        let mut copia: Vec<T> = self
            .coleccion
            .iter()
            .filter(|e| filtro(*e))
            .cloned()
            .collect();
        copia.sort_by(orden);
        copia
    }

    fn push_unique(&mut self, entidad: T) -> Result<(), RepositoryError> {
        if self.coleccion.contains(&entidad) {
            return Err(RepositoryError::Duplicate {
                entity: T::KIND,
                key: entidad.identity(),
            });
        }
        debug!(entity = T::KIND, key = %entidad.identity(), "Inserted");
        self.coleccion.push(entidad);
        Ok(())
    }
}

impl<T: Entity> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &T::KIND)
            .field("store", &self.store.name())
            .field("tamano", &self.coleccion.len())
            .finish()
    }
}
