// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage contract behind each repository.
//!
//! A repository keeps its whole collection in memory. A `RecordStore` is only
//! consulted twice: once at startup to load every record, and once at
//! shutdown to write the collection back.

use crate::error::StoreError;
use std::cell::RefCell;
use std::rc::Rc;

/// Records read back from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecords<T> {
    /// Records that decoded successfully, in stored order.
    pub records: Vec<T>,
    /// One description per record that could not be decoded.
    pub skipped: Vec<String>,
}

impl<T> LoadedRecords<T> {
    /// Creates an empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Default for LoadedRecords<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A flat, sequential store for one entity type.
pub trait RecordStore<T> {
    /// Returns a name identifying the store in logs.
    fn name(&self) -> &str;

    /// Reads every record in stored order.
    ///
    /// A record that cannot be decoded is reported in
    /// `LoadedRecords::skipped` rather than failing the whole load.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the store has never been written,
    /// or another `StoreError` if it cannot be read at all.
    fn load(&self) -> Result<LoadedRecords<T>, StoreError>;

    /// Replaces the stored records with `records`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be encoded or written.
    fn save(&self, records: &[T]) -> Result<(), StoreError>;
}

/// A memory-only store.
///
/// Clones share the same contents, so a repository rebuilt from a clone sees
/// what an earlier repository saved. Nothing outlives the process.
#[derive(Debug)]
pub struct VolatileStore<T> {
    name: String,
    contents: Rc<RefCell<Option<Vec<T>>>>,
}

impl<T> VolatileStore<T> {
    /// Creates an empty store that has never been written.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T> Clone for VolatileStore<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            contents: Rc::clone(&self.contents),
        }
    }
}

impl<T: Clone> RecordStore<T> for VolatileStore<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<LoadedRecords<T>, StoreError> {
        self.contents.borrow().as_ref().map_or_else(
            || Err(StoreError::NotFound(self.name.clone())),
            |records| {
                Ok(LoadedRecords {
                    records: records.clone(),
                    skipped: Vec::new(),
                })
            },
        )
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        *self.contents.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}
