// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Business outcomes of repository operations.
///
/// These are expected results a caller branches on ("already exists",
/// "does not exist"), kept apart from `DomainError` which reports
/// malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An entity with the same identity key is already stored.
    Duplicate {
        /// The kind of entity.
        entity: &'static str,
        /// The identity key of the rejected entity.
        key: String,
    },
    /// No stored entity has the given identity key.
    NotFound {
        /// The kind of entity.
        entity: &'static str,
        /// The identity key that was looked up.
        key: String,
    },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate { entity, key } => {
                write!(f, "A {entity} with key '{key}' already exists")
            }
            Self::NotFound { entity, key } => {
                write!(f, "No {entity} with key '{key}' exists")
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Errors reported by a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has never been written.
    NotFound(String),
    /// The store could not be opened, read, or written.
    Io(String),
    /// A record could not be encoded or decoded.
    Encoding(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Store not found: {msg}"),
            Self::Io(msg) => write!(f, "Store I/O error: {msg}"),
            Self::Encoding(msg) => write!(f, "Store encoding error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
