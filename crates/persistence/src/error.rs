// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tutorias::StoreError;
use tutorias_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The store file does not exist yet.
    StoreNotFound(String),
    /// Reading or writing a store file failed.
    Io(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// A stored record decoded but describes an invalid entity.
    InvalidRecord(DomainError),
    /// The storage kind named in configuration is not recognized.
    UnknownStorageKind(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreNotFound(path) => write!(f, "Store file not found: {path}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidRecord(err) => write!(f, "Invalid stored record: {err}"),
            Self::UnknownStorageKind(kind) => write!(
                f,
                "Unknown storage kind '{kind}', expected one of: file, fichero, volatile, memoria"
            ),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRecord(err)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::StoreNotFound(path) => Self::NotFound(path),
            PersistenceError::Io(msg) => Self::Io(msg),
            PersistenceError::SerializationError(_)
            | PersistenceError::InvalidRecord(_)
            | PersistenceError::UnknownStorageKind(_) => Self::Encoding(err.to_string()),
        }
    }
}
