// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Tutorias scheduling system.
//!
//! This crate provides the file-backed storage behind the repositories, and
//! the configuration that selects a storage backend at startup.
//!
//! ## Storage Backends
//!
//! - **File** (default): each repository is loaded from and saved to a flat
//!   file in the data directory (`alumnos.dat`, `tutorias.dat`,
//!   `sesiones.dat`, `citas.dat`)
//! - **Volatile**: repositories live in memory only
//!
//! ## Store File Format
//!
//! One JSON frame per line. Every entity is written as `{"Record":{...}}`
//! with nested entities nested in full, and the file ends with `"End"`.
//! Dates are stored as `YYYY-MM-DD` and times of day as `HH:MM`.
//!
//! Saving writes a temporary sibling file and renames it over the store, so
//! an interrupted save leaves the previous store intact.
//!
//! ## Load Behavior
//!
//! - A missing file is an empty store
//! - A line that cannot be decoded, or that describes an invalid entity, is
//!   skipped and reported
//! - A file without the end marker is read as far as it goes

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod data_models;
mod error;
mod file_store;
mod source;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_DATA_DIR, ENV_DATA_DIR, ENV_STORAGE, StorageConfig, StorageKind, create_data_source,
};
pub use data_models::{
    AlumnoRecord, CitaRecord, Frame, ProfesorRecord, SesionRecord, StoredRecord, TutoriaRecord,
};
pub use error::PersistenceError;
pub use file_store::FileStore;
pub use source::{FileDataSource, STORE_EXTENSION};
