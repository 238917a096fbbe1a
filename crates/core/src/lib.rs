// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repositories for the Tutorias scheduling system.
//!
//! A repository holds every entity of one type in memory, enforces
//! uniqueness by identity key, and hands out only owned copies. It is bound
//! to a `RecordStore` that it reads once on `comenzar` and writes once on
//! `terminar`. Backends are chosen through a `DataSource`.

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

mod entity;
mod error;
mod repositories;
mod repository;
mod source;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use entity::Entity;
pub use error::{RepositoryError, StoreError};
pub use repositories::{Alumnos, Citas, Sesiones, Tutorias};
pub use repository::{LoadSummary, Repository};
pub use source::{
    DataSource, Repositories, STORE_ALUMNOS, STORE_CITAS, STORE_SESIONES, STORE_TUTORIAS,
    VolatileDataSource,
};
pub use store::{LoadedRecords, RecordStore, VolatileStore};
