// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data sources: producers of repositories wired to their stores.
//!
//! Each storage backend is one `DataSource` implementation. Callers pick an
//! implementation from configuration and only see the trait.

use crate::error::StoreError;
use crate::repositories::{Alumnos, Citas, Sesiones, Tutorias};
use crate::repository::{LoadSummary, Repository};
use crate::store::VolatileStore;
use tutorias_domain::{Alumno, Cita, Sesion, Tutoria};

/// Store name for students, shared by every backend.
pub const STORE_ALUMNOS: &str = "alumnos";
/// Store name for tutoring groups.
pub const STORE_TUTORIAS: &str = "tutorias";
/// Store name for sessions.
pub const STORE_SESIONES: &str = "sesiones";
/// Store name for appointments.
pub const STORE_CITAS: &str = "citas";

/// Produces the four repositories, each bound to its own store.
pub trait DataSource {
    /// Creates the student repository.
    fn alumnos(&self) -> Alumnos;
    /// Creates the tutoring group repository.
    fn tutorias(&self) -> Tutorias;
    /// Creates the session repository.
    fn sesiones(&self) -> Sesiones;
    /// Creates the appointment repository.
    fn citas(&self) -> Citas;
}

/// A data source whose stores live only in memory.
///
/// Repositories created from the same source share stores, so a second set
/// of repositories loads what the first set saved.
#[derive(Debug, Clone)]
pub struct VolatileDataSource {
    alumnos: VolatileStore<Alumno>,
    tutorias: VolatileStore<Tutoria>,
    sesiones: VolatileStore<Sesion>,
    citas: VolatileStore<Cita>,
}

impl VolatileDataSource {
    /// Creates a source with four empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alumnos: VolatileStore::new(STORE_ALUMNOS),
            tutorias: VolatileStore::new(STORE_TUTORIAS),
            sesiones: VolatileStore::new(STORE_SESIONES),
            citas: VolatileStore::new(STORE_CITAS),
        }
    }
}

impl Default for VolatileDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for VolatileDataSource {
    fn alumnos(&self) -> Alumnos {
        Repository::new(Box::new(self.alumnos.clone()))
    }

    fn tutorias(&self) -> Tutorias {
        Repository::new(Box::new(self.tutorias.clone()))
    }

    fn sesiones(&self) -> Sesiones {
        Repository::new(Box::new(self.sesiones.clone()))
    }

    fn citas(&self) -> Citas {
        Repository::new(Box::new(self.citas.clone()))
    }
}

/// The four repositories of one running application.
///
/// Each repository is independent. Referential consistency between them
/// (a session's group exists, an appointment's student exists) is the
/// caller's job: resolve the parent with `buscar` before building a dependent.
#[derive(Debug)]
pub struct Repositories {
    /// Students, keyed by email.
    pub alumnos: Alumnos,
    /// Tutoring groups, keyed by professor and name.
    pub tutorias: Tutorias,
    /// Sessions, keyed by tutoring group and date.
    pub sesiones: Sesiones,
    /// Appointments, keyed by student, session and time.
    pub citas: Citas,
}

impl Repositories {
    /// Creates all four repositories from one source. Nothing is loaded yet.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        Self {
            alumnos: source.alumnos(),
            tutorias: source.tutorias(),
            sesiones: source.sesiones(),
            citas: source.citas(),
        }
    }

    /// Loads every repository from its store.
    pub fn comenzar(&mut self) -> Vec<LoadSummary> {
        vec![
            self.alumnos.comenzar(),
            self.tutorias.comenzar(),
            self.sesiones.comenzar(),
            self.citas.comenzar(),
        ]
    }

    /// Saves every repository to its store.
    ///
    /// Every repository is attempted even when an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered.
    pub fn terminar(&self) -> Result<(), StoreError> {
        let results: [Result<(), StoreError>; 4] = [
            self.alumnos.terminar(),
            self.tutorias.terminar(),
            self.sesiones.terminar(),
            self.citas.terminar(),
        ];
        results.into_iter().collect()
    }
}
