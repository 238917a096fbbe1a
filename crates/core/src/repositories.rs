// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The four concrete repositories and their filtered listings.
//!
//! ## Listing order
//!
//! - Alumnos: email
//! - Tutorias: professor ID, group name
//! - Sesiones: professor ID, group name, date
//! - Citas: professor ID, group name, date, time
//!
//! A filtered listing keeps the same order, reduced to the keys that still
//! vary once the parent is fixed.

use crate::entity::Entity;
use crate::repository::Repository;
use tutorias_domain::{Alumno, Cita, Profesor, Sesion, Tutoria};

/// Students, unique by email.
pub type Alumnos = Repository<Alumno>;

/// Tutoring groups, unique by professor and name.
pub type Tutorias = Repository<Tutoria>;

/// Sessions, unique by tutoring group and date.
pub type Sesiones = Repository<Sesion>;

/// Appointments, unique by student, session and time.
pub type Citas = Repository<Cita>;

impl Repository<Tutoria> {
    /// Returns copies of the groups held by `profesor`, sorted by name.
    #[must_use]
    pub fn por_profesor(&self, profesor: &Profesor) -> Vec<Tutoria> {
        self.filtrar(
            |t| t.profesor() == profesor,
            |a, b| a.nombre().cmp(b.nombre()),
        )
    }
}

impl Repository<Sesion> {
    /// Returns copies of the sessions of `tutoria`, sorted by date.
    #[must_use]
    pub fn por_tutoria(&self, tutoria: &Tutoria) -> Vec<Sesion> {
        self.filtrar(|s| s.tutoria() == tutoria, |a, b| a.fecha().cmp(&b.fecha()))
    }
}

impl Repository<Cita> {
    /// Returns copies of the appointments booked in `sesion`, sorted by time.
    #[must_use]
    pub fn por_sesion(&self, sesion: &Sesion) -> Vec<Cita> {
        self.filtrar(|c| c.sesion() == sesion, |a, b| a.hora().cmp(&b.hora()))
    }

    /// Returns copies of the appointments booked by `alumno`, in listing order.
    #[must_use]
    pub fn por_alumno(&self, alumno: &Alumno) -> Vec<Cita> {
        self.filtrar(|c| c.alumno() == alumno, Cita::listing_order)
    }
}
