// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LoadedRecords, RecordStore, StoreError};
use time::{Date, Duration, Time};
use tutorias_domain::{Alumno, Cita, Profesor, Sesion, Tutoria, today};

pub fn create_test_alumno(correo: &str) -> Alumno {
    Alumno::new("Luis Martín", correo).unwrap()
}

pub fn create_test_profesor(dni: &str) -> Profesor {
    Profesor::new("Ana García López", dni, "ana.garcia@iesalandalus.org").unwrap()
}

pub fn create_test_tutoria(dni: &str, nombre: &str) -> Tutoria {
    Tutoria::new(create_test_profesor(dni), nombre).unwrap()
}

pub fn days_from_now(days: i64) -> Date {
    today().checked_add(Duration::days(days)).unwrap()
}

/// A 16:00 to 18:00 session in 15-minute slots.
pub fn create_test_sesion(tutoria: &Tutoria, days: i64) -> Sesion {
    Sesion::ficticia(tutoria.clone(), days_from_now(days)).unwrap()
}

pub fn create_test_cita(alumno: &Alumno, sesion: &Sesion, hora: Time) -> Cita {
    Cita::new(alumno.clone(), sesion.clone(), hora).unwrap()
}

/// A store that fails every read and write.
pub struct BrokenStore;

impl<T> RecordStore<T> for BrokenStore {
    fn name(&self) -> &str {
        "broken"
    }

    fn load(&self) -> Result<LoadedRecords<T>, StoreError> {
        Err(StoreError::Io(String::from("disk on fire")))
    }

    fn save(&self, _records: &[T]) -> Result<(), StoreError> {
        Err(StoreError::Io(String::from("disk on fire")))
    }
}

/// A store that returns fixed records plus some unreadable entries.
pub struct FixedStore<T> {
    pub records: Vec<T>,
    pub skipped: Vec<String>,
}

impl<T: Clone> RecordStore<T> for FixedStore<T> {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load(&self) -> Result<LoadedRecords<T>, StoreError> {
        Ok(LoadedRecords {
            records: self.records.clone(),
            skipped: self.skipped.clone(),
        })
    }

    fn save(&self, _records: &[T]) -> Result<(), StoreError> {
        Ok(())
    }
}
