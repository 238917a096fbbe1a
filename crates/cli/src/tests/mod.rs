// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod args_tests;
mod commands_tests;

use crate::commands::Command;
use time::Duration;
use tutorias::{Repositories, VolatileDataSource};
use tutorias_domain::{format_fecha, today};

pub fn empty_repositories() -> Repositories {
    Repositories::from_source(&VolatileDataSource::new())
}

/// A `dd/mm/yyyy` date `days` from today.
pub fn fecha_in(days: i64) -> String {
    format_fecha(today().checked_add(Duration::days(days)).unwrap())
}

pub fn alta_alumno(correo: &str) -> Command {
    Command::AltaAlumno {
        nombre: String::from("luis martín"),
        correo: String::from(correo),
    }
}

pub fn alta_tutoria() -> Command {
    Command::AltaTutoria {
        profesor: String::from("Ana García López"),
        dni: String::from("12345678Z"),
        correo: String::from("ana.garcia@iesalandalus.org"),
        nombre: String::from("Física"),
    }
}

pub fn alta_sesion(fecha: &str) -> Command {
    Command::AltaSesion {
        dni: String::from("12345678Z"),
        tutoria: String::from("Física"),
        fecha: String::from(fecha),
        inicio: String::from("16:00"),
        fin: String::from("18:00"),
        minutos: 30,
    }
}

pub fn alta_cita(correo: &str, fecha: &str, hora: &str) -> Command {
    Command::AltaCita {
        correo: String::from(correo),
        dni: String::from("12345678Z"),
        tutoria: String::from("Física"),
        fecha: String::from(fecha),
        hora: String::from(hora),
    }
}
