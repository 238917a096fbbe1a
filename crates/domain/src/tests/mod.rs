// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod validation;

use crate::{Alumno, Profesor, Sesion, Tutoria, today};
use time::macros::time;
use time::{Date, Duration};

pub fn create_test_profesor() -> Profesor {
    Profesor::new("Ana García López", "12345678Z", "ana.garcia@iesalandalus.org").unwrap()
}

pub fn create_test_alumno() -> Alumno {
    Alumno::new("Luis Martín", "luis.martin@alumnos.es").unwrap()
}

pub fn create_test_tutoria() -> Tutoria {
    Tutoria::new(create_test_profesor(), "Matemáticas").unwrap()
}

/// Returns a date the given number of days after today.
pub fn days_from_now(days: i64) -> Date {
    today().checked_add(Duration::days(days)).unwrap()
}

/// Returns a 16:00 to 18:00 session in 15-minute slots, thirty days out.
pub fn create_test_sesion() -> Sesion {
    Sesion::new(
        create_test_tutoria(),
        days_from_now(30),
        time!(16:00),
        time!(18:00),
        15,
    )
    .unwrap()
}
