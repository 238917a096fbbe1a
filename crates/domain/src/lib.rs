// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rule validation for the Tutorias scheduling system.
//!
//! Every entity is built through a validating constructor; no partially
//! valid value can exist. Composite entities own copies of the entities
//! they embed, and equality follows each entity's identity key rather than
//! its full set of fields.

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

mod alumno;
mod cita;
mod error;
mod profesor;
mod schedule;
mod sesion;
mod tutoria;
mod validation;

#[cfg(test)]
mod tests;

pub use alumno::Alumno;
pub use cita::Cita;
pub use error::DomainError;
pub use profesor::Profesor;
pub use schedule::{
    HORA_COMIENZO_CLASES, HORA_FIN_CLASES, format_fecha, format_hora, parse_fecha, parse_hora,
    today,
};
pub use sesion::Sesion;
pub use tutoria::Tutoria;
pub use validation::{
    expected_dni_letter, format_name, validate_correo, validate_dni, validate_full_name,
};
