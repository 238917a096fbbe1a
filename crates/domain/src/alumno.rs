// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{format_name, require, validate_correo};

/// A student.
///
/// A student is identified by email address alone: two `Alumno` values with
/// the same email are the same student regardless of name.
#[derive(Debug, Clone)]
pub struct Alumno {
    /// Normalized full name.
    nombre: String,
    /// Email address. The identity key.
    correo: String,
}

impl PartialEq for Alumno {
    fn eq(&self, other: &Self) -> bool {
        self.correo == other.correo
    }
}

impl Eq for Alumno {}

impl std::hash::Hash for Alumno {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.correo.hash(state);
    }
}

impl Alumno {
    /// Creates a new `Alumno`.
    ///
    /// The name is normalized (single spaces, each word capitalized).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Missing` if either field is blank, or
    /// `DomainError::InvalidEmail` if the email is malformed.
    pub fn new(nombre: &str, correo: &str) -> Result<Self, DomainError> {
        let nombre: &str = require("name", nombre)?;
        validate_correo(correo)?;

        Ok(Self {
            nombre: format_name(nombre),
            correo: correo.trim().to_string(),
        })
    }

    /// Creates a placeholder student carrying only the identity key.
    ///
    /// Used to look up a stored student by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is blank or malformed.
    pub fn ficticio(correo: &str) -> Result<Self, DomainError> {
        Self::new("Alumno Ficticio", correo)
    }

    /// Returns the normalized name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Returns the email address.
    #[must_use]
    pub fn correo(&self) -> &str {
        &self.correo
    }
}

impl std::fmt::Display for Alumno {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nombre={}, correo={}", self.nombre, self.correo)
    }
}
