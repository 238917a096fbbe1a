// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{format_name, validate_correo, validate_dni, validate_full_name};

/// A professor.
///
/// Identity is the national ID (DNI). Name and email do not take part in
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct Profesor {
    /// Normalized full name (two or more words).
    nombre: String,
    /// National ID: 8 digits and an uppercase check letter.
    dni: String,
    /// Email address.
    correo: String,
}

impl PartialEq for Profesor {
    fn eq(&self, other: &Self) -> bool {
        self.dni == other.dni
    }
}

impl Eq for Profesor {}

impl std::hash::Hash for Profesor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.dni.hash(state);
    }
}

impl Profesor {
    /// Creates a new `Profesor`.
    ///
    /// # Arguments
    ///
    /// * `nombre` - Full name; normalized to single spaces and capitalized words
    /// * `dni` - National ID; the check letter is verified
    /// * `correo` - Email address
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Missing` if any field is blank, or the
    /// invalid-argument variant for the first field that breaks its rule.
    pub fn new(nombre: &str, dni: &str, correo: &str) -> Result<Self, DomainError> {
        validate_full_name(nombre)?;
        let dni: String = validate_dni(dni)?;
        validate_correo(correo)?;

        Ok(Self {
            nombre: format_name(nombre),
            dni,
            correo: correo.trim().to_string(),
        })
    }

    /// Creates a placeholder professor carrying only the identity key.
    ///
    /// # Errors
    ///
    /// Returns an error if the national ID is blank or invalid.
    pub fn ficticio(dni: &str) -> Result<Self, DomainError> {
        Self::new("Jaime El Poderoso", dni, "jaimeelpoderoso@ficticio.com")
    }

    /// Returns the normalized name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Returns the national ID.
    #[must_use]
    pub fn dni(&self) -> &str {
        &self.dni
    }

    /// Returns the email address.
    #[must_use]
    pub fn correo(&self) -> &str {
        &self.correo
    }

    /// Replaces the national ID after validating it.
    ///
    /// On failure the professor is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the new ID is blank, malformed, or fails the checksum.
    pub fn set_dni(&mut self, dni: &str) -> Result<(), DomainError> {
        self.dni = validate_dni(dni)?;
        Ok(())
    }

    /// Returns the uppercase initial of every word of the name.
    #[must_use]
    pub fn iniciales(&self) -> String {
        self.nombre
            .split(' ')
            .filter_map(|palabra| palabra.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl std::fmt::Display for Profesor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nombre={} ({}), DNI={}, correo={}",
            self.nombre,
            self.iniciales(),
            self.dni,
            self.correo
        )
    }
}
