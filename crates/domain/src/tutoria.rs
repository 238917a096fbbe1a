// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::profesor::Profesor;
use crate::validation::require;

/// A professor's named tutoring group.
///
/// The group owns its own copy of the professor. Identity is the pair
/// `(profesor, nombre)`, so two professors may use the same group name.
#[derive(Debug, Clone)]
pub struct Tutoria {
    profesor: Profesor,
    nombre: String,
}

impl PartialEq for Tutoria {
    fn eq(&self, other: &Self) -> bool {
        self.profesor == other.profesor && self.nombre == other.nombre
    }
}

impl Eq for Tutoria {}

impl std::hash::Hash for Tutoria {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.profesor.hash(state);
        self.nombre.hash(state);
    }
}

impl Tutoria {
    /// Creates a new `Tutoria`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Missing` if the group name is blank.
    pub fn new(profesor: Profesor, nombre: &str) -> Result<Self, DomainError> {
        let nombre: &str = require("tutoring group name", nombre)?;
        Ok(Self {
            profesor,
            nombre: nombre.to_string(),
        })
    }

    /// Returns the owning professor.
    #[must_use]
    pub const fn profesor(&self) -> &Profesor {
        &self.profesor
    }

    /// Returns the group name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }
}

impl std::fmt::Display for Tutoria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profesor={}, nombre={}", self.profesor, self.nombre)
    }
}
