// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cmp::Ordering;
use tutorias_domain::{Alumno, Cita, Sesion, Tutoria, format_fecha, format_hora};

/// An entity that can be held by a `Repository`.
///
/// Uniqueness inside a repository follows the entity's `PartialEq`, which
/// compares identity keys only.
pub trait Entity: Clone + PartialEq {
    /// Human-readable name of the entity kind, used in errors and logs.
    const KIND: &'static str;

    /// Renders the identity key for errors and logs.
    fn identity(&self) -> String;

    /// Order used by unfiltered listings.
    fn listing_order(&self, other: &Self) -> Ordering;
}

impl Entity for Alumno {
    const KIND: &'static str = "student";

    fn identity(&self) -> String {
        self.correo().to_string()
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        self.correo().cmp(other.correo())
    }
}

impl Entity for Tutoria {
    const KIND: &'static str = "tutoring group";

    fn identity(&self) -> String {
        format!("{}/{}", self.profesor().dni(), self.nombre())
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        cmp_tutorias(self, other)
    }
}

impl Entity for Sesion {
    const KIND: &'static str = "session";

    fn identity(&self) -> String {
        format!("{}/{}", self.tutoria().identity(), format_fecha(self.fecha()))
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        cmp_sesiones(self, other)
    }
}

impl Entity for Cita {
    const KIND: &'static str = "appointment";

    fn identity(&self) -> String {
        format!(
            "{}/{}/{}",
            self.sesion().identity(),
            format_hora(self.hora()),
            self.alumno().correo()
        )
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        cmp_sesiones(self.sesion(), other.sesion()).then_with(|| self.hora().cmp(&other.hora()))
    }
}

/// Professor ID, then group name.
fn cmp_tutorias(a: &Tutoria, b: &Tutoria) -> Ordering {
    a.profesor()
        .dni()
        .cmp(b.profesor().dni())
        .then_with(|| a.nombre().cmp(b.nombre()))
}

/// Group order, then session date.
fn cmp_sesiones(a: &Sesion, b: &Sesion) -> Ordering {
    cmp_tutorias(a.tutoria(), b.tutoria()).then_with(|| a.fecha().cmp(&b.fecha()))
}
