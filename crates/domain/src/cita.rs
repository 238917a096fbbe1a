// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alumno::Alumno;
use crate::error::DomainError;
use crate::schedule::format_hora;
use crate::sesion::Sesion;
use time::Time;

/// A student's booked slot inside a session.
///
/// Owns snapshots of both the student and the session.
#[derive(Debug, Clone)]
pub struct Cita {
    alumno: Alumno,
    sesion: Sesion,
    hora: Time,
}

impl PartialEq for Cita {
    fn eq(&self, other: &Self) -> bool {
        self.alumno == other.alumno && self.sesion == other.sesion && self.hora == other.hora
    }
}

impl Eq for Cita {}

impl std::hash::Hash for Cita {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.alumno.hash(state);
        self.sesion.hash(state);
        self.hora.hash(state);
    }
}

impl Cita {
    /// Books an appointment.
    ///
    /// The time must lie within the session window (both ends inclusive) and
    /// start on a whole minute whose minute of the hour is a multiple of the
    /// slot duration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AppointmentOutsideSession` if the time is outside
    /// the window, or `DomainError::AppointmentOffSlot` if it does not start a slot.
    pub fn new(alumno: Alumno, sesion: Sesion, hora: Time) -> Result<Self, DomainError> {
        if hora < sesion.hora_inicio() || hora > sesion.hora_fin() {
            return Err(DomainError::AppointmentOutsideSession {
                hora,
                start: sesion.hora_inicio(),
                end: sesion.hora_fin(),
            });
        }

        if u32::from(hora.minute()) % sesion.minutos_duracion() != 0 || hora.second() != 0 {
            return Err(DomainError::AppointmentOffSlot {
                hora,
                duration: sesion.minutos_duracion(),
            });
        }

        Ok(Self {
            alumno,
            sesion,
            hora,
        })
    }

    /// Returns the student snapshot.
    #[must_use]
    pub const fn alumno(&self) -> &Alumno {
        &self.alumno
    }

    /// Returns the session snapshot.
    #[must_use]
    pub const fn sesion(&self) -> &Sesion {
        &self.sesion
    }

    /// Returns the appointment time.
    #[must_use]
    pub const fn hora(&self) -> Time {
        self.hora
    }
}

impl std::fmt::Display for Cita {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "alumno={}, sesion={}, hora={}",
            self.alumno,
            self.sesion,
            format_hora(self.hora)
        )
    }
}
