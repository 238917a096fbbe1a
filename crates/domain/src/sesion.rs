// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tutoring sessions.
//!
//! ## Invariants
//!
//! - The date is strictly after today when the session is scheduled
//! - The start time lies in class hours `[16:00, 22:15)`
//! - The end time lies in class hours `(16:00, 22:15]`
//! - The start time is strictly before the end time
//! - The slot duration is positive and divides the session span
//!
//! The four window rules are checked independently so that the error names
//! exactly the rule that was broken.

use crate::error::DomainError;
use crate::schedule::{HORA_COMIENZO_CLASES, HORA_FIN_CLASES, format_fecha, format_hora, today};
use crate::tutoria::Tutoria;
use time::macros::time;
use time::{Date, Time};

/// A scheduled meeting window for a tutoring group, split into fixed-size slots.
///
/// The session owns a snapshot of its tutoring group. Identity is the pair
/// `(tutoria, fecha)`: a group meets at most once per day.
#[derive(Debug, Clone)]
pub struct Sesion {
    tutoria: Tutoria,
    fecha: Date,
    hora_inicio: Time,
    hora_fin: Time,
    /// Slot length in minutes.
    minutos_duracion: u32,
}

impl PartialEq for Sesion {
    fn eq(&self, other: &Self) -> bool {
        self.tutoria == other.tutoria && self.fecha == other.fecha
    }
}

impl Eq for Sesion {}

impl std::hash::Hash for Sesion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tutoria.hash(state);
        self.fecha.hash(state);
    }
}

impl Sesion {
    /// Schedules a new session.
    ///
    /// # Arguments
    ///
    /// * `tutoria` - The tutoring group; the session keeps its own copy
    /// * `fecha` - The session date, which must be after today
    /// * `hora_inicio` - Start of the first slot
    /// * `hora_fin` - End of the last slot
    /// * `minutos_duracion` - Slot length in minutes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PastDate` if the date is today or earlier, or the
    /// error for the first window rule that is broken.
    pub fn new(
        tutoria: Tutoria,
        fecha: Date,
        hora_inicio: Time,
        hora_fin: Time,
        minutos_duracion: u32,
    ) -> Result<Self, DomainError> {
        if fecha <= today() {
            return Err(DomainError::PastDate { fecha });
        }
        Self::restore(tutoria, fecha, hora_inicio, hora_fin, minutos_duracion)
    }

    /// Rebuilds a previously scheduled session.
    ///
    /// Applies every window rule but not the future-date rule: a stored
    /// session stays valid after its date has passed.
    ///
    /// # Errors
    ///
    /// Returns the error for the first window rule that is broken.
    pub fn restore(
        tutoria: Tutoria,
        fecha: Date,
        hora_inicio: Time,
        hora_fin: Time,
        minutos_duracion: u32,
    ) -> Result<Self, DomainError> {
        check_window(hora_inicio, hora_fin, minutos_duracion)?;
        Ok(Self {
            tutoria,
            fecha,
            hora_inicio,
            hora_fin,
            minutos_duracion,
        })
    }

    /// Creates a placeholder session carrying only the identity key.
    ///
    /// The window is 16:00 to 18:00 in 15-minute slots.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PastDate` if the date is today or earlier.
    pub fn ficticia(tutoria: Tutoria, fecha: Date) -> Result<Self, DomainError> {
        Self::new(tutoria, fecha, HORA_COMIENZO_CLASES, time!(18:00), 15)
    }

    /// Returns the tutoring group snapshot.
    #[must_use]
    pub const fn tutoria(&self) -> &Tutoria {
        &self.tutoria
    }

    /// Returns the session date.
    #[must_use]
    pub const fn fecha(&self) -> Date {
        self.fecha
    }

    /// Returns the start time.
    #[must_use]
    pub const fn hora_inicio(&self) -> Time {
        self.hora_inicio
    }

    /// Returns the end time.
    #[must_use]
    pub const fn hora_fin(&self) -> Time {
        self.hora_fin
    }

    /// Returns the slot length in minutes.
    #[must_use]
    pub const fn minutos_duracion(&self) -> u32 {
        self.minutos_duracion
    }

    /// Moves the start time, re-validating the whole window.
    ///
    /// # Errors
    ///
    /// Returns the window error if the new start breaks a rule; the session
    /// is left unchanged.
    pub fn set_hora_inicio(&mut self, hora_inicio: Time) -> Result<(), DomainError> {
        check_window(hora_inicio, self.hora_fin, self.minutos_duracion)?;
        self.hora_inicio = hora_inicio;
        Ok(())
    }

    /// Moves the end time, re-validating the whole window.
    ///
    /// # Errors
    ///
    /// Returns the window error if the new end breaks a rule; the session
    /// is left unchanged.
    pub fn set_hora_fin(&mut self, hora_fin: Time) -> Result<(), DomainError> {
        check_window(self.hora_inicio, hora_fin, self.minutos_duracion)?;
        self.hora_fin = hora_fin;
        Ok(())
    }

    /// Changes the slot length, re-validating the whole window.
    ///
    /// # Errors
    ///
    /// Returns the window error if the new length breaks a rule; the session
    /// is left unchanged.
    pub fn set_minutos_duracion(&mut self, minutos_duracion: u32) -> Result<(), DomainError> {
        check_window(self.hora_inicio, self.hora_fin, minutos_duracion)?;
        self.minutos_duracion = minutos_duracion;
        Ok(())
    }

    /// Returns the number of minutes between start and end.
    #[must_use]
    pub fn minutos_totales(&self) -> i64 {
        (self.hora_fin - self.hora_inicio).whole_minutes()
    }
}

fn check_window(
    hora_inicio: Time,
    hora_fin: Time,
    minutos_duracion: u32,
) -> Result<(), DomainError> {
    if minutos_duracion == 0 {
        return Err(DomainError::InvalidDuration(minutos_duracion));
    }
    if hora_inicio < HORA_COMIENZO_CLASES || hora_inicio >= HORA_FIN_CLASES {
        return Err(DomainError::InvalidStartTime(hora_inicio));
    }
    if hora_fin <= HORA_COMIENZO_CLASES || hora_fin > HORA_FIN_CLASES {
        return Err(DomainError::InvalidEndTime(hora_fin));
    }
    if hora_inicio >= hora_fin {
        return Err(DomainError::StartNotBeforeEnd {
            start: hora_inicio,
            end: hora_fin,
        });
    }
    let span: i64 = (hora_fin - hora_inicio).whole_minutes();
    if span % i64::from(minutos_duracion) != 0 {
        return Err(DomainError::DurationNotDivisor {
            span,
            duration: minutos_duracion,
        });
    }
    Ok(())
}

impl std::fmt::Display for Sesion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tutoria={}, fecha={}, horaInicio={}, horaFin={}, minutosDuracion={}",
            self.tutoria,
            format_fecha(self.fecha),
            format_hora(self.hora_inicio),
            format_hora(self.hora_fin),
            self.minutos_duracion
        )
    }
}
