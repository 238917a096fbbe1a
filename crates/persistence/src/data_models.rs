// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable record models.
//!
//! Domain entities carry no serialization of their own. Each entity maps to a
//! plain record here, and every record is re-validated through the domain
//! constructors when it is read back.

use crate::error::PersistenceError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};
use tutorias_domain::{Alumno, Cita, Profesor, Sesion, Tutoria, format_hora, parse_hora};

const FORMATO_FECHA_ISO: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// One line of a store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame<R> {
    /// A single record.
    Record(R),
    /// Marks a complete store. Always the last line.
    End,
}

/// Serializable representation of an `Alumno`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumnoRecord {
    pub nombre: String,
    pub correo: String,
}

/// Serializable representation of a `Profesor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfesorRecord {
    pub nombre: String,
    pub dni: String,
    pub correo: String,
}

/// Serializable representation of a `Tutoria`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutoriaRecord {
    pub profesor: ProfesorRecord,
    pub nombre: String,
}

/// Serializable representation of a `Sesion`.
///
/// `fecha` is `YYYY-MM-DD`; the times are `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SesionRecord {
    pub tutoria: TutoriaRecord,
    pub fecha: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub minutos_duracion: u32,
}

/// Serializable representation of a `Cita`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitaRecord {
    pub alumno: AlumnoRecord,
    pub sesion: SesionRecord,
    pub hora: String,
}

/// An entity that can be written to and read back from a store file.
pub trait StoredRecord: Sized {
    /// The serializable form of the entity.
    type Record: Serialize + DeserializeOwned;

    /// Converts the entity to its record.
    fn to_record(&self) -> Self::Record;

    /// Rebuilds the entity from a record, applying domain validation.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if the record describes an
    /// invalid entity, or `PersistenceError::SerializationError` if a stored
    /// date cannot be parsed.
    fn from_record(record: Self::Record) -> Result<Self, PersistenceError>;
}

fn encode_fecha(fecha: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        fecha.year(),
        u8::from(fecha.month()),
        fecha.day()
    )
}

fn decode_fecha(fecha: &str) -> Result<Date, PersistenceError> {
    Date::parse(fecha, FORMATO_FECHA_ISO).map_err(|e| {
        PersistenceError::SerializationError(format!("Invalid stored date '{fecha}': {e}"))
    })
}

fn decode_hora(hora: &str) -> Result<Time, PersistenceError> {
    Ok(parse_hora(hora)?)
}

impl StoredRecord for Alumno {
    type Record = AlumnoRecord;

    fn to_record(&self) -> AlumnoRecord {
        AlumnoRecord {
            nombre: self.nombre().to_string(),
            correo: self.correo().to_string(),
        }
    }

    fn from_record(record: AlumnoRecord) -> Result<Self, PersistenceError> {
        Ok(Self::new(&record.nombre, &record.correo)?)
    }
}

impl StoredRecord for Profesor {
    type Record = ProfesorRecord;

    fn to_record(&self) -> ProfesorRecord {
        ProfesorRecord {
            nombre: self.nombre().to_string(),
            dni: self.dni().to_string(),
            correo: self.correo().to_string(),
        }
    }

    fn from_record(record: ProfesorRecord) -> Result<Self, PersistenceError> {
        Ok(Self::new(&record.nombre, &record.dni, &record.correo)?)
    }
}

impl StoredRecord for Tutoria {
    type Record = TutoriaRecord;

    fn to_record(&self) -> TutoriaRecord {
        TutoriaRecord {
            profesor: self.profesor().to_record(),
            nombre: self.nombre().to_string(),
        }
    }

    fn from_record(record: TutoriaRecord) -> Result<Self, PersistenceError> {
        let profesor: Profesor = Profesor::from_record(record.profesor)?;
        Ok(Self::new(profesor, &record.nombre)?)
    }
}

impl StoredRecord for Sesion {
    type Record = SesionRecord;

    fn to_record(&self) -> SesionRecord {
        SesionRecord {
            tutoria: self.tutoria().to_record(),
            fecha: encode_fecha(self.fecha()),
            hora_inicio: format_hora(self.hora_inicio()),
            hora_fin: format_hora(self.hora_fin()),
            minutos_duracion: self.minutos_duracion(),
        }
    }

    // Stored sessions may have passed their date since they were saved.
    fn from_record(record: SesionRecord) -> Result<Self, PersistenceError> {
        let tutoria: Tutoria = Tutoria::from_record(record.tutoria)?;
        Ok(Self::restore(
            tutoria,
            decode_fecha(&record.fecha)?,
            decode_hora(&record.hora_inicio)?,
            decode_hora(&record.hora_fin)?,
            record.minutos_duracion,
        )?)
    }
}

impl StoredRecord for Cita {
    type Record = CitaRecord;

    fn to_record(&self) -> CitaRecord {
        CitaRecord {
            alumno: self.alumno().to_record(),
            sesion: self.sesion().to_record(),
            hora: format_hora(self.hora()),
        }
    }

    fn from_record(record: CitaRecord) -> Result<Self, PersistenceError> {
        let alumno: Alumno = Alumno::from_record(record.alumno)?;
        let sesion: Sesion = Sesion::from_record(record.sesion)?;
        Ok(Self::new(alumno, sesion, decode_hora(&record.hora)?)?)
    }
}
