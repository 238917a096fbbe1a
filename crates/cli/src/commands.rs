// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Subcommand, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use time::{Date, Time};
use tracing::info;
use tutorias::Repositories;
use tutorias_domain::{
    Alumno, Cita, HORA_COMIENZO_CLASES, HORA_FIN_CLASES, Profesor, Sesion, Tutoria, format_fecha,
    parse_fecha, parse_hora,
};

/// The repository to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Coleccion {
    Alumnos,
    Tutorias,
    Sesiones,
    Citas,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Show how many entities each repository holds
    #[command(visible_alias = "r")]
    Resumen,

    /// List a repository in order
    #[command(visible_alias = "l")]
    Listar {
        #[arg(value_enum)]
        coleccion: Coleccion,
    },

    /// Register a student
    AltaAlumno {
        /// Full name
        #[arg(long)]
        nombre: String,
        /// Email address, the student's key
        #[arg(long)]
        correo: String,
    },

    /// Register a tutoring group for a teacher
    AltaTutoria {
        /// Teacher's full name
        #[arg(long)]
        profesor: String,
        /// Teacher's national ID
        #[arg(long)]
        dni: String,
        /// Teacher's email address
        #[arg(long)]
        correo: String,
        /// Name of the group
        #[arg(long)]
        nombre: String,
    },

    /// Schedule a session for an existing tutoring group
    AltaSesion {
        /// National ID of the group's teacher
        #[arg(long)]
        dni: String,
        /// Name of the group
        #[arg(long)]
        tutoria: String,
        /// Session date, dd/mm/yyyy
        #[arg(long)]
        fecha: String,
        /// Start time, HH:MM
        #[arg(long)]
        inicio: String,
        /// End time, HH:MM
        #[arg(long)]
        fin: String,
        /// Slot length in minutes
        #[arg(long)]
        minutos: u32,
    },

    /// Book an appointment for an existing student in an existing session
    AltaCita {
        /// Student's email address
        #[arg(long)]
        correo: String,
        /// National ID of the group's teacher
        #[arg(long)]
        dni: String,
        /// Name of the group
        #[arg(long)]
        tutoria: String,
        /// Session date, dd/mm/yyyy
        #[arg(long)]
        fecha: String,
        /// Appointment time, HH:MM
        #[arg(long)]
        hora: String,
    },

    /// Remove a student who has no appointments
    BajaAlumno {
        /// Email address of the student
        #[arg(long)]
        correo: String,
    },
}

impl Command {
    /// Returns true if the command changes a repository.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Resumen | Self::Listar { .. })
    }

    /// Runs the command and returns the lines to print.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid, a referenced entity does
    /// not exist, or the repository rejects the change.
    pub fn execute(&self, repos: &mut Repositories) -> Result<Vec<String>> {
        match self {
            Self::Resumen => Ok(resumen(repos)),
            Self::Listar { coleccion } => Ok(listar(repos, *coleccion)),
            Self::AltaAlumno { nombre, correo } => {
                let alumno: Alumno = Alumno::new(nombre, correo)?;
                repos.alumnos.insertar(&alumno)?;
                info!(correo = %alumno.correo(), "Student registered");
                Ok(vec![format!("Registered student: {alumno}")])
            }
            Self::AltaTutoria {
                profesor,
                dni,
                correo,
                nombre,
            } => {
                let profesor: Profesor = Profesor::new(profesor, dni, correo)?;
                let tutoria: Tutoria = Tutoria::new(profesor, nombre)?;
                repos.tutorias.insertar(&tutoria)?;
                info!(
                    dni = %tutoria.profesor().dni(),
                    nombre = %tutoria.nombre(),
                    "Tutoring group registered"
                );
                Ok(vec![format!("Registered tutoring group: {tutoria}")])
            }
            Self::AltaSesion {
                dni,
                tutoria,
                fecha,
                inicio,
                fin,
                minutos,
            } => {
                let tutoria: Tutoria = find_tutoria(repos, dni, tutoria)?;
                let sesion: Sesion = Sesion::new(
                    tutoria,
                    parse_fecha(fecha)?,
                    parse_hora(inicio)?,
                    parse_hora(fin)?,
                    *minutos,
                )?;
                repos.sesiones.insertar(&sesion)?;
                info!(fecha = %fecha, "Session scheduled");
                Ok(vec![format!("Scheduled session: {sesion}")])
            }
            Self::AltaCita {
                correo,
                dni,
                tutoria,
                fecha,
                hora,
            } => {
                let alumno: Alumno = repos
                    .alumnos
                    .buscar(&Alumno::ficticio(correo)?)
                    .ok_or_else(|| eyre!("No student with email '{correo}'"))?;
                let tutoria: Tutoria = find_tutoria(repos, dni, tutoria)?;
                let sesion: Sesion = find_sesion(repos, tutoria, parse_fecha(fecha)?)?;
                let hora: Time = parse_hora(hora)?;
                let cita: Cita = Cita::new(alumno, sesion, hora)?;
                repos.citas.insertar(&cita)?;
                info!(correo = %correo, "Appointment booked");
                Ok(vec![format!("Booked appointment: {cita}")])
            }
            Self::BajaAlumno { correo } => {
                let clave: Alumno = Alumno::ficticio(correo)?;
                let pendientes: usize = repos.citas.por_alumno(&clave).len();
                if pendientes > 0 {
                    bail!("Student '{correo}' still has {pendientes} appointment(s)");
                }
                repos.alumnos.borrar(&clave)?;
                info!(correo = %correo, "Student removed");
                Ok(vec![format!("Removed student: {correo}")])
            }
        }
    }
}

fn resumen(repos: &Repositories) -> Vec<String> {
    vec![
        format!("alumnos: {}", repos.alumnos.tamano()),
        format!("tutorias: {}", repos.tutorias.tamano()),
        format!("sesiones: {}", repos.sesiones.tamano()),
        format!("citas: {}", repos.citas.tamano()),
    ]
}

fn listar(repos: &Repositories, coleccion: Coleccion) -> Vec<String> {
    match coleccion {
        Coleccion::Alumnos => display_all(&repos.alumnos.listar()),
        Coleccion::Tutorias => display_all(&repos.tutorias.listar()),
        Coleccion::Sesiones => display_all(&repos.sesiones.listar()),
        Coleccion::Citas => display_all(&repos.citas.listar()),
    }
}

fn display_all<T: std::fmt::Display>(entidades: &[T]) -> Vec<String> {
    entidades.iter().map(ToString::to_string).collect()
}

fn find_tutoria(repos: &Repositories, dni: &str, nombre: &str) -> Result<Tutoria> {
    let clave: Tutoria = Tutoria::new(Profesor::ficticio(dni)?, nombre)?;
    repos
        .tutorias
        .buscar(&clave)
        .ok_or_else(|| eyre!("No tutoring group '{nombre}' for teacher '{dni}'"))
}

// Sessions are looked up by key only. The window is any valid one, and the
// date may already have passed.
fn find_sesion(repos: &Repositories, tutoria: Tutoria, fecha: Date) -> Result<Sesion> {
    let clave: Sesion =
        Sesion::restore(tutoria, fecha, HORA_COMIENZO_CLASES, HORA_FIN_CLASES, 15)?;
    repos
        .sesiones
        .buscar(&clave)
        .ok_or_else(|| eyre!("No session of that group on {}", format_fecha(fecha)))
}
