// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{alta_alumno, alta_cita, alta_sesion, alta_tutoria, empty_repositories, fecha_in};
use crate::commands::{Coleccion, Command};
use tutorias::Repositories;

fn run(repos: &mut Repositories, command: &Command) -> Vec<String> {
    command.execute(repos).unwrap()
}

fn scheduled(fecha: &str) -> Repositories {
    let mut repos: Repositories = empty_repositories();
    run(&mut repos, &alta_alumno("luis@alumnos.es"));
    run(&mut repos, &alta_tutoria());
    run(&mut repos, &alta_sesion(fecha));
    repos
}

#[test]
fn test_resumen_counts_every_repository() {
    let fecha: String = fecha_in(10);
    let mut repos: Repositories = scheduled(&fecha);
    run(&mut repos, &alta_cita("luis@alumnos.es", &fecha, "16:30"));

    let lines: Vec<String> = run(&mut repos, &Command::Resumen);

    assert_eq!(
        lines,
        vec!["alumnos: 1", "tutorias: 1", "sesiones: 1", "citas: 1"]
    );
}

#[test]
fn test_alta_alumno_normalizes_name() {
    let mut repos: Repositories = empty_repositories();

    let lines: Vec<String> = run(&mut repos, &alta_alumno("luis@alumnos.es"));

    assert_eq!(
        lines,
        vec!["Registered student: nombre=Luis Martín, correo=luis@alumnos.es"]
    );
}

#[test]
fn test_alta_alumno_rejects_invalid_email() {
    let mut repos: Repositories = empty_repositories();

    let result = alta_alumno("luis").execute(&mut repos);

    assert!(result.is_err());
    assert_eq!(repos.alumnos.tamano(), 0);
}

#[test]
fn test_alta_alumno_twice_is_rejected() {
    let mut repos: Repositories = empty_repositories();
    run(&mut repos, &alta_alumno("luis@alumnos.es"));

    let result = alta_alumno("luis@alumnos.es").execute(&mut repos);

    let message: String = result.unwrap_err().to_string();
    assert_eq!(
        message,
        "A student with key 'luis@alumnos.es' already exists"
    );
}

#[test]
fn test_alta_sesion_requires_existing_group() {
    let mut repos: Repositories = empty_repositories();

    let result = alta_sesion(&fecha_in(10)).execute(&mut repos);

    assert!(result.is_err());
    assert_eq!(repos.sesiones.tamano(), 0);
}

#[test]
fn test_alta_sesion_rejects_past_date() {
    let mut repos: Repositories = empty_repositories();
    run(&mut repos, &alta_tutoria());

    let result = alta_sesion(&fecha_in(0)).execute(&mut repos);

    assert!(result.is_err());
}

#[test]
fn test_alta_cita_uses_stored_entities() {
    let fecha: String = fecha_in(10);
    let mut repos: Repositories = scheduled(&fecha);

    run(&mut repos, &alta_cita("luis@alumnos.es", &fecha, "17:30"));

    let cita = &repos.citas.listar()[0];
    assert_eq!(cita.alumno().nombre(), "Luis Martín");
    assert_eq!(cita.sesion().minutos_duracion(), 30);
}

#[test]
fn test_alta_cita_off_slot_is_rejected() {
    let fecha: String = fecha_in(10);
    let mut repos: Repositories = scheduled(&fecha);

    let result = alta_cita("luis@alumnos.es", &fecha, "16:15").execute(&mut repos);

    assert!(result.is_err());
    assert_eq!(repos.citas.tamano(), 0);
}

#[test]
fn test_alta_cita_requires_existing_student_and_session() {
    let fecha: String = fecha_in(10);
    let mut repos: Repositories = scheduled(&fecha);

    assert!(
        alta_cita("nadie@alumnos.es", &fecha, "16:00")
            .execute(&mut repos)
            .is_err()
    );
    assert!(
        alta_cita("luis@alumnos.es", &fecha_in(11), "16:00")
            .execute(&mut repos)
            .is_err()
    );
}

#[test]
fn test_listar_prints_sorted_entities() {
    let mut repos: Repositories = empty_repositories();
    run(&mut repos, &alta_alumno("zoe@alumnos.es"));
    run(&mut repos, &alta_alumno("ana@alumnos.es"));

    let lines: Vec<String> = run(
        &mut repos,
        &Command::Listar {
            coleccion: Coleccion::Alumnos,
        },
    );

    assert_eq!(
        lines,
        vec![
            "nombre=Luis Martín, correo=ana@alumnos.es",
            "nombre=Luis Martín, correo=zoe@alumnos.es",
        ]
    );
}

#[test]
fn test_baja_alumno_removes_student() {
    let mut repos: Repositories = empty_repositories();
    run(&mut repos, &alta_alumno("luis@alumnos.es"));

    run(
        &mut repos,
        &Command::BajaAlumno {
            correo: String::from("luis@alumnos.es"),
        },
    );

    assert_eq!(repos.alumnos.tamano(), 0);
}

#[test]
fn test_baja_alumno_with_appointments_is_refused() {
    let fecha: String = fecha_in(10);
    let mut repos: Repositories = scheduled(&fecha);
    run(&mut repos, &alta_cita("luis@alumnos.es", &fecha, "16:00"));

    let result = Command::BajaAlumno {
        correo: String::from("luis@alumnos.es"),
    }
    .execute(&mut repos);

    assert!(result.is_err());
    assert_eq!(repos.alumnos.tamano(), 1);
}

#[test]
fn test_only_alta_and_baja_are_mutating() {
    assert!(!Command::Resumen.is_mutating());
    assert!(
        !Command::Listar {
            coleccion: Coleccion::Citas
        }
        .is_mutating()
    );
    assert!(alta_tutoria().is_mutating());
    assert!(
        Command::BajaAlumno {
            correo: String::from("luis@alumnos.es")
        }
        .is_mutating()
    );
}
