// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Args;
use crate::commands::{Coleccion, Command};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tutorias_persistence::StorageKind;

#[test]
fn test_global_flags_parse() {
    let args: Args = Args::try_parse_from([
        "tutorias",
        "--storage",
        "memoria",
        "--data-dir",
        "/tmp/tutorias",
        "listar",
        "sesiones",
    ])
    .unwrap();

    assert_eq!(args.storage, Some(StorageKind::Volatile));
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/tutorias")));
    assert!(matches!(
        args.command,
        Command::Listar {
            coleccion: Coleccion::Sesiones
        }
    ));
}

#[test]
fn test_storage_flags_are_optional() {
    let args: Args = Args::try_parse_from(["tutorias", "resumen"]).unwrap();

    assert_eq!(args.storage, None);
    assert_eq!(args.data_dir, None);
    assert_eq!(args.log_level(), LevelFilter::INFO);
}

#[test]
fn test_unknown_storage_kind_is_rejected() {
    assert!(Args::try_parse_from(["tutorias", "--storage", "cloud", "resumen"]).is_err());
}

#[test]
fn test_verbosity_flags_adjust_level() {
    let verbose: Args = Args::try_parse_from(["tutorias", "-v", "resumen"]).unwrap();
    let quiet: Args = Args::try_parse_from(["tutorias", "-q", "resumen"]).unwrap();

    assert_eq!(verbose.log_level(), LevelFilter::DEBUG);
    assert_eq!(quiet.log_level(), LevelFilter::WARN);
}

#[test]
fn test_alta_sesion_arguments_parse() {
    let args: Args = Args::try_parse_from([
        "tutorias",
        "alta-sesion",
        "--dni",
        "12345678Z",
        "--tutoria",
        "Física",
        "--fecha",
        "05/03/2030",
        "--inicio",
        "16:00",
        "--fin",
        "18:00",
        "--minutos",
        "15",
    ])
    .unwrap();

    assert!(matches!(args.command, Command::AltaSesion { minutos: 15, .. }));
}
