// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Duration, Time};
use tutorias_domain::{Alumno, Cita, Profesor, Sesion, Tutoria, today};

/// Atomic counter for generating unique test directory names.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A scratch directory removed when dropped.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    /// Returns a fresh, not yet created directory under the system temp dir.
    pub fn new() -> Self {
        let dir_id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path: PathBuf = std::env::temp_dir().join(format!(
            "tutorias_test_{}_{dir_id}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Writes `lines` to `name` inside the directory, one per line.
    pub fn write_lines(&self, name: &str, lines: &[&str]) -> PathBuf {
        std::fs::create_dir_all(&self.path).unwrap();
        let path: PathBuf = self.file(name);
        let mut contents: String = lines.join("\n");
        contents.push('\n');
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn create_test_alumno(correo: &str) -> Alumno {
    Alumno::new("Luis Martín", correo).unwrap()
}

pub fn create_test_profesor() -> Profesor {
    Profesor::new("Ana García López", "12345678Z", "ana.garcia@iesalandalus.org").unwrap()
}

pub fn create_test_tutoria(nombre: &str) -> Tutoria {
    Tutoria::new(create_test_profesor(), nombre).unwrap()
}

pub fn days_from_now(days: i64) -> Date {
    today().checked_add(Duration::days(days)).unwrap()
}

pub fn create_test_sesion(nombre: &str, days: i64) -> Sesion {
    Sesion::ficticia(create_test_tutoria(nombre), days_from_now(days)).unwrap()
}

pub fn create_test_cita(correo: &str, sesion: &Sesion, hora: Time) -> Cita {
    Cita::new(create_test_alumno(correo), sesion.clone(), hora).unwrap()
}
