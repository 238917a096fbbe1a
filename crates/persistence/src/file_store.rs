// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat-file record store.
//!
//! A store file holds one JSON frame per line: a `Record` frame per entity in
//! collection order, followed by a single `End` frame. A file without the end
//! marker was cut short by an interrupted write and is read as far as it goes.

use crate::data_models::{Frame, StoredRecord};
use crate::error::PersistenceError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tutorias::{LoadedRecords, RecordStore, StoreError};

/// A record store backed by a single file.
#[derive(Debug)]
pub struct FileStore<T> {
    name: String,
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: StoredRecord> FileStore<T> {
    /// Creates a store for `path`. The file is not touched until used.
    #[must_use]
    pub fn new<P: AsRef<Path>>(name: &str, path: P) -> Self {
        Self {
            name: name.to_string(),
            path: path.as_ref().to_path_buf(),
            _entity: PhantomData,
        }
    }

    /// Returns the path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<LoadedRecords<T>, PersistenceError> {
        let file: File = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PersistenceError::StoreNotFound(
                    self.path.display().to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        let mut loaded: LoadedRecords<T> = LoadedRecords::new();
        let mut complete: bool = false;

        for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line: Vec<u8> = line?;
            let numero: usize = index + 1;

            if complete {
                loaded
                    .skipped
                    .push(format!("line {numero}: content after end marker"));
                continue;
            }
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match decode_line::<T>(&line) {
                Ok(Some(record)) => loaded.records.push(record),
                Ok(None) => complete = true,
                Err(err) => loaded.skipped.push(format!("line {numero}: {err}")),
            }
        }

        if !complete {
            warn!(
                store = %self.name,
                path = %self.path.display(),
                read = loaded.records.len(),
                "Store has no end marker, it was probably truncated"
            );
        }

        Ok(loaded)
    }

    fn write_all(&self, records: &[T]) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let temp_path: PathBuf = self.temp_path();
        if let Err(err) = write_frames(&temp_path, records)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(PersistenceError::from))
        {
            // The previous store file is still intact.
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
        debug!(
            store = %self.name,
            path = %self.path.display(),
            written = records.len(),
            "Replaced store file"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

/// Writes every record and the end marker to `path`, then syncs it.
fn write_frames<T: StoredRecord>(path: &Path, records: &[T]) -> Result<(), PersistenceError> {
    let mut writer: BufWriter<File> = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, &Frame::Record(record.to_record()))?;
        writer.write_all(b"\n")?;
    }
    serde_json::to_writer(&mut writer, &Frame::<T::Record>::End)?;
    writer.write_all(b"\n")?;

    let file: File = writer
        .into_inner()
        .map_err(|e| PersistenceError::Io(e.error().to_string()))?;
    file.sync_all()?;
    Ok(())
}

/// Decodes one line. `Ok(None)` is the end marker.
///
/// Bytes that are not UTF-8 fail here like any other malformed line.
fn decode_line<T: StoredRecord>(line: &[u8]) -> Result<Option<T>, PersistenceError> {
    match serde_json::from_slice::<Frame<T::Record>>(line)? {
        Frame::Record(record) => T::from_record(record).map(Some),
        Frame::End => Ok(None),
    }
}

impl<T: StoredRecord> RecordStore<T> for FileStore<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<LoadedRecords<T>, StoreError> {
        Ok(self.read_all()?)
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        Ok(self.write_all(records)?)
    }
}
