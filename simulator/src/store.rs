//! File-backed settings store.
//!
//! The simulator keeps the settings record in a single file. A missing file
//! reads as "nothing stored yet"; any other I/O error is passed to the caller.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use watchface_common::settings::{SettingsRecord, SettingsStore};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl SettingsStore for FileStore {
    type Error = io::Error;

    fn load(
        &mut self,
        buf: &mut [u8],
    ) -> Result<Option<usize>, Self::Error> {
        let mut file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut len = 0;
        while len < buf.len() {
            match file.read(&mut buf[len..])? {
                0 => break,
                n => len += n,
            }
        }
        Ok(Some(len))
    }

    fn save(
        &mut self,
        record: &SettingsRecord,
    ) -> Result<(), Self::Error> {
        // Write to a sibling file first so a crash never leaves half a record.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, record)?;
        fs::rename(&tmp, &self.path)
    }
}
