use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use wordfreq_logging::wf_debug;

use crate::OutputError;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Must be writable.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file that is renamed into place.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Run `write` against a buffered temp file, then replace the target with it.
    ///
    /// If `write` fails the temp file is discarded and the target is left alone.
    pub fn write_with<F>(&self, filename: &str, write: F) -> Result<PathBuf, PersistError>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), OutputError>,
    {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut sink = BufWriter::new(tmp.as_file_mut());
            write(&mut sink)?;
            sink.flush()?;
        }
        tmp.as_file_mut().sync_all()?;

        // Rename over any existing target; it never disappears in between.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        wf_debug!("Wrote {:?}", target);
        Ok(target)
    }
}

/// Atomically write the file at `path`, creating its directory if needed.
pub fn write_file_atomically<F>(path: &Path, write: F) -> Result<PathBuf, PersistError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), OutputError>,
{
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PersistError::OutputDir(format!("{path:?} has no usable file name")))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    AtomicFileWriter::new(dir).write_with(filename, write)
}
