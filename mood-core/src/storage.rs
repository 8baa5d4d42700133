//! The durable slot holding the serialized entry collection.
//!
//! A slot is a single named value: reads return the last successful write
//! verbatim (or `None` if nothing was ever written), writes replace the whole
//! value or leave it untouched.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stored entries are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("could not serialize entries: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait Slot {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, contents: &str) -> Result<(), StoreError>;
}

/// A slot backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Writes to a sibling temp file and renames it over the slot, so readers
    /// see either the old contents or the new ones.
    fn write(&self, contents: &str) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

/// An in-memory slot. Reads and writes can be made to fail with
/// [`MemorySlot::fail_reads`] and [`MemorySlot::fail_writes`].
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: RefCell<Option<String>>,
    failing_reads: Cell<bool>,
    failing_writes: Cell<bool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, failing: bool) {
        self.failing_reads.set(failing);
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing_writes.set(failing);
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        if self.failing_reads.get() {
            return Err(StoreError::Unavailable("read failed".to_string()));
        }
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        if self.failing_writes.get() {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

impl<S: Slot + ?Sized> Slot for &S {
    fn read(&self) -> Result<Option<String>, StoreError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        (**self).write(contents)
    }
}
