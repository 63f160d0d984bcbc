//! Disk I/O: load the collection document and replace it atomically.
//!
//! Writes go to a fresh temp file in the same directory, are fsynced, then
//! renamed over `path`; on Unix the directory is fsynced too so the rename
//! itself survives a crash. On POSIX filesystems a reader sees either the
//! old document or the new one, never a torn write. FAT32 and network
//! shares give no such guarantee.

use crate::error::{Error, Result};
use crate::record::{Collection, Record};
use crate::serializer::{JsonSerializer, Serializer};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Durable home of the collection: one serialized document at one path.
#[derive(Debug, Clone)]
pub struct RecordFile<S = JsonSerializer> {
    path: PathBuf,
    serializer: S,
}

impl<S: Serializer> RecordFile<S> {
    /// Bind to `path`. Nothing is touched on disk until the first save.
    pub fn new(path: impl Into<PathBuf>, serializer: S) -> Self {
        Self {
            path: path.into(),
            serializer,
        }
    }

    /// Path to the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document without any recovery.
    ///
    /// A missing or empty file is an empty collection. Undecodable content
    /// is [`Error::Corrupt`]; any other read failure is [`Error::Io`].
    pub fn read(&self) -> Result<Collection> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        self.serializer.deserialize(&bytes)
    }

    /// Like [`read`](Self::read), but a corrupt document is logged and
    /// treated as an empty collection. Only genuine I/O failures surface.
    pub fn load(&self) -> Result<Collection> {
        match self.read() {
            Err(Error::Corrupt(reason)) => {
                warn!(path = %self.path.display(), %reason, "corrupt record file, treating as empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Serialize `records` and atomically replace the document with them.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let bytes = self.serializer.serialize(records)?;
        atomic_write(&self.path, &bytes)
    }
}

/// Write `bytes` to a uniquely named temp file next to `path`, flush it to
/// disk, rename it over `path`, then flush the directory entry. A failure
/// before the rename leaves `path` as it was and removes the temp file.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".json-records-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    sync_dir(dir)?;
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

// Directories can't be opened for syncing here; the rename is as durable as
// the platform makes it.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
