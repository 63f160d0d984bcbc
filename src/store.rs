//! Record store and builder.

use crate::allocate::next_id;
use crate::error::{Error, Result};
use crate::persist::RecordFile;
use crate::record::{Collection, Record};
use crate::serializer::JsonSerializer;
use crate::validate::validate;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error};

/// Writer locks shared by every store in the process, keyed by the
/// canonical location of the record file.
static WRITERS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = Lazy::new(Default::default);

fn writer_for(key: PathBuf) -> Arc<Mutex<()>> {
    Arc::clone(WRITERS.lock().entry(key).or_default())
}

/// Absolute path of the record file with its directory resolved, so
/// `data.json`, `./data.json` and a symlinked parent map to one lock.
fn lock_key(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        Error::Config(format!("record file path {} has no file name", path.display()))
    })?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let dir = match dir.canonicalize() {
        Ok(dir) => dir,
        // directory doesn't exist (yet); fall back to a plain absolute path
        Err(_) => std::env::current_dir()?.join(dir),
    };
    Ok(dir.join(file_name))
}

/// Record store over a single JSON document.
///
/// Nothing is cached between calls: every operation reads the document
/// fresh, and every mutation rewrites it whole. Mutations are serialized by
/// a process-wide writer lock per file, held across load, allocate and save,
/// so concurrent creates never hand out the same id or clobber each other,
/// even through separate stores opened on the same path. Reads take no lock
/// and see the document either before or after any given write.
///
/// **Single-process only.** Separate processes on the same file do not
/// share the writer lock.
pub struct RecordStore {
    file: RecordFile<JsonSerializer>,
    writer: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Open a store at `path` with pretty-printed JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](RecordStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> RecordStoreBuilder {
        RecordStoreBuilder::new(path)
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    // ---- reads ----

    /// Every record, in insertion order. Missing or corrupt storage reads as
    /// an empty collection.
    pub fn list(&self) -> Result<Collection> {
        self.file.load()
    }

    /// The first record with `id`, or [`Error::NotFound`].
    pub fn get(&self, id: u64) -> Result<Record> {
        self.file
            .load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(Error::NotFound(id))
    }

    // ---- writes ----

    /// Validate `candidate`, assign it the next id and append it.
    ///
    /// Returns the stored record. Exactly one record is durably added, or
    /// none on error.
    pub fn create(&self, candidate: &Value) -> Result<Record> {
        let fields = validate(candidate)?;

        let _guard = self.writer.lock();
        let mut records = self.file.load()?;
        let id = next_id(&records).ok_or(Error::IdsExhausted)?;
        let record = Record::from_admitted(id, fields)?;
        records.push(record.clone());
        self.persist(&records)?;

        debug!(id, "record created");
        Ok(record)
    }

    /// Remove every record with `id` and return it. Storage is left
    /// untouched when nothing matches.
    pub fn delete(&self, id: u64) -> Result<u64> {
        let _guard = self.writer.lock();
        let mut records = self.file.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(Error::NotFound(id));
        }
        self.persist(&records)?;

        debug!(id, "record deleted");
        Ok(id)
    }

    // ---- internal ----

    fn persist(&self, records: &[Record]) -> Result<()> {
        self.file.save(records).map_err(|e| {
            error!(path = %self.path().display(), error = %e, "failed to save record file");
            e
        })
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("path", &self.file.path())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`RecordStore`].
///
/// ```rust,no_run
/// use json_records::RecordStore;
///
/// let store = RecordStore::builder("users.json")
///     .pretty(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct RecordStoreBuilder {
    path: PathBuf,
    pretty: bool,
}

impl RecordStoreBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Write indented JSON (default) or a single compact line.
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Check the path and return the store. The file itself is created
    /// lazily by the first mutation.
    pub fn build(self) -> Result<RecordStore> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Config("record file path is empty".into()));
        }
        if self.path.is_dir() {
            return Err(Error::Config(format!(
                "record file path {} is a directory",
                self.path.display()
            )));
        }

        let writer = writer_for(lock_key(&self.path)?);
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::compact()
        };

        Ok(RecordStore {
            file: RecordFile::new(self.path, serializer),
            writer,
        })
    }
}
