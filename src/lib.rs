//! Small record store persisted as one JSON document, with an HTTP front.
//!
//! Every call reads the document fresh. Every mutation validates, allocates
//! an id and rewrites the whole document through a temp file + rename, with
//! writers serialized so concurrent creates can't collide.
//!
//! ```rust,no_run
//! use json_records::RecordStore;
//! use serde_json::json;
//!
//! let store = RecordStore::open("users.json").unwrap();
//! let ann = store.create(&json!({"name": "Ann", "age": 30})).unwrap();
//! assert_eq!(store.get(ann.id).unwrap().name, "Ann");
//! store.delete(ann.id).unwrap();
//! ```
//!
//! Missing or corrupt storage reads as an empty collection rather than an
//! error; the next write replaces it.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod allocate;
pub mod error;
pub mod http;
pub mod logging;
pub mod persist;
pub mod record;
pub mod serializer;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use record::{Collection, Record};
pub use store::{RecordStore, RecordStoreBuilder};
pub use validate::Rejection;
