//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] to store the collection in another format.

use crate::error::{Error, Result};
use crate::record::{Collection, Record};

/// Converts a collection to/from the bytes of the backing document.
pub trait Serializer: Send + Sync {
    /// Encode the full collection.
    fn serialize(&self, records: &[Record]) -> Result<Vec<u8>>;

    /// Decode a document back into a collection. Anything that does not
    /// decode in full is an [`Error::Corrupt`].
    fn deserialize(&self, bytes: &[u8]) -> Result<Collection>;
}

/// JSON serializer, pretty-printed by default.
#[derive(Debug, Clone)]
pub struct JsonSerializer {
    pretty: bool,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::pretty()
    }
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Two-space indented JSON, easy to inspect and diff by hand.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, records: &[Record]) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        };
        bytes.map_err(|e| Error::Serialize(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Collection> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}
