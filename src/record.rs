//! The stored entity.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered sequence of records; the unit of persistence.
pub type Collection = Vec<Record>;

/// One stored user.
///
/// Only `id` and `name` are typed. Everything else, `age` included, rides
/// along in `extra` and is written back out verbatim, in submission order.
/// Admission rules for `age` apply on insert only, so documents written by
/// older or laxer writers still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Assigned by the store on insert, never reused.
    pub id: u64,
    /// Display name, stored as submitted (not trimmed).
    pub name: String,
    /// Remaining fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Stored `age`, when it is a non-negative integer.
    #[must_use]
    pub fn age(&self) -> Option<u64> {
        self.extra.get("age").and_then(Value::as_u64)
    }

    /// Build a record from a candidate that already passed
    /// [`validate`](crate::validate::validate). Any client-supplied `id` is
    /// overwritten with `id`.
    pub(crate) fn from_admitted(id: u64, fields: &Map<String, Value>) -> Result<Self> {
        let mut fields = fields.clone();
        fields.insert("id".to_string(), Value::from(id));
        serde_json::from_value(Value::Object(fields)).map_err(|e| Error::Serialize(e.to_string()))
    }
}
