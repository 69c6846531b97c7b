use std::borrow::Cow;
use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use twox_hash::XxHash64;

use crate::error::Error;

/// The distinguished text field of a record.
pub const CONTENT_FIELD: &str = "content";

/// A Record is an opaque field map with one distinguished text field.
///
/// Identity is the full field set: two records are the same record only if
/// every field matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Content of the record as text.
    ///
    /// A missing or null field is the empty string; any other non-string
    /// value is coerced to its JSON representation.
    pub fn content(&self) -> Cow<str> {
        match self.fields.get(CONTENT_FIELD) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Set the record's content.
    pub fn set_content(&mut self, content: String) {
        self.fields
            .insert(CONTENT_FIELD.to_string(), Value::String(content));
    }

    /// Get a reference to the record's fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Insert a field, replacing any previous value.
    pub fn insert(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    /// Canonical serialization of the record.
    ///
    /// serde_json object maps are keyed by a sorted map, so records with
    /// equal field sets serialize identically regardless of the order fields
    /// appeared in the source document.
    pub fn canonical(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Stable reference to this record: the XxHash64 digest of its canonical
    /// serialization, as lowercase hex.
    pub fn record_ref(&self) -> Result<String, Error> {
        let canonical = self.canonical()?;
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(canonical.as_bytes());

        Ok(format!("{:016x}", hasher.finish()))
    }
}
