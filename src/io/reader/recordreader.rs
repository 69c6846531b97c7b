/*! Record reader with format sniffing.
 * !*/
use std::fs;
use std::path::Path;
use std::vec;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::pipelines::corpus::types::Record;

/// Reads the records of a single source document.
///
/// The format is sniffed from content, not from the file name: a document is
/// either one JSON object, a JSON array of objects, or line-delimited JSON.
/// In the line-delimited case every line parses independently, so one bad
/// line does not discard the rest of the document.
pub struct RecordReader {
    records: vec::IntoIter<Result<Record, Error>>,
}

impl RecordReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(src)?;
        Ok(Self::from_document(&raw))
    }

    pub fn from_document(raw: &str) -> Self {
        let records = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => vec![Ok(Record::new(fields))],
            Ok(Value::Array(items)) => items.into_iter().map(Self::item_to_record).collect(),
            Ok(other) => vec![Err(Error::Custom(format!(
                "expected a JSON object or array, got {}",
                json_kind(&other)
            )))],
            // not a single JSON document: treat as line-delimited
            Err(_) => raw
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    serde_json::from_str::<Map<String, Value>>(line)
                        .map(Record::new)
                        .map_err(Error::Serde)
                })
                .collect(),
        };

        Self {
            records: records.into_iter(),
        }
    }

    fn item_to_record(item: Value) -> Result<Record, Error> {
        match item {
            Value::Object(fields) => Ok(Record::new(fields)),
            other => Err(Error::Custom(format!(
                "array item is not an object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
