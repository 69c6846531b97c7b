use std::fmt;

use super::Record;

/// Why a record produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// content has no codepoint of the target script
    WrongScript,
    /// cleaning left nothing worth keeping
    EmptyAfterCleaning,
    /// the source record could not be parsed or serialized
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::WrongScript => write!(f, "content is not in the target script"),
            SkipReason::EmptyAfterCleaning => write!(f, "empty after cleaning"),
            SkipReason::Malformed(msg) => write!(f, "malformed record: {}", msg),
        }
    }
}

/// Per-record pipeline result.
///
/// A bad record becomes a value the batch driver consumes; it never unwinds
/// past the record that caused it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// cleaned output records, one per emitted chunk
    Kept(Vec<Record>),
    Skipped(SkipReason),
}
