//! Keep-set normalization.
//!
//! Restricts content to the configured script range plus basic punctuation,
//! and collapses whitespace runs to single spaces.
//!
//! Character filtering runs before whitespace collapsing: removing a
//! character between two spaces must not leave a double space behind, since
//! normalization has to be idempotent.
use itertools::Itertools;

use crate::config::{ScriptRange, KEEP_PUNCTUATION};
use crate::pipelines::corpus::types::Record;

use super::Transform;

/// Keep-set + whitespace normalizer.
///
/// An output empty string is a valid result (content with nothing from the
/// keep set); callers drop such records instead of erroring.
pub struct Normalizer {
    keep: ScriptRange,
}

impl Normalizer {
    pub fn new(keep: ScriptRange) -> Self {
        Self { keep }
    }

    /// Get a reference to the normalizer's keep range.
    pub fn keep(&self) -> &ScriptRange {
        &self.keep
    }

    /// Normalizes `raw`: keep-set filtering, then whitespace collapse + trim.
    pub fn normalize(&self, raw: &str) -> String {
        let kept: String = raw
            .chars()
            .filter(|c| c.is_whitespace() || self.keep.contains(*c) || KEEP_PUNCTUATION.contains(c))
            .collect();

        kept.split_whitespace().join(" ")
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, mut record: Record) -> Record {
        let cleaned = self.normalize(&record.content());
        record.set_content(cleaned);
        record
    }
}

impl Default for Normalizer {
    /// Keeps the Malayalam block (U+0D00–U+0D7F).
    fn default() -> Self {
        Self {
            keep: ScriptRange::default(),
        }
    }
}
