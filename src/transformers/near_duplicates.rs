//! Near-duplicate sentence elimination.
//!
//! Order-dependent, first-seen wins: each candidate sentence is compared
//! against every sentence accepted so far and discarded when any similarity
//! ratio reaches the threshold — regardless of which variant is "better".
//!
//! Cost is O(n²·m) in sentence count times average sentence length. That is
//! acceptable for per-record sentence counts; it is a scaling limit for very
//! large single documents, not a correctness bug.
use itertools::Itertools;

use crate::pipelines::corpus::types::Record;
use crate::similarity;

use super::Transform;

/// sentence-terminal characters dropped during extraction
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

pub struct DuplicateDetector {
    threshold: f64,
}

impl DuplicateDetector {
    /// Use a custom similarity threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Get the detector's similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Splits text into sentences, dropping the delimiters and empty
    /// segments.
    pub fn extract_sentences(text: &str) -> Vec<String> {
        text.split(&SENTENCE_DELIMITERS[..])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Removes near-duplicate sentences, keeping first occurrences.
    pub fn dedupe_sentences(&self, sentences: &[String]) -> Vec<String> {
        let mut unique: Vec<String> = Vec::new();

        for candidate in sentences {
            let duplicate = unique
                .iter()
                .any(|kept| similarity::ratio(candidate, kept) >= self.threshold);

            if !duplicate {
                unique.push(candidate.clone());
            }
        }

        unique
    }
}

impl Transform for DuplicateDetector {
    /// Extracts sentences, removes near-duplicates and rejoins the survivors
    /// with single spaces (terminal punctuation is not restored).
    fn transform_own(&self, mut record: Record) -> Record {
        let sentences = Self::extract_sentences(&record.content());
        let cleaned = self.dedupe_sentences(&sentences).iter().join(" ");
        record.set_content(cleaned);
        record
    }
}

impl Default for DuplicateDetector {
    /// Default similarity threshold is 0.8.
    fn default() -> Self {
        Self { threshold: 0.8 }
    }
}
