//! Pipeline configuration.
//!
//! Every knob has a default and can be overridden independently (see
//! [crate::cli]). Validation is fail-fast: [PipelineConfig::validate] runs at
//! pipeline construction, before any record is read, and reports every
//! problem at once rather than stopping at the first.
use std::ops::RangeInclusive;
use std::str::FromStr;

use unicode_script::Script;

use crate::error::Error;

/// Punctuation retained by normalization, besides the script range and spaces.
pub const KEEP_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// An inclusive codepoint range identifying the target script.
///
/// Default is the Malayalam block, U+0D00–U+0D7F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRange {
    start: char,
    end: char,
}

impl ScriptRange {
    pub fn new(start: char, end: char) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidConfig(format!(
                "script range start U+{:04X} is after end U+{:04X}",
                start as u32, end as u32
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }

    pub fn as_range(&self) -> RangeInclusive<char> {
        self.start..=self.end
    }
}

impl Default for ScriptRange {
    /// The Malayalam Unicode block.
    fn default() -> Self {
        Self {
            start: '\u{0D00}',
            end: '\u{0D7F}',
        }
    }
}

/// Parses `U+0D00-U+0D7F` (the `U+` prefixes are optional).
impl FromStr for ScriptRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_codepoint = |part: &str| -> Result<char, Error> {
            let digits = part
                .trim()
                .trim_start_matches("U+")
                .trim_start_matches("u+");
            u32::from_str_radix(digits, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    Error::InvalidConfig(format!("invalid codepoint in script range: {:?}", part))
                })
        };

        match s.split_once('-') {
            Some((start, end)) => Self::new(parse_codepoint(start)?, parse_codepoint(end)?),
            None => Err(Error::InvalidConfig(format!(
                "script range must look like U+0D00-U+0D7F, got {:?}",
                s
            ))),
        }
    }
}

/// Full configuration surface of the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Codepoint range kept by the normalizer.
    pub keep_script_range: ScriptRange,
    /// Unicode script a record must contain to enter the pipeline.
    pub target_script: Script,
    /// Minimum phrase length (in words) for repetition counting.
    pub min_phrase_words: usize,
    /// Maximum phrase window length (in words) for repetition counting.
    pub max_window_words: usize,
    /// Occurrence bound over which phrase windows get skipped.
    pub max_repeats_phrase: usize,
    /// Occurrence bound over which a sentence is dropped entirely.
    pub max_repeats_sentence: usize,
    /// Similarity ratio at or over which a sentence counts as a near-duplicate.
    pub similarity_threshold: f64,
    /// Maximum words per chunk.
    pub max_chunk_words: usize,
    /// Words shared by consecutive chunks of the same record.
    pub overlap_words: usize,
    /// Minimum words for a window to be emitted as a chunk.
    pub min_chunk_words: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keep_script_range: ScriptRange::default(),
            target_script: Script::Malayalam,
            min_phrase_words: 5,
            max_window_words: 9,
            max_repeats_phrase: 3,
            max_repeats_sentence: 3,
            similarity_threshold: 0.8,
            max_chunk_words: 512,
            overlap_words: 50,
            min_chunk_words: 100,
        }
    }
}

impl PipelineConfig {
    /// Checks the whole configuration, reporting every violation at once.
    ///
    /// Chunking constraints are the load-bearing ones: a window step of
    /// `max_chunk_words - overlap_words` that is not strictly positive would
    /// stall the chunker, so it is rejected here instead.
    pub fn validate(&self) -> Result<(), Error> {
        let mut problems = Vec::new();

        if self.min_phrase_words == 0 {
            problems.push("min_phrase_words must be positive".to_string());
        }
        if self.max_window_words < self.min_phrase_words {
            problems.push(format!(
                "max_window_words ({}) must be >= min_phrase_words ({})",
                self.max_window_words, self.min_phrase_words
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            problems.push(format!(
                "similarity_threshold ({}) must be within [0, 1]",
                self.similarity_threshold
            ));
        }
        if self.overlap_words == 0 {
            problems.push("overlap_words must be positive".to_string());
        }
        if self.max_chunk_words <= self.overlap_words {
            problems.push(format!(
                "max_chunk_words ({}) must be > overlap_words ({})",
                self.max_chunk_words, self.overlap_words
            ));
        }
        if self.min_chunk_words == 0 {
            problems.push("min_chunk_words must be positive".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PipelineConfig, ScriptRange};

    #[test]
    fn test_default_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overlap_not_below_max() {
        let mut config = PipelineConfig::default();
        config.max_chunk_words = 50;
        config.overlap_words = 50;
        assert!(config.validate().is_err());

        config.overlap_words = 51;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_overlap_rejected() {
        let mut config = PipelineConfig::default();
        config.overlap_words = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_smaller_than_phrase_rejected() {
        let mut config = PipelineConfig::default();
        config.max_window_words = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_all_problems_reported() {
        let mut config = PipelineConfig::default();
        config.overlap_words = 0;
        config.similarity_threshold = 1.5;

        let message = format!("{}", config.validate().unwrap_err());
        assert!(message.contains("overlap_words"));
        assert!(message.contains("similarity_threshold"));
    }

    #[test]
    fn test_script_range_parse() {
        let range: ScriptRange = "U+0D00-U+0D7F".parse().unwrap();
        assert_eq!(range, ScriptRange::default());

        let range: ScriptRange = "0900-097F".parse().unwrap();
        assert!(range.contains('ह'));
        assert!(!range.contains('z'));
    }

    #[test]
    fn test_script_range_parse_invalid() {
        assert!("U+0D00".parse::<ScriptRange>().is_err());
        assert!("U+0D7F-U+0D00".parse::<ScriptRange>().is_err());
        assert!("U+XYZ-U+0D00".parse::<ScriptRange>().is_err());
    }

    #[test]
    fn test_range_contains() {
        let range = ScriptRange::default();
        assert!(range.contains('മ'));
        assert!(!range.contains('a'));
        assert!(!range.contains('.'));
    }
}
