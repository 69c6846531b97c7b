//! Repetition suppression.
//!
//! Two distinct policies, applied in order:
//!
//! - **Phrase level**: counts every word window of length
//!   `min_phrase_words..=max_window_words` over the whole text, then walks the
//!   words left to right, skipping a `min_phrase_words` block whenever the
//!   window at the cursor occurs more than `max_repeats_phrase` times. The
//!   walk is greedy and order-sensitive: only contiguous repeats that land on
//!   a step boundary are removed, and the skip size is fixed regardless of
//!   which window length actually matched. Downstream corpora were built
//!   against this exact behavior, so it stays.
//! - **Sentence level**: a sentence occurring more than `max_repeats_sentence`
//!   times is dropped from every position, first occurrence included.
use std::collections::HashMap;

use itertools::Itertools;

use crate::pipelines::corpus::types::Record;

use super::Transform;

/// Sentence-terminal punctuation.
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

pub struct RepetitionFilter {
    min_phrase_words: usize,
    max_window_words: usize,
    max_repeats_phrase: usize,
    max_repeats_sentence: usize,
}

impl RepetitionFilter {
    pub fn new(
        min_phrase_words: usize,
        max_window_words: usize,
        max_repeats_phrase: usize,
        max_repeats_sentence: usize,
    ) -> Self {
        Self {
            min_phrase_words,
            max_window_words,
            max_repeats_phrase,
            max_repeats_sentence,
        }
    }

    /// Counts every contiguous word window of an allowed length.
    fn count_windows(&self, words: &[&str]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();

        if words.len() < self.min_phrase_words {
            return counts;
        }

        for start in 0..=(words.len() - self.min_phrase_words) {
            let longest = self.max_window_words.min(words.len() - start);
            for length in self.min_phrase_words..=longest {
                let phrase = words[start..start + length].join(" ");
                *counts.entry(phrase).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Drops over-repeated phrase windows from `text`.
    ///
    /// A window shorter than `min_phrase_words` (cursor near the end of the
    /// text) was never counted, so it is kept.
    pub fn suppress_phrases(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let counts = self.count_windows(&words);

        let mut kept: Vec<&str> = Vec::with_capacity(words.len());
        let mut cursor = 0;
        while cursor < words.len() {
            let end = (cursor + self.min_phrase_words).min(words.len());
            let phrase = words[cursor..end].join(" ");

            if counts.get(&phrase).copied().unwrap_or(0) <= self.max_repeats_phrase {
                kept.push(words[cursor]);
                cursor += 1;
            } else {
                cursor += self.min_phrase_words;
            }
        }

        kept.join(" ")
    }

    /// Drops every occurrence of sentences repeated more than
    /// `max_repeats_sentence` times.
    ///
    /// Text without a sentence delimiter is returned unchanged.
    pub fn suppress_sentences(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.len() <= 1 {
            return text.to_string();
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sentence in &sentences {
            *counts.entry(sentence.as_str()).or_insert(0) += 1;
        }

        sentences
            .iter()
            .filter(|sentence| counts[sentence.as_str()] <= self.max_repeats_sentence)
            .join(" ")
    }
}

impl Transform for RepetitionFilter {
    fn transform_own(&self, mut record: Record) -> Record {
        let cleaned = self.suppress_phrases(&record.content());
        let cleaned = self.suppress_sentences(&cleaned);
        record.set_content(cleaned);
        record
    }
}

impl Default for RepetitionFilter {
    /// 5-word phrases, windows up to 9 words, at most 3 repeats for both
    /// phrases and sentences.
    fn default() -> Self {
        Self {
            min_phrase_words: 5,
            max_window_words: 9,
            max_repeats_phrase: 3,
            max_repeats_sentence: 3,
        }
    }
}

/// Splits on sentence-terminal punctuation, keeping each delimiter attached
/// to its preceding segment. A trailing segment without a delimiter is kept.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if SENTENCE_DELIMITERS.contains(&c) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::{split_sentences, RepetitionFilter};

    /// `count` words named w1, w2, ... joined by spaces.
    fn numbered_words(count: usize) -> String {
        (1..=count).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("ഒന്ന്. രണ്ട്! മൂന്ന്? നാല്");
        assert_eq!(sentences, vec!["ഒന്ന്.", "രണ്ട്!", "മൂന്ന്?", "നാല്"]);
    }

    #[test]
    fn test_phrases_at_threshold_kept() {
        // w1..w5 occurs three times: at the start, at word 10 and at word 15.
        let mut words: Vec<String> = Vec::new();
        words.extend((1..=10).map(|i| format!("w{}", i)));
        words.extend((1..=5).map(|i| format!("w{}", i)));
        words.extend((1..=5).map(|i| format!("w{}", i)));
        let text = words.join(" ");

        let filter = RepetitionFilter::default();
        assert_eq!(filter.suppress_phrases(&text), text);
    }

    #[test]
    fn test_phrases_over_threshold_skipped() {
        // Same as above plus a fourth occurrence: every step landing on the
        // phrase now skips a 5-word block, leaving only w6..w10.
        let mut words: Vec<String> = Vec::new();
        words.extend((1..=10).map(|i| format!("w{}", i)));
        for _ in 0..3 {
            words.extend((1..=5).map(|i| format!("w{}", i)));
        }
        let text = words.join(" ");

        let filter = RepetitionFilter::default();
        assert_eq!(filter.suppress_phrases(&text), "w6 w7 w8 w9 w10");
    }

    #[test]
    fn test_short_text_unchanged() {
        let filter = RepetitionFilter::default();
        let text = numbered_words(4);
        assert_eq!(filter.suppress_phrases(&text), text);
    }

    #[test]
    fn test_sentence_policy_drops_all_occurrences() {
        let filter = RepetitionFilter::default();
        assert_eq!(filter.suppress_sentences("A. B. A. A. A."), "B.");
    }

    #[test]
    fn test_sentences_at_threshold_kept() {
        let filter = RepetitionFilter::default();
        let text = "A. B. A. A.";
        assert_eq!(filter.suppress_sentences(text), text);
    }

    #[test]
    fn test_no_delimiter_returned_unchanged() {
        let filter = RepetitionFilter::default();
        let text = "വാക്യം അവസാനിക്കാത്ത ഒരു പാഠം";
        assert_eq!(filter.suppress_sentences(text), text);
    }

    #[test]
    fn test_phrase_walk_is_not_exhaustive() {
        // The greedy walk skips fixed blocks from the left; a tail shorter
        // than min_phrase_words was never counted and survives even when it
        // is part of the repeated run. This is the contract.
        let filter = RepetitionFilter::new(3, 3, 2, 3);
        assert_eq!(filter.suppress_phrases("a a a a a a a a"), "a a");
    }
}
