//! Sliding-window chunker.
use crate::error::Error;

use super::{Chunk, ChunkMetadata};

/// Splits text into overlapping windows of at most `max_words` words.
///
/// Text is tokenized by whitespace only; no script-aware segmentation. The
/// window advances `max_words - overlap_words` words per step, so consecutive
/// chunks share exactly `overlap_words` words. A final window shorter than
/// `min_chunk_words` is dropped silently: the trailing remainder of a record
/// is lost. Downstream corpora were built against this lossy behavior, so it
/// stays (callers can observe the loss through
/// [Chunker::dropped_tail]).
pub struct Chunker {
    max_words: usize,
    overlap_words: usize,
    min_chunk_words: usize,
}

impl Chunker {
    /// Builds a chunker, rejecting configurations where the window step
    /// `max_words - overlap_words` would not be strictly positive.
    pub fn new(max_words: usize, overlap_words: usize, min_chunk_words: usize) -> Result<Self, Error> {
        if overlap_words == 0 {
            return Err(Error::InvalidConfig(
                "overlap_words must be positive".to_string(),
            ));
        }
        if max_words <= overlap_words {
            return Err(Error::InvalidConfig(format!(
                "max_words ({}) must be > overlap_words ({})",
                max_words, overlap_words
            )));
        }

        Ok(Self {
            max_words,
            overlap_words,
            min_chunk_words,
        })
    }

    /// Window advance per step. Strictly positive by construction.
    fn step(&self) -> usize {
        self.max_words - self.overlap_words
    }

    /// Chunks `text`, attaching `source_record_ref` to each chunk's metadata.
    ///
    /// Text of at most `max_words` words comes back as a single, unmodified
    /// chunk.
    pub fn chunk(&self, text: &str, source_record_ref: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();

        if words.len() <= self.max_words {
            return vec![Chunk {
                text: text.to_string(),
                metadata: ChunkMetadata {
                    source_record_ref: source_record_ref.to_string(),
                    chunk_index: 0,
                    start_word_offset: 0,
                    end_word_offset: words.len(),
                    total_chunks: 1,
                },
            }];
        }

        let mut windows: Vec<(usize, usize)> = Vec::new();
        let mut start = 0;
        while start < words.len() {
            let end = (start + self.max_words).min(words.len());
            if end - start >= self.min_chunk_words {
                windows.push((start, end));
            }
            start += self.step();
        }

        let total_chunks = windows.len();
        windows
            .into_iter()
            .enumerate()
            .map(|(chunk_index, (start, end))| Chunk {
                text: words[start..end].join(" "),
                metadata: ChunkMetadata {
                    source_record_ref: source_record_ref.to_string(),
                    chunk_index,
                    start_word_offset: start,
                    end_word_offset: end,
                    total_chunks,
                },
            })
            .collect()
    }

    /// Whether chunking `word_count` words drops a trailing remainder.
    ///
    /// True when the final window is shorter than `min_chunk_words`.
    pub fn dropped_tail(&self, word_count: usize) -> bool {
        if word_count <= self.max_words {
            return false;
        }

        let mut start = 0;
        while start < word_count {
            let end = (start + self.max_words).min(word_count);
            if end - start < self.min_chunk_words {
                return true;
            }
            start += self.step();
        }
        false
    }
}
