use serde::{Deserialize, Serialize};

/// Positional metadata of a chunk.
///
/// Offsets are word offsets into the source record's cleaned content;
/// `end_word_offset` is exclusive. `total_chunks` counts the chunks actually
/// emitted for the source record, not the window positions visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub source_record_ref: String,
    pub chunk_index: usize,
    pub start_word_offset: usize,
    pub end_word_offset: usize,
    pub total_chunks: usize,
}

/// A bounded sub-span of a record's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub text: String,
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Number of words covered by this chunk.
    pub fn word_count(&self) -> usize {
        self.metadata.end_word_offset - self.metadata.start_word_offset
    }
}
