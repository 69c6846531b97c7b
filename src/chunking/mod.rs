/*! Overlap-aware chunking.

Long records are split into word-bounded, overlapping chunks so that no
output record exceeds a configured word count. Each chunk carries positional
metadata tying it back to its source record.

!*/
mod chunk;
mod chunker;

pub use chunk::{Chunk, ChunkMetadata};
pub use chunker::Chunker;
