/*! Corpus cleaning pipeline.

Walks a directory of JSON/JSONL documents, cleans each record, expands long
records into overlapping chunks and writes a deduplicated line-delimited
corpus.

!*/
mod pipeline;
pub mod types;

pub use pipeline::{CorpusClean, RunSummary};
