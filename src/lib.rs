//! # Shuddhi
//!
//! Shuddhi is a pipeline that turns directories of raw Malayalam text records
//! into a cleaned, deduplicated, length-bounded corpus suitable for
//! language-model training or indexing.
//!
//! Per record, the pipeline runs:
//! 1. a script gate (records without Malayalam content are skipped),
//! 2. normalization (keep-set character filtering + whitespace collapse),
//! 3. repetitive phrase and sentence suppression,
//! 4. near-duplicate sentence elimination,
//! 5. overlap-aware chunking of long records,
//!
//! then a batch-level exact deduplication over the whole corpus.
//!
//! This project can be used as a tool to generate corpora,
//! or as a lib to integrate cleaning into other projects.
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod reporting;
pub mod similarity;
pub mod transformers;
