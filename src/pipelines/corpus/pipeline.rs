//! Corpus cleaning pipeline.
//!
//! The source is a directory tree of JSON/JSONL documents, each carrying one
//! or more records with a `content` field.
//!
//! # Processing
//! 1. Each record passes the script gate; records without target-script
//!    content are skipped.
//! 1. Content is normalized: keep-set character filtering, whitespace
//!    collapse. Records left empty are skipped.
//! 1. Over-repeated phrases and sentences are suppressed.
//! 1. Near-duplicate sentences are removed, first occurrence winning.
//! 1. Long records are expanded into overlapping chunks, each chunk becoming
//!    an output record with positional metadata under its `chunk` field.
//! 1. The whole batch is exact-deduplicated in input order and written as
//!    line-delimited JSON.
//!
//! Records are independent, so steps 1-5 run on a rayon thread pool; input
//! order is restored before the batch dedup so its first-seen tie-break
//! stays deterministic.
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use glob::glob;
use rayon::prelude::*;

use crate::chunking::Chunker;
use crate::config::PipelineConfig;
use crate::error::Error;
use crate::filtering::{Filter, TargetScript};
use crate::io::reader::RecordReader;
use crate::io::writer::CorpusWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::dedup::dedup_records;
use crate::reporting::{Diagnostics, Level};
use crate::transformers::{DuplicateDetector, Normalizer, RepetitionFilter, Transform};

use super::types::{Outcome, Record, SkipReason};

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records_read: usize,
    pub records_written: usize,
    pub skipped_wrong_script: usize,
    pub skipped_empty: usize,
    pub skipped_malformed: usize,
    pub duplicates_removed: usize,
    /// records whose trailing window was below `min_chunk_words` and dropped
    pub dropped_tails: usize,
}

/// Stages of the per-record pipeline, built once per run and shared by
/// worker threads.
struct Stages {
    gate: TargetScript,
    normalizer: Normalizer,
    repetition: RepetitionFilter,
    detector: DuplicateDetector,
    chunker: Chunker,
}

impl Stages {
    fn from_config(config: &PipelineConfig) -> Result<Self, Error> {
        Ok(Self {
            gate: TargetScript::new(config.target_script),
            normalizer: Normalizer::new(config.keep_script_range.clone()),
            repetition: RepetitionFilter::new(
                config.min_phrase_words,
                config.max_window_words,
                config.max_repeats_phrase,
                config.max_repeats_sentence,
            ),
            detector: DuplicateDetector::new(config.similarity_threshold),
            chunker: Chunker::new(
                config.max_chunk_words,
                config.overlap_words,
                config.min_chunk_words,
            )?,
        })
    }
}

pub struct CorpusClean<'a> {
    src: PathBuf,
    dst: PathBuf,
    config: PipelineConfig,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> CorpusClean<'a> {
    /// Builds the pipeline, failing fast on invalid configuration.
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        config: PipelineConfig,
        diagnostics: &'a dyn Diagnostics,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            src,
            dst,
            config,
            diagnostics,
        })
    }

    /// Lists source documents, in sorted order so runs are deterministic.
    ///
    /// Filesystem errors on single entries are reported and skipped.
    fn input_files(&self) -> Result<Vec<PathBuf>, Error> {
        let pattern = self.src.join("**/*.json*");
        let pattern = pattern.to_str().ok_or_else(|| {
            Error::Custom(format!("source path is not valid unicode: {:?}", self.src))
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in glob(pattern)? {
            match entry {
                Ok(path) => match path.extension().and_then(|e| e.to_str()) {
                    Some("json") | Some("jsonl") => files.push(path),
                    _ => (),
                },
                Err(e) => self
                    .diagnostics
                    .record(Level::Error, &format!("error listing source files: {}", e)),
            }
        }
        files.sort();

        Ok(files)
    }

    /// Reads every record of every source document, counting records that
    /// could not be parsed.
    fn read_records(&self) -> Result<(Vec<Record>, usize), Error> {
        let mut records = Vec::new();
        let mut malformed = 0;

        for path in self.input_files()? {
            let reader = match RecordReader::from_path(&path) {
                Ok(reader) => reader,
                Err(e) => {
                    self.diagnostics
                        .record(Level::Error, &format!("could not read {:?}: {}", path, e));
                    malformed += 1;
                    continue;
                }
            };

            for record in reader {
                match record {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        self.diagnostics.record(
                            Level::Warn,
                            &format!("skipping malformed record in {:?}: {}", path, e),
                        );
                        malformed += 1;
                    }
                }
            }
        }

        Ok((records, malformed))
    }

    /// Runs the per-record stages, expanding the record into its cleaned
    /// output records.
    fn process_record(
        &self,
        record: Record,
        stages: &Stages,
        dropped_tails: &AtomicUsize,
    ) -> Outcome {
        if !stages.gate.detect(&record.content()) {
            return Outcome::Skipped(SkipReason::WrongScript);
        }

        // the chunk metadata references the record as read, before cleaning
        let source_record_ref = match record.record_ref() {
            Ok(record_ref) => record_ref,
            Err(e) => return Outcome::Skipped(SkipReason::Malformed(e.to_string())),
        };

        let record = stages.normalizer.transform_own(record);
        if record.content().is_empty() {
            return Outcome::Skipped(SkipReason::EmptyAfterCleaning);
        }

        let record = stages.repetition.transform_own(record);
        let record = stages.detector.transform_own(record);

        let cleaned = record.content().into_owned();
        if cleaned.is_empty() {
            return Outcome::Skipped(SkipReason::EmptyAfterCleaning);
        }

        if stages.chunker.dropped_tail(cleaned.split_whitespace().count()) {
            dropped_tails.fetch_add(1, Ordering::Relaxed);
            self.diagnostics.record(
                Level::Debug,
                &format!(
                    "record {}: trailing window below min_chunk_words dropped",
                    source_record_ref
                ),
            );
        }

        let chunks = stages.chunker.chunk(&cleaned, &source_record_ref);
        let mut outputs = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            // sibling chunks each get their own copy of the field map
            let mut output = record.clone();
            output.set_content(chunk.text);

            match serde_json::to_value(&chunk.metadata) {
                Ok(metadata) => output.insert("chunk".to_string(), metadata),
                Err(e) => return Outcome::Skipped(SkipReason::Malformed(e.to_string())),
            }
            outputs.push(output);
        }

        Outcome::Kept(outputs)
    }
}

impl Pipeline<RunSummary> for CorpusClean<'_> {
    fn run(&self) -> Result<RunSummary, Error> {
        let stages = Stages::from_config(&self.config)?;

        let (records, skipped_malformed) = self.read_records()?;
        let records_read = records.len();
        self.diagnostics.record(
            Level::Info,
            &format!("{} records read from {:?}", records_read, self.src),
        );

        let dropped_tails = AtomicUsize::new(0);
        let outcomes: Vec<Outcome> = records
            .into_par_iter()
            .map(|record| self.process_record(record, &stages, &dropped_tails))
            .collect();

        let mut summary = RunSummary {
            records_read,
            skipped_malformed,
            dropped_tails: dropped_tails.load(Ordering::Relaxed),
            ..Default::default()
        };

        let mut cleaned: Vec<Record> = Vec::new();
        for (idx, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Outcome::Kept(outputs) => cleaned.extend(outputs),
                Outcome::Skipped(reason) => {
                    self.diagnostics
                        .record(Level::Debug, &format!("record {} skipped: {}", idx, reason));
                    match reason {
                        SkipReason::WrongScript => summary.skipped_wrong_script += 1,
                        SkipReason::EmptyAfterCleaning => summary.skipped_empty += 1,
                        SkipReason::Malformed(_) => summary.skipped_malformed += 1,
                    }
                }
            }
        }

        let before_dedup = cleaned.len();
        let unique = dedup_records(cleaned)?;
        summary.duplicates_removed = before_dedup - unique.len();
        summary.records_written = unique.len();

        let mut writer = CorpusWriter::from_path(&self.dst)?;
        writer.write(unique)?;

        self.diagnostics.record(
            Level::Info,
            &format!(
                "wrote {} records to {:?} ({} duplicates removed, {} records skipped)",
                summary.records_written,
                self.dst,
                summary.duplicates_removed,
                summary.skipped_wrong_script + summary.skipped_empty + summary.skipped_malformed,
            ),
        );

        Ok(summary)
    }
}
