/*! Batch-level exact deduplication.

Removes records that are identical over their whole field set;
near-duplicate elimination happened earlier, at sentence level. Identity is
the canonical serialization of the record, so the order fields appeared in
the source document does not matter. The first occurrence in input order
wins, which keeps the result deterministic however records were processed.
!*/
use std::path::Path;

use runiq::filters::{DigestFilter, Filter};

use crate::error::Error;
use crate::io::reader::RecordReader;
use crate::io::writer::CorpusWriter;
use crate::pipelines::corpus::types::Record;
use crate::reporting::{Diagnostics, Level};

/// Removes exact duplicates, keeping first occurrences.
pub fn dedup_records(records: Vec<Record>) -> Result<Vec<Record>, Error> {
    let mut filter = DigestFilter::default();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let canonical = record.canonical()?;
        if filter.detect(canonical.as_bytes()) {
            unique.push(record);
        }
    }

    Ok(unique)
}

/// Deduplicates a generated corpus file.
///
/// Malformed lines are reported and skipped. Returns the number of records
/// written.
pub fn dedup(src: &Path, dst: &Path, diagnostics: &dyn Diagnostics) -> Result<usize, Error> {
    let mut records = Vec::new();
    for record in RecordReader::from_path(src)? {
        match record {
            Ok(record) => records.push(record),
            Err(e) => diagnostics.record(
                Level::Warn,
                &format!("skipping malformed record in {:?}: {}", src, e),
            ),
        }
    }
    let read = records.len();

    let unique = dedup_records(records)?;
    let written = unique.len();

    let mut writer = CorpusWriter::from_path(dst)?;
    writer.write(unique)?;

    diagnostics.record(
        Level::Info,
        &format!("deduplicated {:?}: {} -> {} records", src, read, written),
    );

    Ok(written)
}
