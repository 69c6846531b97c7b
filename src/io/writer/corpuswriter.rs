/*! Line-delimited corpus writer. !*/
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::pipelines::corpus::types::Record;

/// Writes records as line-delimited JSON, one record per line.
pub struct CorpusWriter {
    handle: BufWriter<File>,
}

impl CorpusWriter {
    /// Creates the destination file, and its parent directories if needed.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let handle = BufWriter::new(File::create(dst)?);
        Ok(Self { handle })
    }

    /// Writes the provided records and flushes.
    pub fn write(&mut self, records: Vec<Record>) -> Result<(), Error> {
        for record in &records {
            self.write_single(record)?;
        }
        self.handle.flush()?;

        Ok(())
    }

    pub fn write_single(&mut self, record: &Record) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;

        Ok(())
    }
}
