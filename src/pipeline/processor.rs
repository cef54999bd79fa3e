//! CSV batch processing
//!
//! Reads `(record_id, data_json)` rows, redacts each payload with the
//! [`RedactionEngine`] and writes `(record_id, redacted_data_json, is_pii)`.
//! Output goes to a `.partial` sibling first and is renamed into place only
//! after the whole input was processed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::summary::RunSummary;
use crate::error::{Error, Result};
use crate::privacy::RedactionEngine;

/// Output CSV header
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Batch processor over CSV files
pub struct CsvProcessor<'a> {
    engine: &'a RedactionEngine,
}

impl<'a> CsvProcessor<'a> {
    pub fn new(engine: &'a RedactionEngine) -> Self {
        Self { engine }
    }

    /// Redact every row of `input` into `output`
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        tracing::info!(input = %input.display(), "Processing input file");

        let data = std::fs::read(input).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputNotFound(input.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut header = csv::StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Err(Error::EmptyInput(input.to_path_buf()));
        }
        // A blank first line is an empty header row
        let columns = if blank_lines(&data, 0) > 0 {
            0
        } else {
            header.len()
        };
        if columns < 2 {
            return Err(Error::InvalidHeader { columns });
        }

        let partial = partial_path(output);
        let result = self.write_rows(&mut reader, &data, &partial);
        match result {
            Ok(summary) => {
                std::fs::rename(&partial, output)?;
                tracing::info!(
                    output = %output.display(),
                    rows = summary.rows_processed,
                    flagged = summary.rows_flagged,
                    skipped = summary.rows_skipped,
                    "Finished processing"
                );
                Ok(summary)
            }
            Err(e) => {
                if let Err(cleanup) = std::fs::remove_file(&partial) {
                    tracing::debug!("Could not remove {}: {}", partial.display(), cleanup);
                }
                Err(e)
            }
        }
    }

    fn write_rows(
        &self,
        reader: &mut csv::Reader<&[u8]>,
        data: &[u8],
        partial: &Path,
    ) -> Result<RunSummary> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(partial)?;
        writer.write_record(OUTPUT_HEADER)?;

        let mut summary = RunSummary::default();
        let mut row = csv::StringRecord::new();
        // Header is row 1
        let mut row_num = 1;
        loop {
            let gap_start = reader.position().byte() as usize;
            let more = reader.read_record(&mut row)?;
            // Blank lines are rows without columns
            for _ in 0..blank_lines(data, gap_start) {
                row_num += 1;
                skip_row(row_num, &mut summary);
            }
            if !more {
                break;
            }
            row_num += 1;
            if row.len() < 2 {
                skip_row(row_num, &mut summary);
                continue;
            }

            let record_id = &row[0];
            let outcome = self.engine.process_line(&row[1])?;
            tracing::debug!(
                record_id,
                found = outcome.found,
                malformed = outcome.malformed,
                categories = ?outcome.categories,
                "Redacted record"
            );

            writer.write_record([
                record_id,
                outcome.text.as_str(),
                python_bool(outcome.found),
            ])?;
            summary.record(&outcome);
        }

        writer.flush()?;
        Ok(summary)
    }
}

fn skip_row(row_num: usize, summary: &mut RunSummary) {
    tracing::warn!("Skipping row {} - insufficient columns", row_num);
    summary.record_skipped();
}

/// Count the blank lines starting at byte `from`, which the CSV reader
/// skips silently. A `\n` completing the previous row's `\r\n` is not a
/// blank line.
fn blank_lines(data: &[u8], from: usize) -> usize {
    let from = from.min(data.len());
    let mut prev = from.checked_sub(1).map(|i| data[i]);
    let mut count = 0;
    for &byte in data[from..].iter().take_while(|b| matches!(b, b'\r' | b'\n')) {
        if !(byte == b'\n' && prev == Some(b'\r')) {
            count += 1;
        }
        prev = Some(byte);
    }
    count
}

/// `is_pii` column rendering, compatible with existing output files
fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    output.with_file_name(name)
}
