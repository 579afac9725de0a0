//! CSV reader for test run exports
//!
//! Each line is either `index,sample` (a numbered RTT sample) or
//! `name,value` (a named field).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::record::TestRecord;
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Sample rows are keyed by a plain non-negative index
fn is_sample_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// 1-based line of the row starting at `offset`; the reader skips empty
/// lines without advancing record positions past them
fn line_at(input: &[u8], offset: usize) -> usize {
    let offset = offset.min(input.len());
    let skipped = input[offset..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .count();
    let start = offset + skipped;
    input[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

fn apply_row(
    record: &mut TestRecord,
    row: &StringRecord,
    line_no: impl Fn() -> usize,
) -> Result<(), AppError> {
    if row.iter().all(str::is_empty) {
        return Ok(());
    }

    let (Some(first), Some(second)) = (row.get(0), row.get(1)) else {
        return Err(AppError::MalformedLine {
            line: line_no(),
            content: row.iter().collect::<Vec<_>>().join(","),
        });
    };

    if is_sample_index(first) {
        record.push_sample(second);
    } else if TestRecord::is_reserved(first) {
        return Err(AppError::ReservedField { line: line_no() });
    } else {
        record.set(first, second);
    }
    Ok(())
}

/// Parse a CSV export; `path` names the source in diagnostics
pub(crate) fn parse_record<R: Read>(mut reader: R, path: &Path) -> Result<TestRecord, AppError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Plain comma splitting: quotes are ordinary characters in these exports
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input.as_slice());

    let mut record = TestRecord::default();
    let mut row = StringRecord::new();
    let mut rows = 0usize;

    while reader.read_record(&mut row)? {
        rows += 1;
        let offset = row.position().map_or(0, |pos| pos.byte() as usize);
        apply_row(&mut record, &row, || line_at(&input, offset))?;
    }

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Read {} rows from {}: {} fields, {} RTT samples",
            rows,
            path.display(),
            record.fields.len(),
            record.rtt_data.len()
        );
    }
    Ok(record)
}

/// Read and parse a CSV export from disk
pub(crate) fn load_record(path: &Path) -> Result<TestRecord, AppError> {
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(file, path)
}
