use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use enroll_model::Frame;

use crate::error::{IngestError, Result};

/// Read an enrollment export into a source frame.
///
/// The first non-empty line is the header row. Header names are
/// BOM-stripped and inner whitespace runs are collapsed; cells are trimmed.
/// Fully empty lines are skipped and ragged rows are padded or truncated to
/// the header width, preserving the original row order.
pub fn read_enrollment_csv(path: &Path, delimiter: u8) -> Result<Frame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Ok(Frame::default());
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|raw| normalize_header(raw)).collect();
    let width = headers.len();
    let mut frame = Frame::new(headers);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        frame.push_row(row)?;
    }

    info!(
        path = %path.display(),
        rows = frame.row_count(),
        columns = frame.columns().len(),
        "loaded enrollment csv"
    );
    Ok(frame)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
