//! CSV ingestion into a [`Dataset`].
//!
//! Reading stops at decoding: headers are BOM- and whitespace-normalized,
//! cells are trimmed, blank cells become null, and everything else is kept
//! as raw text. Typing is the normalization engine's job, not the reader's.

use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use tabsync_model::{Dataset, ModelError, Row, Value};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Shape(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Load a CSV file into a dataset.
///
/// Ragged rows and duplicate headers are structural errors. Blank cells
/// ingest as [`Value::Null`], every other cell as [`Value::Text`].
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| {
                let cell = normalize_cell(cell);
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::Text(cell)
                };
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv file"
    );
    Ok(Dataset::new(headers, rows)?)
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
