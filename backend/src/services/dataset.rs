//! Reference dataset loader
//!
//! Parses the crop reference table (7 numeric features + label per row)
//! once at startup. Parsing is deliberately permissive: a malformed
//! numeric field becomes `NaN` instead of aborting the load, so a single
//! bad row degrades to "never the nearest neighbor" rather than taking
//! the whole corpus down. Rows with an empty or missing label are
//! dropped, which also absorbs trailing blank lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use shared::models::AgronomicRecord;

use crate::error::{AppError, AppResult};

/// Load the reference corpus from a CSV file.
///
/// Fails with [`AppError::DataLoad`] if the file is unreadable or the
/// corpus is empty after filtering.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> AppResult<Vec<AgronomicRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::DataLoad(format!("cannot open {}: {}", path.display(), e)))?;
    parse_corpus(file)
}

/// Parse the reference corpus from any reader. The first row is the
/// header and is discarded.
pub fn parse_corpus<R: Read>(reader: R) -> AppResult<Vec<AgronomicRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut corpus = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|e| AppError::DataLoad(format!("unreadable row: {}", e)))?;

        // The label is the 8th field; rows without one are dropped.
        let label = match row.get(7) {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => continue,
        };

        corpus.push(AgronomicRecord {
            n: parse_feature(row.get(0)),
            p: parse_feature(row.get(1)),
            k: parse_feature(row.get(2)),
            temperature: parse_feature(row.get(3)),
            humidity: parse_feature(row.get(4)),
            ph: parse_feature(row.get(5)),
            rainfall: parse_feature(row.get(6)),
            label,
        });
    }

    if corpus.is_empty() {
        return Err(AppError::DataLoad(
            "reference corpus is empty after filtering".to_string(),
        ));
    }

    Ok(corpus)
}

/// Permissive numeric parse: absent or malformed fields become `NaN`
fn parse_feature(field: Option<&str>) -> f64 {
    field
        .and_then(|f| f.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
