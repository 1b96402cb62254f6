// src/import/read.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::{trace, warn};

use super::types::RawRow;

/// Parse tab-separated text with a header line into rows, in file order.
///
/// Rows whose field count differs from the header are kept; short rows leave
/// the missing columns empty and extra trailing fields are ignored.
pub fn read_tsv_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true) // ragged rows are tolerated, not rejected
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header line of {}", source_name))?
        .iter()
        .map(str::to_string)
        .collect();
    trace!(?headers, "header line");

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("TSV parse error in {} at record {}", source_name, idx))?;

        if record.len() != headers.len() {
            warn!(
                record = idx,
                expected = headers.len(),
                found = record.len(),
                "field count differs from header"
            );
        }

        rows.push(RawRow::from_parts(headers.iter().cloned(), record.iter()));
    }

    Ok(rows)
}
