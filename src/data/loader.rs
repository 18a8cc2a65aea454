use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::MetricsTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a YOLOv8 `results.csv` into a [`MetricsTable`].
///
/// Header names are normalized by removing every space, so the vendor's
/// padded headers (`      epoch`, `metrics/precision (B)`) match their
/// canonical forms (`epoch`, `metrics/precision(B)`).
pub fn load_csv(path: &Path) -> Result<MetricsTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV file {}", path.display()))?;
    read_table(file)
}

/// Parse CSV data from any reader. Split from [`load_csv`] so tests can
/// feed in-memory fixtures.
pub fn read_table<R: Read>(input: R) -> Result<MetricsTable> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let epoch_idx = headers
        .iter()
        .position(|h| h == "epoch")
        .context("CSV missing 'epoch' column")?;

    let mut epochs: Vec<i64> = Vec::new();
    let mut columns: BTreeMap<String, Vec<f64>> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != epoch_idx)
        .map(|(_, h)| (h.clone(), Vec::new()))
        .collect();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let cell = record.get(epoch_idx).unwrap_or("");
        let epoch = cell
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Row {row_no}, epoch: '{cell}' is not an integer"))?;
        epochs.push(epoch);

        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == epoch_idx {
                continue;
            }
            let name = &headers[col_idx];
            let parsed = value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Row {row_no}, {name}: '{value}' is not a number"))?;
            if let Some(col) = columns.get_mut(name) {
                col.push(parsed);
            }
        }
    }

    Ok(MetricsTable { epochs, columns })
}

/// Strip all spaces from a raw header, reproducing the vendor format.
fn normalize_header(h: &str) -> String {
    h.replace(' ', "")
}
