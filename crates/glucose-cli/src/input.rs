// File: crates/glucose-cli/src/input.rs
// Summary: Load (time, glucose) rows from CSV; blank or -1 glucose cells mark a gap.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use glucose_core::types::MISSING_SENTINEL;

const TIME_HEADERS: &[&str] = &["time", "hour", "hours", "t"];
const GLUCOSE_HEADERS: &[&str] = &["glucose", "value", "bg", "mmol", "g"];

/// Load readings from a CSV file with a header row.
pub fn load_readings_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_readings(file).with_context(|| format!("reading {}", path.display()))
}

/// Parse readings from any CSV source. Headers are matched case-insensitively.
pub fn read_readings<R: Read>(source: R) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let i_time = idx(TIME_HEADERS).context("no time column (expected one of: time, hour, hours, t)")?;
    let i_glucose = idx(GLUCOSE_HEADERS).context("no glucose column (expected one of: glucose, value, bg, mmol, g)")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = row + 2; // 1-based, after the header
        let time_cell = rec.get(i_time).unwrap_or("");
        let time: f64 = time_cell
            .parse()
            .with_context(|| format!("line {line}: time '{time_cell}' is not a number"))?;

        let glucose_cell = rec.get(i_glucose).unwrap_or("");
        let glucose = if glucose_cell.is_empty() {
            MISSING_SENTINEL
        } else {
            glucose_cell
                .parse()
                .with_context(|| format!("line {line}: glucose '{glucose_cell}' is not a number"))?
        };
        out.push((time, glucose));
    }
    Ok(out)
}
