// File: crates/glucose-core/src/report.rs
// Summary: Plain-text report layout (reading table, estimates, advice) rendered from an Analysis.

use std::fmt::{self, Write};

use chrono::NaiveDateTime;

use crate::analysis::Analysis;
use crate::resolve::Method;
use crate::time::{clock_label, wrap_query_time};

const RULE_WIDTH: usize = 70;
const COL: usize = 15;

#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    /// Stamped under the title when set. Left unset for reproducible output.
    pub generated_at: Option<NaiveDateTime>,
}

/// Render the whole report into a `String`.
pub fn render(analysis: &Analysis, opts: &ReportOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, analysis, opts);
    out
}

/// Write the report into any `fmt::Write` sink.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis, opts: &ReportOptions) -> fmt::Result {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{:>34}", "GLUCOSE MONITORING REPORT")?;
    writeln!(out, "{:>34}", "=========================")?;
    if let Some(ts) = opts.generated_at {
        writeln!(out, "Generated: {}", ts.format("%Y-%m-%d %H:%M"))?;
    }
    writeln!(out)?;

    writeln!(out, "{:<COL$}{:<COL$}{:<COL$}Meal Info / Algorithm", "Time", "Glucose", "Risk")?;
    writeln!(out, "{rule}")?;

    match analysis.resolution.method() {
        None => {
            writeln!(out, "No Missing Value Detected")?;
            writeln!(out, "{rule}")?;
        }
        Some(Method::SegmentLinear) => {
            writeln!(out, "Method Used: {}", Method::SegmentLinear)?;
            writeln!(out, "Multiple Missing Values Detected")?;
            writeln!(out, "{rule}")?;
        }
        Some(_) => {}
    }

    for row in analysis.readings() {
        let glucose = row.glucose.map_or_else(|| "--".to_string(), |g| format!("{g:.2}"));
        let risk = row.risk.map_or("--", |r| r.label());
        let info = match row.method {
            Some(m) => format!("{} / {}", row.meal, m),
            None => row.meal.to_string(),
        };
        writeln!(out, "{:<COL$}{:<COL$}{:<COL$}{}", clock_label(row.time), glucose, risk, info)?;
    }

    for slot in analysis.resolution.unresolved() {
        if let Err(e) = &slot.outcome {
            writeln!(out, "Unresolved reading at {}: {}", clock_label(analysis.series.time(slot.index)), e)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    match &analysis.interpolation {
        Ok(r) => writeln!(
            out,
            "Interpolated Glucose at {} : {:.2} ({})",
            clock_label(r.time),
            r.glucose,
            r.risk
        )?,
        Err(e) => writeln!(
            out,
            "Interpolated Glucose at {} : unavailable ({})",
            clock_label(wrap_query_time(analysis.query_time, analysis.series.time(0))),
            e
        )?,
    }
    match &analysis.crossing {
        Ok(c) => writeln!(out, "Danger level crossed at          : {}", clock_label(c.time))?,
        Err(e) => writeln!(out, "Danger level crossed at          : unavailable ({e})")?,
    }
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(out, "MEDICAL SUGGESTIONS")?;
    writeln!(out, "-------------------")?;
    match &analysis.interpolation {
        Ok(r) => {
            for line in r.risk.advice() {
                writeln!(out, "- {line}")?;
            }
        }
        Err(_) => writeln!(out, "- No suggestion: interpolated glucose unavailable")?,
    }

    writeln!(out)?;
    writeln!(out, "(Automatically generated using Numerical Methods)")?;
    Ok(())
}
