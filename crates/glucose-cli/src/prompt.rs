// File: crates/glucose-cli/src/prompt.rs
// Summary: Line-oriented console prompts for readings, query time and danger level.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use glucose_core::types::MAX_READINGS;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", label.trim_end_matches([' ', ':']));
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_f64(&mut self, label: &str) -> Result<f64> {
        let raw = self.ask(label)?;
        raw.parse().with_context(|| format!("'{raw}' is not a number"))
    }

    /// Ask for the reading count, then each time/glucose pair. `-1` marks a gap.
    pub fn readings(&mut self) -> Result<Vec<(f64, f64)>> {
        let raw = self.ask("Enter number of data points: ")?;
        let n: usize = raw.parse().with_context(|| format!("'{raw}' is not a count"))?;
        if n == 0 || n > MAX_READINGS {
            bail!("number of data points must be between 1 and {MAX_READINGS}, got {n}");
        }

        writeln!(self.output, "\nEnter Time (hr) and Glucose (real-time, e.g. 5,6,7)")?;
        writeln!(self.output, "If glucose is missing, enter -1\n")?;

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let t = self.ask_f64(&format!("Time[{i}]: "))?;
            let g = self.ask_f64(&format!("Glucose[{i}]: "))?;
            writeln!(self.output)?;
            out.push((t, g));
        }
        Ok(out)
    }
}
