// File: crates/glucose-cli/src/lib.rs
// Summary: Input acquisition for the report binary (CSV loading and interactive prompts).

pub mod input;
pub mod prompt;
