// File: crates/glucose-core/src/lib.rs
// Summary: Core library entry point; exports the numeric pipeline and report rendering.

pub mod types;
pub mod error;
pub mod time;
pub mod series;
pub mod resolve;
pub mod interpolate;
pub mod crossing;
pub mod risk;
pub mod analysis;
pub mod report;

pub use analysis::Analysis;
pub use crossing::{estimate_crossing, CrossingEstimate};
pub use error::GlucoseError;
pub use interpolate::{anchor_index, interpolate_at, InterpolationResult};
pub use report::{render, ReportOptions};
pub use resolve::{resolve_missing, Method, Resolution, ResolvedSlot};
pub use risk::{classify, Risk};
pub use series::{Reading, Series};
pub use time::{clock_label, meal_context, normalize_times, MealContext};
