// File: crates/glucose-core/src/risk.rs
// Summary: Risk category per glucose value and the advice lines attached to each.

use std::fmt;

/// Below this value a reading is normal.
pub const PRE_DIABETIC_FROM: f64 = 10.0;
/// At or above this value a reading is dangerous.
pub const DANGER_FROM: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Risk {
    Normal,
    PreDiabetic,
    Danger,
}

impl Risk {
    pub fn label(&self) -> &'static str {
        match self {
            Risk::Normal => "Normal",
            Risk::PreDiabetic => "Pre-Diabetic",
            Risk::Danger => "DANGER",
        }
    }

    /// Suggestion lines printed under the report's advice section.
    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            Risk::Normal => &["Glucose level is normal", "Maintain healthy lifestyle"],
            Risk::PreDiabetic => &[
                "Patient is pre-diabetic",
                "Reduce sugar intake",
                "Regular monitoring required",
            ],
            Risk::Danger => &[
                "CRITICAL CONDITION DETECTED",
                "Immediate medical attention required",
                "Strict dietary control necessary",
                "Consult a specialist immediately",
            ],
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `< 10` normal, `10..12` pre-diabetic, `>= 12` danger. NaN falls through to danger.
pub fn classify(g: f64) -> Risk {
    if g < PRE_DIABETIC_FROM {
        Risk::Normal
    } else if g < DANGER_FROM {
        Risk::PreDiabetic
    } else {
        Risk::Danger
    }
}
