// File: crates/glucose-core/tests/risk.rs
// Purpose: Risk thresholds and labels.

use glucose_core::{classify, Risk};

#[test]
fn boundaries() {
    assert_eq!(classify(9.99), Risk::Normal);
    assert_eq!(classify(10.0), Risk::PreDiabetic);
    assert_eq!(classify(11.99), Risk::PreDiabetic);
    assert_eq!(classify(12.0), Risk::Danger);
    assert_eq!(classify(-1.0), Risk::Normal);
}

#[test]
fn labels_and_advice() {
    assert_eq!(Risk::Normal.to_string(), "Normal");
    assert_eq!(Risk::PreDiabetic.to_string(), "Pre-Diabetic");
    assert_eq!(Risk::Danger.to_string(), "DANGER");
    assert_eq!(Risk::Normal.advice().len(), 2);
    assert_eq!(Risk::PreDiabetic.advice().len(), 3);
    assert_eq!(Risk::Danger.advice()[0], "CRITICAL CONDITION DETECTED");
}
