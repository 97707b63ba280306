// File: crates/glucose-cli/tests/input.rs
// Purpose: CSV loading and prompt parsing feeding the core pipeline.

use std::io::{Cursor, Write};

use glucose_cli::input::{load_readings_csv, read_readings};
use glucose_cli::prompt::Prompter;
use glucose_core::Analysis;

#[test]
fn loads_csv_with_gaps() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Time,Glucose").unwrap();
    writeln!(file, "8,7.0").unwrap();
    writeln!(file, "9,").unwrap();
    writeln!(file, "10,-1").unwrap();
    writeln!(file, "11, 13.0").unwrap();
    file.flush().unwrap();

    let rows = load_readings_csv(file.path()).expect("load");
    assert_eq!(rows, vec![(8.0, 7.0), (9.0, -1.0), (10.0, -1.0), (11.0, 13.0)]);

    let analysis = Analysis::run(&rows, 8.5, 12.0).expect("analysis");
    assert_eq!(analysis.series.missing(), &[1, 2]);
    assert!(analysis.resolution.all_resolved());
}

#[test]
fn header_aliases_and_column_order() {
    let rows = read_readings(Cursor::new("bg,hour\n6.5,7\n7.5,8\n")).expect("read");
    assert_eq!(rows, vec![(7.0, 6.5), (8.0, 7.5)]);
}

#[test]
fn rejects_missing_columns_and_bad_numbers() {
    assert!(read_readings(Cursor::new("when,glucose\n8,7\n")).is_err());
    let err = read_readings(Cursor::new("time,glucose\n8,high\n")).unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_readings_csv(&dir.path().join("nope.csv")).is_err());
}

#[test]
fn prompts_for_pairs() {
    let input = "3\n11\n8.5\n1\n-1\n3\n10\n";
    let mut out = Vec::new();
    let rows = Prompter::new(Cursor::new(input), &mut out).readings().expect("prompt");
    assert_eq!(rows, vec![(11.0, 8.5), (1.0, -1.0), (3.0, 10.0)]);
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("Time[2]: "));
    assert!(shown.contains("If glucose is missing, enter -1"));
}

#[test]
fn prompt_rejects_bad_count_and_closed_input() {
    let mut out = Vec::new();
    assert!(Prompter::new(Cursor::new("0\n"), &mut out).readings().is_err());
    assert!(Prompter::new(Cursor::new("21\n"), &mut out).readings().is_err());
    assert!(Prompter::new(Cursor::new("2\n8\n"), &mut out).readings().is_err());
    assert!(Prompter::new(Cursor::new(""), &mut out).ask_f64("Danger: ").is_err());
}
