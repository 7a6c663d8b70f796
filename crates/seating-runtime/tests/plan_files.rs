//! Plan files read from disk and run end to end.

use std::io::Write;

use seating_engine::SeatingError;
use seating_runtime::{render_report, run, PlanFile};
use tempfile::NamedTempFile;

fn write_plan(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_plan_file_with_preferences() {
    let file = write_plan(
        r#"{
            "tables": [
                { "name": "A", "capacity": 8 },
                { "name": "B", "capacity": 8 }
            ],
            "reservations": [
                { "name": "Reese", "party_size": 7 },
                { "name": "Smith", "party_size": 1, "dislikes": ["Reese"] }
            ]
        }"#,
    );

    let plan = PlanFile::from_path(file.path()).unwrap();
    let report = run(plan).unwrap();

    assert_eq!(report.attempts, 1);
    assert!(report.preferences_honored);
    assert_eq!(report.tables[1].to_string(), "Table B: Smith, party of 1");
}

#[test]
fn test_plan_file_falls_back() {
    let file = write_plan(
        r#"{
            "tables": [ { "name": "A", "capacity": 8 } ],
            "reservations": [
                { "name": "Reese", "party_size": 7 },
                { "name": "Smith", "party_size": 1, "dislikes": ["Reese"] }
            ]
        }"#,
    );

    let report = run(PlanFile::from_path(file.path()).unwrap()).unwrap();

    assert_eq!(report.attempts, 2);
    assert!(render_report(&report).contains("could not all be honoured"));
}

#[test]
fn test_plan_file_infeasible() {
    let file = write_plan(
        r#"{
            "tables": [ { "name": "A", "capacity": 8 } ],
            "reservations": [ { "name": "Taylor", "party_size": 9 } ]
        }"#,
    );

    let err = run(PlanFile::from_path(file.path()).unwrap()).unwrap_err();

    assert_eq!(
        err,
        SeatingError::PartyTooLarge {
            party_size: 9,
            max_capacity: 8
        }
    );
}

#[test]
fn test_missing_plan_file() {
    let err = PlanFile::from_path(std::path::Path::new("/nonexistent/plan.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read plan file"));
}

#[test]
fn test_malformed_plan_file() {
    let file = write_plan("{ not json");
    let err = PlanFile::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid plan file"));
}
