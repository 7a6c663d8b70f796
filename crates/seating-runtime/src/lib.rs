//! # Seating Runtime
//!
//! Driver for the seating engine: loads a plan, runs the seating flow and
//! renders the outcome for the console.

pub mod plan_file;
pub mod telemetry;

use seating_engine::{SeatingApi, SeatingError, SeatingReport};
use tracing::info;

pub use plan_file::{PlanFile, ReservationSpec, TableSpec};
pub use telemetry::{init_logging, LoggingConfig, TelemetryError};

/// Register the plan and seat everyone, honouring the fallback settings.
///
/// Only the plan's own config is used; environment overrides are the
/// caller's business.
pub fn run(plan: PlanFile) -> Result<SeatingReport, SeatingError> {
    let config = plan.config.clone();
    info!(
        tables = plan.tables.len(),
        reservations = plan.reservations.len(),
        ?config,
        "Loaded wedding plan"
    );

    let mut service = plan.into_service(config)?;
    service.seat_with_fallback()
}

/// Console text for a successful run.
pub fn render_report(report: &SeatingReport) -> String {
    let mut out = String::from("Successfully seated guests!\n");
    if !report.preferences_honored {
        out.push_str("(seating preferences could not all be honoured)\n");
    }
    for table in &report.tables {
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out
}

/// Console text for a failed run.
pub fn render_failure(err: &SeatingError) -> String {
    format!(
        "Unable to seat guests: {}\nSorry, no seating plan works for this wedding.\n",
        err
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_sample() {
        let report = run(PlanFile::sample()).unwrap();
        assert_eq!(report.tables.len(), 4);
        assert_eq!(report.seated_guests(), 24);
    }

    /// Smith dislikes Reese, who fills all but one seat of the only table.
    fn conflicted_plan() -> PlanFile {
        PlanFile::from_json(
            r#"{
                "tables": [ { "name": "A", "capacity": 8 } ],
                "reservations": [
                    { "name": "Reese", "party_size": 7 },
                    { "name": "Smith", "party_size": 1, "dislikes": ["Reese"] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_run_uses_plan_config() {
        let mut plan = conflicted_plan();
        plan.config.fallback_without_preferences = false;
        assert_eq!(
            run(plan).unwrap_err(),
            SeatingError::NoSuitableTable {
                reservation: "Smith".to_string()
            }
        );

        let mut plan = conflicted_plan();
        plan.config.enforce_preferences = false;
        let report = run(plan).unwrap();
        assert_eq!(report.attempts, 1);
        assert!(!report.preferences_honored);
    }

    #[test]
    fn test_render_report() {
        let report = run(PlanFile::sample()).unwrap();
        let text = render_report(&report);
        assert!(text.starts_with("Successfully seated guests!\n"));
        assert!(text.contains("Table A: "));
        assert_eq!(text.lines().filter(|l| l.starts_with("Table ")).count(), 4);
    }

    #[test]
    fn test_render_failure_carries_context() {
        let text = render_failure(&SeatingError::PartyTooLarge {
            party_size: 9,
            max_capacity: 8,
        });
        assert!(text.contains("9"));
        assert!(text.contains("8"));
    }
}
