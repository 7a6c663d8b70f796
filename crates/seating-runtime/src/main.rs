//! # Wedding Planner
//!
//! ```text
//! wedding-planner [PLAN.json]
//! ```
//!
//! Without an argument the built-in sample wedding is seated.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::error;

use seating_runtime::{init_logging, render_failure, render_report, run, LoggingConfig, PlanFile};

fn load_plan() -> Result<PlanFile> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => PlanFile::from_path(&path),
        None => Ok(PlanFile::sample()),
    }
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    init_logging(&LoggingConfig::from_env())?;

    // Load plan, then let the environment override its config
    let mut plan = load_plan()?;
    plan.config = plan.config.with_env_overrides();

    match run(plan) {
        Ok(report) => {
            print!("{}", render_report(&report));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Seating failed");
            print!("{}", render_failure(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
