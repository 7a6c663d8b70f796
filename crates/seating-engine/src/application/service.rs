//! Seating Service
//!
//! Main service implementing SeatingApi.

use crate::config::SeatingConfig;
use crate::domain::{
    invariant_no_over_seating, invariant_preferences_respected, invariant_single_assignment,
    RetryPolicy, SeatCount, SeatingError, SeatingPlan, SeatingReport, TableSeating,
};
use crate::ports::inbound::SeatingApi;

use tracing::{debug, info, warn};

/// Seating Service
///
/// Orchestrates the seating flow:
/// 1. Validate registrations (optional)
/// 2. Seat with preferences
/// 3. On a table-scan failure, retry once without preferences
/// 4. Return a report with the final seating
#[derive(Debug, Default)]
pub struct SeatingService {
    config: SeatingConfig,
    plan: SeatingPlan,
}

impl SeatingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with custom config
    pub fn with_config(config: SeatingConfig) -> Self {
        Self {
            config,
            plan: SeatingPlan::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Underlying plan, for inspection
    pub fn plan(&self) -> &SeatingPlan {
        &self.plan
    }

    fn validate_table(&self, name: &str, capacity: SeatCount) -> Result<(), SeatingError> {
        if self.plan.tables().iter().any(|t| t.name == name) {
            return Err(SeatingError::DuplicateTable {
                name: name.to_string(),
            });
        }
        if capacity == 0 {
            return Err(SeatingError::ZeroCapacity {
                table: name.to_string(),
            });
        }
        Ok(())
    }

    fn validate_reservation(
        &self,
        name: &str,
        party_size: SeatCount,
        dislikes: &[String],
    ) -> Result<(), SeatingError> {
        if self.plan.reservations().iter().any(|r| r.name == name) {
            return Err(SeatingError::DuplicateReservation {
                name: name.to_string(),
            });
        }
        if party_size == 0 {
            return Err(SeatingError::EmptyParty {
                reservation: name.to_string(),
            });
        }
        if dislikes.iter().any(|d| d == name) {
            return Err(SeatingError::SelfDislike {
                reservation: name.to_string(),
            });
        }
        Ok(())
    }

    fn report(&self, attempts: u8, preferences_honored: bool) -> SeatingReport {
        let tables = self.plan.tables();
        debug!(
            no_over_seating = invariant_no_over_seating(tables),
            single_assignment = invariant_single_assignment(tables),
            preferences_respected = !preferences_honored
                || invariant_preferences_respected(tables, self.plan.reservations()),
            "Seating invariants checked"
        );

        SeatingReport {
            tables: self.plan.seating(),
            attempts,
            preferences_honored,
        }
    }
}

impl SeatingApi for SeatingService {
    fn add_table(&mut self, name: &str, capacity: SeatCount) -> Result<(), SeatingError> {
        if self.config.validate_registrations {
            self.validate_table(name, capacity)?;
        }
        self.plan.add_table(name, capacity);
        Ok(())
    }

    fn add_reservation(
        &mut self,
        name: &str,
        party_size: SeatCount,
        dislikes: &[String],
    ) -> Result<(), SeatingError> {
        if self.config.validate_registrations {
            self.validate_reservation(name, party_size, dislikes)?;
        }
        self.plan
            .add_reservation(name, party_size, dislikes.iter().cloned());
        Ok(())
    }

    fn seat_guests(&mut self, enforce_preferences: bool) -> Result<(), SeatingError> {
        self.plan.seat_guests(enforce_preferences)
    }

    fn seat_with_fallback(&mut self) -> Result<SeatingReport, SeatingError> {
        let enforce = self.config.enforce_preferences;

        let err = match self.plan.seat_guests(enforce) {
            Ok(()) => return Ok(self.report(1, enforce)),
            Err(e) => e,
        };

        if !(enforce && self.config.fallback_without_preferences)
            || !err.is_retryable_without_preferences()
        {
            return Err(err);
        }

        warn!(
            error = %err,
            retry_policy = ?self.config.retry_policy,
            "Retrying without seating preferences"
        );

        if self.config.retry_policy == RetryPolicy::ResetBeforeRetry {
            self.plan.reset_seating();
        }

        self.plan.seat_guests(false)?;

        info!(attempts = 2, "Guests seated without preferences");
        Ok(self.report(2, false))
    }

    fn seating(&self) -> Vec<TableSeating> {
        self.plan.seating()
    }

    fn table_for(&self, reservation: &str) -> Option<&str> {
        self.plan.table_for(reservation)
    }
}
