//! # Inbound Ports
//!
//! API trait defining what the seating subsystem can do.

use crate::domain::{SeatCount, SeatingError, SeatingReport, TableSeating};

/// Seating API - inbound port.
///
/// Three operation groups: registration, seating, inspection. All calls are
/// synchronous.
pub trait SeatingApi {
    /// Register a table.
    fn add_table(&mut self, name: &str, capacity: SeatCount) -> Result<(), SeatingError>;

    /// Register a reservation and the parties it would rather not sit with.
    fn add_reservation(
        &mut self,
        name: &str,
        party_size: SeatCount,
        dislikes: &[String],
    ) -> Result<(), SeatingError>;

    /// Run one seating attempt.
    fn seat_guests(&mut self, enforce_preferences: bool) -> Result<(), SeatingError>;

    /// Seat with preferences, falling back to ignoring them if configured.
    fn seat_with_fallback(&mut self) -> Result<SeatingReport, SeatingError>;

    /// Current seating per table.
    fn seating(&self) -> Vec<TableSeating>;

    /// Table the reservation sits at, if any.
    fn table_for(&self, reservation: &str) -> Option<&str>;
}
