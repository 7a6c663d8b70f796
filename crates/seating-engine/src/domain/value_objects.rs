//! # Domain Value Objects
//!
//! Immutable value types for seating.

use super::errors::SeatCount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering state of a seating plan.
///
/// Tables and reservations are sorted once; later attempts reuse that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortState {
    /// Registration order, nothing sorted yet.
    #[default]
    Unsorted,
    /// Sorted descending by capacity / party size.
    Sorted,
}

impl SortState {
    /// Check if transition to next state is valid.
    pub fn can_transition_to(&self, next: SortState) -> bool {
        matches!((self, next), (Self::Unsorted, Self::Sorted))
    }

    /// Whether the plan has already been ordered.
    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted)
    }
}

/// How a fallback attempt treats state left by a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Clear all occupancy before retrying.
    #[default]
    ResetBeforeRetry,
    /// Keep parties seated by the failed attempt and seat only the rest.
    ContinueFromPartial,
}

impl RetryPolicy {
    /// Parse from a config string (`reset_before_retry` / `continue_from_partial`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "reset_before_retry" | "reset" => Some(Self::ResetBeforeRetry),
            "continue_from_partial" | "continue" => Some(Self::ContinueFromPartial),
            _ => None,
        }
    }
}

/// A party seated at a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Reservation name.
    pub reservation: String,
    /// Seats taken.
    pub party_size: SeatCount,
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, party of {}", self.reservation, self.party_size)
    }
}

/// Read-only snapshot of one table's seating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSeating {
    /// Table name.
    pub table: String,
    /// Total seats.
    pub capacity: SeatCount,
    /// Seats still free.
    pub remaining_seats: SeatCount,
    /// Parties at this table, each listed once.
    pub occupants: Vec<Occupant>,
}

impl TableSeating {
    /// Seats taken by all occupants.
    pub fn occupied_seats(&self) -> SeatCount {
        self.occupants.iter().map(|o| o.party_size).sum()
    }

    /// Whether the named reservation sits here.
    pub fn hosts(&self, reservation: &str) -> bool {
        self.occupants.iter().any(|o| o.reservation == reservation)
    }
}

impl fmt::Display for TableSeating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {}: ", self.table)?;
        if self.occupants.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, occupant) in self.occupants.iter().enumerate() {
            if i != 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", occupant)?;
        }
        Ok(())
    }
}

/// Outcome of an orchestrated seating flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingReport {
    /// Final seating per table, in plan order.
    pub tables: Vec<TableSeating>,
    /// Number of seating attempts made (1 or 2).
    pub attempts: u8,
    /// Whether the successful attempt enforced dislikes.
    pub preferences_honored: bool,
}

impl SeatingReport {
    /// Total guests seated across all tables.
    pub fn seated_guests(&self) -> SeatCount {
        self.tables.iter().map(TableSeating::occupied_seats).sum()
    }
}
