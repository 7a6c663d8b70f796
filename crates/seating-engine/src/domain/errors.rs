//! # Domain Errors
//!
//! Error types for the Assignment Engine.
//!
//! Every variant carries structured fields; rendering is left to `Display`.

use thiserror::Error;

/// Number of seats (table capacity or party size).
pub type SeatCount = u32;

/// Seating error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// The largest party cannot fit at even the largest table.
    ///
    /// Parties are never split across tables.
    #[error("Party of {party_size} is too large, largest table seats {max_capacity}")]
    PartyTooLarge {
        /// Size of the largest registered party
        party_size: SeatCount,
        /// Capacity of the largest registered table
        max_capacity: SeatCount,
    },

    /// No reservations were registered before seating.
    #[error("No reservations to seat")]
    NoReservations,

    /// Every table was examined and none could host the reservation.
    #[error("No remaining table can seat party {reservation}")]
    NoSuitableTable {
        /// Name of the reservation left unseated
        reservation: String,
    },

    /// A table with this name is already registered.
    #[error("Duplicate table: {name}")]
    DuplicateTable {
        /// Table name
        name: String,
    },

    /// A reservation with this name is already registered.
    #[error("Duplicate reservation: {name}")]
    DuplicateReservation {
        /// Reservation name
        name: String,
    },

    /// Table registered without any seats.
    #[error("Table {table} has zero capacity")]
    ZeroCapacity {
        /// Table name
        table: String,
    },

    /// Reservation registered for zero guests.
    #[error("Reservation {reservation} has an empty party")]
    EmptyParty {
        /// Reservation name
        reservation: String,
    },

    /// Reservation lists itself as a dislike.
    #[error("Reservation {reservation} dislikes itself")]
    SelfDislike {
        /// Reservation name
        reservation: String,
    },
}

impl SeatingError {
    /// Whether a second attempt with preferences disabled could succeed.
    ///
    /// Only a table scan failure depends on preferences; the upfront checks
    /// and registration errors do not.
    pub fn is_retryable_without_preferences(&self) -> bool {
        matches!(self, Self::NoSuitableTable { .. })
    }
}
