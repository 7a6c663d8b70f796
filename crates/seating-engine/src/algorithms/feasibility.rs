//! # Feasibility Check
//!
//! Cheap upfront rejection using the running maxima kept by the plan.

use crate::domain::{SeatCount, SeatingError};

/// Reject plans that cannot succeed regardless of order or preferences.
///
/// Checked in this order: largest party vs largest table, then empty input.
/// With no tables registered `max_capacity` is 0, so any party is too large.
pub fn check_feasibility(
    max_party_size: SeatCount,
    max_capacity: SeatCount,
) -> Result<(), SeatingError> {
    if max_party_size > max_capacity {
        return Err(SeatingError::PartyTooLarge {
            party_size: max_party_size,
            max_capacity,
        });
    }

    if max_party_size == 0 {
        return Err(SeatingError::NoReservations);
    }

    Ok(())
}
