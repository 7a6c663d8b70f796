//! # First-Fit Seating
//!
//! Greedy assignment: largest parties first, each to the first eligible
//! table in descending-capacity order. No backtracking.

use crate::domain::{Reservation, SeatingError, Table};
use std::cmp::Reverse;
use tracing::debug;

/// Sort reservations by party size and tables by capacity, largest first.
///
/// Both sorts are stable, so equal sizes keep registration order.
pub fn sort_descending(tables: &mut [Table], reservations: &mut [Reservation]) {
    reservations.sort_by_key(|r| Reverse(r.party_size));
    tables.sort_by_key(|t| Reverse(t.capacity));
}

/// Index of the first table that can host the reservation.
///
/// With `enforce_preferences`, tables already hosting a disliked party are
/// passed over even when they have room.
pub fn find_table(
    tables: &[Table],
    reservation: &Reservation,
    enforce_preferences: bool,
) -> Option<usize> {
    tables.iter().position(|table| {
        if !table.has_room_for(reservation.party_size) {
            return false;
        }
        if enforce_preferences && table.hosts_any(&reservation.dislikes) {
            debug!(
                reservation = %reservation.name,
                table = %table.name,
                "Disliked party already seated, skipping table"
            );
            return false;
        }
        true
    })
}

/// Seat every unseated reservation in order, failing on the first that fits nowhere.
///
/// Reservations already seated are left where they are.
pub fn seat_reservations(
    tables: &mut [Table],
    reservations: &mut [Reservation],
    enforce_preferences: bool,
) -> Result<(), SeatingError> {
    for reservation in reservations.iter_mut().filter(|r| !r.is_seated()) {
        let Some(index) = find_table(tables, reservation, enforce_preferences) else {
            return Err(SeatingError::NoSuitableTable {
                reservation: reservation.name.clone(),
            });
        };

        let table = &mut tables[index];
        table.seat(&reservation.name, reservation.party_size);
        reservation.mark_seated();

        debug!(
            reservation = %reservation.name,
            party_size = reservation.party_size,
            table = %table.name,
            remaining_seats = table.remaining_seats(),
            "Seated party"
        );
    }

    Ok(())
}
