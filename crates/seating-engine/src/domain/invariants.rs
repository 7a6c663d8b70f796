//! # Domain Invariants
//!
//! Rules that must hold for any seating state the engine produces.

use super::entities::{Reservation, Table};
use std::collections::{HashMap, HashSet};

/// Invariant: remaining seats plus occupied seats equal capacity.
pub fn invariant_capacity_balanced(table: &Table) -> bool {
    let occupied: u64 = table.occupants().values().map(|&s| u64::from(s)).sum();
    occupied + u64::from(table.remaining_seats()) == u64::from(table.capacity)
}

/// Invariant: no table holds more guests than it has seats.
pub fn invariant_no_over_seating(tables: &[Table]) -> bool {
    tables.iter().all(|table| {
        let occupied: u64 = table.occupants().values().map(|&s| u64::from(s)).sum();
        occupied <= u64::from(table.capacity)
    })
}

/// Invariant: no seated party found a disliked party already at its table.
///
/// Dislikes are one-directional and only checked for the arriving party, so
/// a disliked party may still join later. `reservations` must be in
/// placement order, as [`SeatingPlan::reservations`] returns them after a
/// run. Self-dislikes and unseated or unknown names never violate this.
///
/// [`SeatingPlan::reservations`]: super::plan::SeatingPlan::reservations
pub fn invariant_preferences_respected(tables: &[Table], reservations: &[Reservation]) -> bool {
    let placement: HashMap<&str, usize> = reservations
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.as_str(), i))
        .collect();

    reservations
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_seated())
        .all(|(i, reservation)| {
            let Some(table) = tables.iter().find(|t| t.hosts(&reservation.name)) else {
                return true;
            };
            reservation
                .dislikes
                .iter()
                .filter(|d| **d != reservation.name && table.hosts(d))
                .all(|d| placement.get(d.as_str()).is_some_and(|&j| j > i))
        })
}

/// Invariant: each reservation occupies at most one table.
pub fn invariant_single_assignment(tables: &[Table]) -> bool {
    let mut seen = HashSet::new();
    tables
        .iter()
        .flat_map(|t| t.occupants().keys())
        .all(|name| seen.insert(name))
}

/// Invariant: a reservation is flagged seated exactly when some table hosts it.
pub fn invariant_seated_flags_match(tables: &[Table], reservations: &[Reservation]) -> bool {
    reservations
        .iter()
        .all(|r| r.is_seated() == tables.iter().any(|t| t.hosts(&r.name)))
}
