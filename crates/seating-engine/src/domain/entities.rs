//! # Domain Entities
//!
//! Tables and reservations managed by the Assignment Engine.

use super::errors::SeatCount;
use super::value_objects::{Occupant, TableSeating};
use serde::Serialize;
use std::collections::BTreeMap;

/// A seating table with fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Unique table name.
    pub name: String,
    /// Total seats, fixed at creation.
    pub capacity: SeatCount,
    remaining_seats: SeatCount,
    /// Reservation name -> seats used. Owned by this table only.
    occupants: BTreeMap<String, SeatCount>,
}

impl Table {
    /// Create an empty table.
    pub fn new(name: impl Into<String>, capacity: SeatCount) -> Self {
        Self {
            name: name.into(),
            capacity,
            remaining_seats: capacity,
            occupants: BTreeMap::new(),
        }
    }

    /// Seats still free.
    pub fn remaining_seats(&self) -> SeatCount {
        self.remaining_seats
    }

    /// Parties seated here.
    pub fn occupants(&self) -> &BTreeMap<String, SeatCount> {
        &self.occupants
    }

    /// Whether enough seats remain for a party of this size.
    pub fn has_room_for(&self, party_size: SeatCount) -> bool {
        self.remaining_seats >= party_size
    }

    /// Whether any of the given reservations already sits here.
    pub fn hosts_any(&self, names: &[String]) -> bool {
        names.iter().any(|name| self.occupants.contains_key(name))
    }

    /// Whether the named reservation sits here.
    pub fn hosts(&self, name: &str) -> bool {
        self.occupants.contains_key(name)
    }

    /// Seat a party. Caller must have checked [`Table::has_room_for`].
    ///
    /// A second party under an already seated name is merged into that
    /// occupant's seat count.
    pub(crate) fn seat(&mut self, reservation: &str, party_size: SeatCount) {
        debug_assert!(self.has_room_for(party_size));
        self.remaining_seats -= party_size;
        *self
            .occupants
            .entry(reservation.to_string())
            .or_insert(0) += party_size;
    }

    /// Remove every occupant.
    pub(crate) fn clear(&mut self) {
        self.occupants.clear();
        self.remaining_seats = self.capacity;
    }

    /// Snapshot for result inspection.
    pub fn snapshot(&self) -> TableSeating {
        TableSeating {
            table: self.name.clone(),
            capacity: self.capacity,
            remaining_seats: self.remaining_seats,
            occupants: self
                .occupants
                .iter()
                .map(|(reservation, party_size)| Occupant {
                    reservation: reservation.clone(),
                    party_size: *party_size,
                })
                .collect(),
        }
    }
}

/// A party of guests seated together as one unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reservation {
    /// Unique reservation name.
    pub name: String,
    /// Seats required at a single table.
    pub party_size: SeatCount,
    /// Reservations this party prefers not to sit with.
    pub dislikes: Vec<String>,
    seated: bool,
}

impl Reservation {
    /// Create an unseated reservation.
    pub fn new(name: impl Into<String>, party_size: SeatCount, dislikes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            party_size,
            dislikes,
            seated: false,
        }
    }

    /// Whether the party has been assigned a table.
    pub fn is_seated(&self) -> bool {
        self.seated
    }

    pub(crate) fn mark_seated(&mut self) {
        self.seated = true;
    }

    pub(crate) fn clear_seated(&mut self) {
        self.seated = false;
    }
}
