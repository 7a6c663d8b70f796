//! # Seating Plan
//!
//! The Assignment Engine aggregate: owns every table and reservation and
//! runs the first-fit seating pass over them.

use super::entities::{Reservation, Table};
use super::errors::{SeatCount, SeatingError};
use super::value_objects::{SortState, TableSeating};
use crate::algorithms::{check_feasibility, seat_reservations, sort_descending};
use serde::Serialize;
use tracing::{info, warn};

/// Full problem state for one wedding.
///
/// Not designed for shared access; wrap it externally if several threads
/// need it.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SeatingPlan {
    tables: Vec<Table>,
    reservations: Vec<Reservation>,
    max_table_capacity: SeatCount,
    max_party_size: SeatCount,
    sort_state: SortState,
}

impl SeatingPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table.
    pub fn add_table(&mut self, name: impl Into<String>, capacity: SeatCount) {
        self.tables.push(Table::new(name, capacity));
        self.max_table_capacity = self.max_table_capacity.max(capacity);
    }

    /// Register a reservation with the parties it would rather not sit with.
    ///
    /// Names are expected to be unique. Two reservations sharing a name that
    /// land at the same table are tracked there as one occupant.
    pub fn add_reservation<I, S>(
        &mut self,
        name: impl Into<String>,
        party_size: SeatCount,
        dislikes: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dislikes = dislikes.into_iter().map(Into::into).collect();
        self.reservations
            .push(Reservation::new(name, party_size, dislikes));
        self.max_party_size = self.max_party_size.max(party_size);
    }

    /// Seat every reservation, first-fit, largest parties first.
    ///
    /// Fails before touching any table when the plan is infeasible, and
    /// stops at the first reservation no table can take. Parties seated by
    /// an earlier call stay where they are.
    pub fn seat_guests(&mut self, enforce_preferences: bool) -> Result<(), SeatingError> {
        check_feasibility(self.max_party_size, self.max_table_capacity)?;

        if self.sort_state.can_transition_to(SortState::Sorted) {
            sort_descending(&mut self.tables, &mut self.reservations);
            self.sort_state = SortState::Sorted;
        }

        info!(
            tables = self.tables.len(),
            reservations = self.reservations.len(),
            enforce_preferences,
            "Attempting to seat guests"
        );

        let result = seat_reservations(
            &mut self.tables,
            &mut self.reservations,
            enforce_preferences,
        );

        match &result {
            Ok(()) => info!(
                guests = self.seated_guests(),
                enforce_preferences,
                "All guests seated"
            ),
            Err(e) => warn!(
                error = %e,
                unseated = self.unseated().count(),
                enforce_preferences,
                "Seating attempt failed"
            ),
        }

        result
    }

    /// Clear all occupancy and seated flags. The established order is kept.
    pub fn reset_seating(&mut self) {
        self.tables.iter_mut().for_each(Table::clear);
        self.reservations
            .iter_mut()
            .for_each(Reservation::clear_seated);
    }

    /// Per-table snapshot in current plan order.
    pub fn seating(&self) -> Vec<TableSeating> {
        self.tables.iter().map(Table::snapshot).collect()
    }

    /// Registered tables, in current order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Registered reservations, in current order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Name of the table the reservation sits at, if seated.
    pub fn table_for(&self, reservation: &str) -> Option<&str> {
        self.tables
            .iter()
            .find(|t| t.hosts(reservation))
            .map(|t| t.name.as_str())
    }

    /// Whether every reservation has a table.
    pub fn is_fully_seated(&self) -> bool {
        self.reservations.iter().all(Reservation::is_seated)
    }

    /// Reservations still without a table.
    pub fn unseated(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(|r| !r.is_seated())
    }

    /// Ordering state.
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Largest registered table capacity (0 with no tables).
    pub fn max_table_capacity(&self) -> SeatCount {
        self.max_table_capacity
    }

    /// Largest registered party (0 with no reservations).
    pub fn max_party_size(&self) -> SeatCount {
        self.max_party_size
    }

    fn seated_guests(&self) -> SeatCount {
        self.tables
            .iter()
            .map(|t| t.capacity.saturating_sub(t.remaining_seats()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn sample_plan() -> SeatingPlan {
        let mut plan = SeatingPlan::new();
        plan.add_table("A", 8);
        plan.add_table("B", 8);
        plan.add_table("C", 7);
        plan.add_table("D", 7);
        plan.add_reservation("Thornton", 3, NONE);
        plan.add_reservation("Garcia", 2, NONE);
        plan.add_reservation("Owens", 6, ["Thornton", "Taylor"]);
        plan.add_reservation("Smith", 1, ["Garcia"]);
        plan.add_reservation("Taylor", 5, NONE);
        plan.add_reservation("Reese", 7, NONE);
        plan
    }

    #[test]
    fn test_running_maxima() {
        let mut plan = SeatingPlan::new();
        assert_eq!(plan.max_table_capacity(), 0);
        assert_eq!(plan.max_party_size(), 0);
        plan.add_table("C", 7);
        plan.add_table("A", 8);
        plan.add_table("D", 7);
        plan.add_reservation("Garcia", 2, NONE);
        plan.add_reservation("Reese", 7, NONE);
        assert_eq!(plan.max_table_capacity(), 8);
        assert_eq!(plan.max_party_size(), 7);
    }

    #[test]
    fn test_seat_guests_sorts_once() {
        let mut plan = sample_plan();
        assert_eq!(plan.sort_state(), SortState::Unsorted);
        plan.seat_guests(false).unwrap();
        assert_eq!(plan.sort_state(), SortState::Sorted);

        let names: Vec<_> = plan.reservations().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Reese", "Owens", "Taylor", "Thornton", "Garcia", "Smith"]);
    }

    #[test]
    fn test_seat_guests_base_assignment() {
        let mut plan = sample_plan();
        plan.seat_guests(false).unwrap();

        assert!(plan.is_fully_seated());
        assert_eq!(plan.table_for("Reese"), Some("A"));
        assert_eq!(plan.table_for("Owens"), Some("B"));
        assert_eq!(plan.table_for("Taylor"), Some("C"));
        assert_eq!(plan.table_for("Thornton"), Some("D"));
        assert_eq!(plan.table_for("Garcia"), Some("B"));
        assert_eq!(plan.table_for("Smith"), Some("A"));
    }

    #[test]
    fn test_seat_guests_with_preferences() {
        let mut plan = sample_plan();
        plan.seat_guests(true).unwrap();
        // Smith dislikes Garcia, who took the last seats at B.
        assert_eq!(plan.table_for("Garcia"), Some("B"));
        assert_ne!(plan.table_for("Smith"), plan.table_for("Garcia"));
    }

    #[test]
    fn test_party_too_large_leaves_plan_untouched() {
        let mut plan = SeatingPlan::new();
        plan.add_table("A", 8);
        plan.add_reservation("Taylor", 9, NONE);
        plan.add_reservation("Garcia", 2, NONE);

        let err = plan.seat_guests(false).unwrap_err();

        assert_eq!(
            err,
            SeatingError::PartyTooLarge {
                party_size: 9,
                max_capacity: 8
            }
        );
        assert_eq!(plan.sort_state(), SortState::Unsorted);
        assert_eq!(plan.unseated().count(), 2);
    }

    #[test]
    fn test_reset_seating_keeps_order() {
        let mut plan = sample_plan();
        plan.seat_guests(false).unwrap();
        plan.reset_seating();

        assert_eq!(plan.sort_state(), SortState::Sorted);
        assert_eq!(plan.unseated().count(), 6);
        assert!(plan
            .tables()
            .iter()
            .all(|t| t.remaining_seats() == t.capacity && t.occupants().is_empty()));
        assert_eq!(plan.table_for("Reese"), None);
    }

    #[test]
    fn test_duplicate_names_keep_capacity_balanced() {
        let mut plan = SeatingPlan::new();
        plan.add_table("A", 8);
        plan.add_reservation("X", 3, NONE);
        plan.add_reservation("X", 2, NONE);

        plan.seat_guests(false).unwrap();

        let table = &plan.tables()[0];
        assert_eq!(table.remaining_seats(), 3);
        assert_eq!(table.occupants().get("X"), Some(&5));
        assert!(crate::domain::invariant_capacity_balanced(table));
    }

    #[test]
    fn test_seated_guests_counts_occupied_seats() {
        let mut plan = sample_plan();
        assert_eq!(plan.seated_guests(), 0);
        plan.seat_guests(false).unwrap();
        assert_eq!(plan.seated_guests(), 24);
        plan.reset_seating();
        assert_eq!(plan.seated_guests(), 0);
    }

    #[test]
    fn test_preferences_hold_in_placement_order() {
        let mut plan = SeatingPlan::new();
        plan.add_table("table-0", 9);
        plan.add_table("table-1", 6);
        plan.add_reservation("p0", 1, NONE);
        plan.add_reservation("p1", 1, NONE);
        plan.add_reservation("p2", 2, ["p0"]);

        plan.seat_guests(true).unwrap();

        // p2 is placed first; p0 has no dislikes of its own and joins it.
        assert_eq!(plan.table_for("p2"), Some("table-0"));
        assert_eq!(plan.table_for("p0"), Some("table-0"));
        assert!(crate::domain::invariant_preferences_respected(
            plan.tables(),
            plan.reservations()
        ));
    }

    #[test]
    fn test_seating_snapshot_order() {
        let mut plan = sample_plan();
        plan.seat_guests(false).unwrap();
        let seating = plan.seating();
        let names: Vec<_> = seating.iter().map(|s| s.table.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(seating[0].to_string(), "Table A: Reese, party of 7 & Smith, party of 1");
    }
}
