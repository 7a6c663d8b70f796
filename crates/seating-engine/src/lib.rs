//! # Seating Engine
//!
//! Assigns wedding-party reservations to tables.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Seat every party at a single table without exceeding its capacity:
//! - Upfront feasibility check against the largest table
//! - Largest parties first, largest tables first (stable ordering)
//! - First-fit placement, optionally skipping tables that host a disliked party
//! - Optional retry with preferences relaxed
//!
//! The heuristic is greedy. It does not search for an optimal packing and
//! never backtracks.
//!
//! ## Module Structure
//!
//! ```text
//! seating-engine/
//! ├── domain/          # Table, Reservation, SeatingPlan, errors, invariants
//! ├── algorithms/      # Feasibility, ordering, first-fit
//! ├── ports/           # SeatingApi
//! ├── application/     # SeatingService (fallback flow)
//! └── config.rs        # SeatingConfig
//! ```
//!
//! ## Example
//!
//! ```
//! use seating_engine::SeatingPlan;
//!
//! let mut plan = SeatingPlan::new();
//! plan.add_table("A", 8);
//! plan.add_reservation("Reese", 7, Vec::<String>::new());
//! plan.add_reservation("Smith", 1, ["Garcia"]);
//!
//! plan.seat_guests(true).unwrap();
//! assert_eq!(plan.table_for("Smith"), Some("A"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{check_feasibility, find_table, seat_reservations, sort_descending};
pub use application::SeatingService;
pub use config::SeatingConfig;
pub use domain::{
    invariant_capacity_balanced, invariant_no_over_seating, invariant_preferences_respected,
    invariant_seated_flags_match, invariant_single_assignment, Occupant, Reservation,
    RetryPolicy, SeatCount, SeatingError, SeatingPlan, SeatingReport, SortState, Table,
    TableSeating,
};
pub use ports::SeatingApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
