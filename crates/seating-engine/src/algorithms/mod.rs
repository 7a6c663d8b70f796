//! # Algorithms Module
//!
//! Feasibility check, ordering and first-fit placement.

pub mod feasibility;
pub mod first_fit;

pub use feasibility::check_feasibility;
pub use first_fit::{find_table, seat_reservations, sort_descending};
