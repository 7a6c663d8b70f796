//! Ports module for seating
//!
//! Defines the inbound (API) port trait.

pub mod inbound;

pub use inbound::SeatingApi;
