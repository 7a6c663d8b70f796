//! Plan file loading.
//!
//! A plan file is JSON holding an optional `config` block, the tables and
//! the reservations. Without a file the built-in sample wedding is used.

use anyhow::{Context, Result};
use seating_engine::{SeatCount, SeatingApi, SeatingConfig, SeatingError, SeatingService};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A table entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name
    pub name: String,
    /// Seats
    pub capacity: SeatCount,
}

/// A reservation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSpec {
    /// Reservation name
    pub name: String,
    /// Guests in the party
    pub party_size: SeatCount,
    /// Parties this one would rather not sit with
    #[serde(default)]
    pub dislikes: Vec<String>,
}

/// Everything needed for one planning run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFile {
    /// Seating behaviour
    #[serde(default)]
    pub config: SeatingConfig,
    /// Tables in registration order
    pub tables: Vec<TableSpec>,
    /// Reservations in registration order
    pub reservations: Vec<ReservationSpec>,
}

impl PlanFile {
    /// Read and parse a plan file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid plan file {}", path.display()))
    }

    /// Parse a plan from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The sample wedding: four tables, six parties.
    pub fn sample() -> Self {
        let table = |name: &str, capacity| TableSpec {
            name: name.to_string(),
            capacity,
        };
        let party = |name: &str, party_size, dislikes: &[&str]| ReservationSpec {
            name: name.to_string(),
            party_size,
            dislikes: dislikes.iter().map(|d| d.to_string()).collect(),
        };

        Self {
            config: SeatingConfig::default(),
            tables: vec![table("A", 8), table("B", 8), table("C", 7), table("D", 7)],
            reservations: vec![
                party("Thornton", 3, &[]),
                party("Garcia", 2, &[]),
                party("Owens", 6, &["Thornton", "Taylor"]),
                party("Smith", 1, &["Garcia"]),
                party("Taylor", 5, &[]),
                party("Reese", 7, &[]),
            ],
        }
    }

    /// Register every table and reservation with a new service.
    pub fn into_service(self, config: SeatingConfig) -> Result<SeatingService, SeatingError> {
        let mut service = SeatingService::with_config(config);
        for table in &self.tables {
            service.add_table(&table.name, table.capacity)?;
        }
        for reservation in &self.reservations {
            service.add_reservation(&reservation.name, reservation.party_size, &reservation.dislikes)?;
        }
        Ok(service)
    }
}
