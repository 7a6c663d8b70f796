//! # Domain Module
//!
//! Core domain types for the Assignment Engine.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod plan;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use plan::*;
pub use value_objects::*;
