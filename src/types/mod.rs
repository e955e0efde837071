//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `params`: Projection inputs, scenarios and run parameters
//! - `row`: The per-year output record
//! - `error`: Error types for the investment calculator

pub mod error;
pub mod params;
pub mod row;

pub use error::ProjectionError;
pub use params::{InvestmentInputs, ProjectionParameters, Scenario, MONTHS_IN_YEAR};
pub use row::YearRow;
