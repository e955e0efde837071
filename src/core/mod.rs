//! Core business logic module
//!
//! This module contains the projection components:
//! - `traits` - The `Sink` abstraction the engine writes through
//! - `interest` - Monthly interest calculation
//! - `engine` - The year/month compounding loop and its table emission

pub mod engine;
pub mod interest;
pub mod traits;

pub use engine::{project, ProjectionEngine, YearRows};
pub use interest::monthly_interest;
pub use traits::Sink;
