//! Post-match rating updates using an Elo-style expected score model
//!
//! This module provides the rating calculator interface and the team-average
//! Elo implementation used after a court's game is reported.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::{RatingCalculationResult, RatingCalculator};
pub use elo::EloRatingCalculator;
