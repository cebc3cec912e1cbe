//! Court Draft - balanced team drafting and Elo updates for pickup sessions
//!
//! This crate splits a checked-in roster into two-sided teams across courts,
//! keeps pre-formed groups together, refines balance with a bounded swap
//! search, and computes rating deltas once a game is reported.

pub mod config;
pub mod draft;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{MatchmakingError, Result};
pub use types::*;

// Re-export key components
pub use draft::{DraftOutcome, DraftRequest, MatchEngine};
pub use rating::{EloRatingCalculator, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
