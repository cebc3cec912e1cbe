//! Rating system configuration

use crate::error::{MatchmakingError, Result};
use serde::{Deserialize, Serialize};

/// Constants for the Elo-style rating update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// Maximum rating swing for a single match
    pub k_factor: f64,
    /// Rating gap at which the favourite is expected to win 10:1
    pub scale: f64,
    /// Losses never push a rating below this value
    pub rating_floor: Option<i32>,
    /// Rating assigned to newly registered players
    pub initial_rating: i32,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            scale: 400.0,
            rating_floor: None,
            initial_rating: 1500,
        }
    }
}

impl EloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: 16.0,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: 48.0,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.k_factor.is_finite() && self.k_factor > 0.0) {
            return Err(MatchmakingError::invalid_config("K factor must be positive").into());
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(MatchmakingError::invalid_config("Elo scale must be positive").into());
        }

        if let Some(floor) = self.rating_floor {
            if floor > self.initial_rating {
                return Err(MatchmakingError::invalid_config(format!(
                    "Rating floor {} is above the initial rating {}",
                    floor, self.initial_rating
                ))
                .into());
            }
        }

        Ok(())
    }
}
