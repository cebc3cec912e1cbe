//! Draft and balance configuration

use crate::error::{MatchmakingError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for the swap optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Hard cap on accepted swaps per court
    pub max_iterations: usize,
    /// Stop once a court's fairness percent reaches this value
    pub target_fairness: f64,
    /// Smallest gap reduction, in rating points, worth a swap
    pub min_improvement: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            target_fairness: 97.0, // ~15 points with the default span
            min_improvement: 1.0,
        }
    }
}

/// Bounds and policies applied to every draft request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingConfig {
    pub min_team_size: usize,
    pub max_team_size: usize,
    /// Most courts one draft request may ask for
    pub max_court_count: usize,
    /// Largest group accepted, further capped by the requested team size
    pub max_group_size: usize,
    /// Seat members of unplaceable groups individually instead of leaving them out
    pub fallback_unplaced_groups: bool,
    /// Average gap, in rating points, at which fairness reaches 0%
    pub fairness_span: f64,
    pub optimizer: OptimizerConfig,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            min_team_size: 2,
            max_team_size: 6,
            max_court_count: 32,
            max_group_size: 4,
            fallback_unplaced_groups: true,
            fairness_span: 500.0,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl MatchmakingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.min_team_size == 0 {
            return Err(MatchmakingError::invalid_config("Minimum team size must be at least 1").into());
        }
        if self.max_team_size < self.min_team_size {
            return Err(MatchmakingError::invalid_config(format!(
                "Maximum team size {} is below minimum team size {}",
                self.max_team_size, self.min_team_size
            ))
            .into());
        }
        if self.max_court_count == 0 {
            return Err(MatchmakingError::invalid_config("Maximum court count must be at least 1").into());
        }
        if self
            .max_court_count
            .checked_mul(2)
            .and_then(|sides| sides.checked_mul(self.max_team_size))
            .is_none()
        {
            return Err(MatchmakingError::invalid_config(format!(
                "{} courts of {} players per side cannot be addressed",
                self.max_court_count, self.max_team_size
            ))
            .into());
        }
        if self.max_group_size == 0 {
            return Err(MatchmakingError::invalid_config("Maximum group size must be at least 1").into());
        }
        if !(self.fairness_span.is_finite() && self.fairness_span > 0.0) {
            return Err(MatchmakingError::invalid_config("Fairness span must be positive").into());
        }
        if !(0.0..=100.0).contains(&self.optimizer.target_fairness) {
            return Err(MatchmakingError::invalid_config(
                "Target fairness must be between 0 and 100",
            )
            .into());
        }
        if !(self.optimizer.min_improvement.is_finite() && self.optimizer.min_improvement > 0.0) {
            return Err(MatchmakingError::invalid_config("Minimum swap improvement must be positive").into());
        }

        Ok(())
    }
}
