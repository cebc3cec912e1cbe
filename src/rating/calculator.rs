//! Rating calculator trait
//!
//! This module defines the interface for turning a completed match into
//! per-player rating deltas.

use crate::types::{GameId, MatchResult, RatingDelta};
use serde::{Deserialize, Serialize};

/// Result of a rating calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    pub game_id: GameId,
    /// One entry per participant, in the order they appear in the result
    pub deltas: Vec<RatingDelta>,
    /// Pre-match expected score of side A (0.0 to 1.0)
    pub expected_score_a: f64,
}

impl RatingCalculationResult {
    /// Look up the delta for a single player
    pub fn delta_for(&self, player_id: &str) -> Option<&RatingDelta> {
        self.deltas.iter().find(|d| d.player_id == player_id)
    }

    /// Net rating change across all participants
    pub fn net_change(&self) -> i64 {
        self.deltas.iter().map(|d| i64::from(d.delta)).sum()
    }
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for every participant of a match
    ///
    /// # Arguments
    /// * `result` - Completed match with each participant's pre-match rating
    ///
    /// # Returns
    /// Result containing one delta per participant
    fn calculate_rating_changes(
        &self,
        result: &MatchResult,
    ) -> crate::error::Result<RatingCalculationResult>;

    /// Signed change for one player given both teams' pre-match averages
    fn rating_delta(
        &self,
        rating_before: i32,
        team_average: f64,
        opponent_average: f64,
        won: bool,
    ) -> i32;

    /// Get the initial rating for new players
    fn get_initial_rating(&self) -> i32;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}
