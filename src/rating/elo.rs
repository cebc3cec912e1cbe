//! Team-average Elo rating implementation
//!
//! Every player's change is driven by their own team's average rating against
//! the opposing team's average, so teammates with the same outcome receive
//! the same delta unless a rating floor applies.

use crate::config::EloConfig;
use crate::error::MatchmakingError;
use crate::rating::calculator::{RatingCalculationResult, RatingCalculator};
use crate::types::{MatchParticipant, MatchResult, RatingDelta, Side};
use std::collections::HashSet;
use tracing::debug;

/// Elo rating calculator implementation
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: EloConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: EloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn elo_config(&self) -> &EloConfig {
        &self.config
    }

    /// Probability that a team with `team_average` beats `opponent_average`
    pub fn expected_score(&self, team_average: f64, opponent_average: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((opponent_average - team_average) / self.config.scale))
    }

    fn side_average(participants: &[MatchParticipant], side: Side) -> Option<f64> {
        let ratings: Vec<i64> = participants
            .iter()
            .filter(|p| p.side == side)
            .map(|p| i64::from(p.rating_before))
            .collect();

        if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<i64>() as f64 / ratings.len() as f64)
        }
    }

    fn validate_result(result: &MatchResult) -> crate::error::Result<()> {
        if result.participants.is_empty() {
            return Err(MatchmakingError::InvalidMatchResult {
                reason: "No participants provided for rating calculation".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for participant in &result.participants {
            if !seen.insert(participant.player_id.as_str()) {
                return Err(MatchmakingError::InvalidMatchResult {
                    reason: format!("Player {} appears more than once", participant.player_id),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: EloConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_rating_changes(
        &self,
        result: &MatchResult,
    ) -> crate::error::Result<RatingCalculationResult> {
        Self::validate_result(result)?;

        let (average_a, average_b) = match (
            Self::side_average(&result.participants, Side::A),
            Self::side_average(&result.participants, Side::B),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(MatchmakingError::InvalidMatchResult {
                    reason: format!(
                        "Game {} on court {} needs players on both sides",
                        result.game_id, result.court_number
                    ),
                }
                .into())
            }
        };

        let deltas = result
            .participants
            .iter()
            .map(|participant| {
                let won = participant.side == result.winner;
                let (team_average, opponent_average) = match participant.side {
                    Side::A => (average_a, average_b),
                    Side::B => (average_b, average_a),
                };
                let delta = self.rating_delta(
                    participant.rating_before,
                    team_average,
                    opponent_average,
                    won,
                );

                RatingDelta {
                    player_id: participant.player_id.clone(),
                    side: participant.side,
                    won,
                    rating_before: participant.rating_before,
                    delta,
                    rating_after: participant.rating_before.saturating_add(delta),
                }
            })
            .collect();

        let expected_score_a = self.expected_score(average_a, average_b);
        debug!(
            "Rated game {} (court {}): side {} won, expected score A {:.3}",
            result.game_id, result.court_number, result.winner, expected_score_a
        );

        Ok(RatingCalculationResult {
            game_id: result.game_id,
            deltas,
            expected_score_a,
        })
    }

    fn rating_delta(
        &self,
        rating_before: i32,
        team_average: f64,
        opponent_average: f64,
        won: bool,
    ) -> i32 {
        let expected = self.expected_score(team_average, opponent_average);
        let actual = if won { 1.0 } else { 0.0 };
        let delta = (self.config.k_factor * (actual - expected)).round() as i32;

        match self.config.rating_floor {
            Some(floor) if delta < 0 => delta.max(floor.saturating_sub(rating_before)).min(0),
            _ => delta,
        }
    }

    fn get_initial_rating(&self) -> i32 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: EloConfig = serde_json::from_value(config).map_err(|e| {
            MatchmakingError::InvalidConfiguration {
                message: format!("Invalid Elo configuration: {}", e),
            }
        })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
