//! Utility functions for the draft and rating engine

use crate::types::PlayerRecord;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique game ID
pub fn generate_game_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}

/// Sum of ratings, widened so large rosters cannot overflow
pub fn rating_sum(players: &[PlayerRecord]) -> i64 {
    players.iter().map(|p| i64::from(p.rating)).sum()
}

/// Mean rating of a roster; 0 for an empty roster
pub fn average_rating(players: &[PlayerRecord]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    rating_sum(players) as f64 / players.len() as f64
}
