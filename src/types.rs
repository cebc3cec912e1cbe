//! Common types used throughout the draft and rating engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for pre-formed player groups
pub type GroupId = String;

/// Unique identifier for games
pub type GameId = Uuid;

/// Court position a player prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Setter,
    Outside,
    Middle,
    Opposite,
    Libero,
    Any,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Setter => write!(f, "setter"),
            Position::Outside => write!(f, "outside"),
            Position::Middle => write!(f, "middle"),
            Position::Opposite => write!(f, "opposite"),
            Position::Libero => write!(f, "libero"),
            Position::Any => write!(f, "any"),
        }
    }
}

/// One of the two competing rosters on a court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Player information as supplied by the session roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub win_streak: u32,
    #[serde(default)]
    pub loss_streak: u32,
}

impl PlayerRecord {
    /// Create a fresh record with zeroed counters
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, rating: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            position: None,
            games_played: 0,
            wins: 0,
            losses: 0,
            win_streak: 0,
            loss_streak: 0,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Position bucket used for position-aware drafting; unset counts as `Any`
    pub fn position_bucket(&self) -> Position {
        self.position.unwrap_or(Position::Any)
    }

    /// Return a copy of this record with a completed match applied.
    ///
    /// The engine never calls this; it exists for the persistence layer that
    /// owns the stored record.
    pub fn with_rating_change(&self, change: &RatingDelta) -> Self {
        let mut updated = self.clone();
        updated.rating = change.rating_after;
        updated.games_played += 1;
        if change.won {
            updated.wins += 1;
            updated.win_streak += 1;
            updated.loss_streak = 0;
        } else {
            updated.losses += 1;
            updated.loss_streak += 1;
            updated.win_streak = 0;
        }
        updated
    }
}

/// Players who asked to be kept together on one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGroup {
    pub id: GroupId,
    pub member_ids: Vec<PlayerId>,
}

impl PlayerGroup {
    pub fn new<I, S>(id: impl Into<GroupId>, member_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        Self {
            id: id.into(),
            member_ids: member_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Both rosters for a single court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtAssignment {
    /// 1-based, unique within a batch
    pub court_number: usize,
    pub side_a: Vec<PlayerRecord>,
    pub side_b: Vec<PlayerRecord>,
}

impl CourtAssignment {
    pub fn side(&self, side: Side) -> &[PlayerRecord] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub fn player_count(&self) -> usize {
        self.side_a.len() + self.side_b.len()
    }

    /// Which side a player was drafted onto, if any
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.side_a.iter().any(|p| p.id == player_id) {
            Some(Side::A)
        } else if self.side_b.iter().any(|p| p.id == player_id) {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.side_a.iter().chain(self.side_b.iter()).map(|p| &p.id)
    }
}

/// Balance summary for the two sides of a court
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub average_a: f64,
    pub average_b: f64,
    pub difference: f64,
    /// 100 means identical averages
    pub fairness_percent: f64,
}

/// A participant's pre-match snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub player_id: PlayerId,
    pub side: Side,
    pub rating_before: i32,
}

/// Outcome of a completed game on one court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub game_id: GameId,
    pub court_number: usize,
    pub winner: Side,
    pub participants: Vec<MatchParticipant>,
    pub played_at: DateTime<Utc>,
}

impl MatchResult {
    /// Snapshot every player's rating from the drafted teams.
    ///
    /// Ratings are taken from the assignment as drafted, so later changes to
    /// stored records do not affect the result.
    pub fn from_assignment(
        game_id: GameId,
        assignment: &CourtAssignment,
        winner: Side,
        played_at: DateTime<Utc>,
    ) -> Self {
        let participants = [Side::A, Side::B]
            .into_iter()
            .flat_map(|side| {
                assignment.side(side).iter().map(move |p| MatchParticipant {
                    player_id: p.id.clone(),
                    side,
                    rating_before: p.rating,
                })
            })
            .collect();

        Self {
            game_id,
            court_number: assignment.court_number,
            winner,
            participants,
            played_at,
        }
    }
}

/// Rating change for one participant of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDelta {
    pub player_id: PlayerId,
    pub side: Side,
    pub won: bool,
    pub rating_before: i32,
    pub delta: i32,
    pub rating_after: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generate_game_id;
    use chrono::Utc;

    fn sample_assignment() -> CourtAssignment {
        CourtAssignment {
            court_number: 2,
            side_a: vec![
                PlayerRecord::new("p1", "Ana", 1600),
                PlayerRecord::new("p2", "Ben", 1400),
            ],
            side_b: vec![PlayerRecord::new("p3", "Cy", 1500)],
        }
    }

    #[test]
    fn test_position_serde_lowercase() {
        let json = serde_json::to_string(&Position::Opposite).unwrap();
        assert_eq!(json, "\"opposite\"");

        let parsed: Position = serde_json::from_str("\"libero\"").unwrap();
        assert_eq!(parsed, Position::Libero);
    }

    #[test]
    fn test_player_record_defaults_from_json() {
        let json = r#"{"id":"p9","name":"Dee","rating":1710}"#;
        let player: PlayerRecord = serde_json::from_str(json).unwrap();

        assert_eq!(player.rating, 1710);
        assert_eq!(player.position, None);
        assert_eq!(player.position_bucket(), Position::Any);
        assert_eq!(player.games_played, 0);
    }

    #[test]
    fn test_side_lookup() {
        let assignment = sample_assignment();
        assert_eq!(assignment.side_of("p2"), Some(Side::A));
        assert_eq!(assignment.side_of("p3"), Some(Side::B));
        assert_eq!(assignment.side_of("nobody"), None);
        assert_eq!(assignment.player_count(), 3);
        assert_eq!(Side::A.opponent(), Side::B);
    }

    #[test]
    fn test_match_result_captures_ratings() {
        let assignment = sample_assignment();
        let result =
            MatchResult::from_assignment(generate_game_id(), &assignment, Side::B, Utc::now());

        assert_eq!(result.court_number, 2);
        assert_eq!(result.participants.len(), 3);
        assert_eq!(result.participants[0].player_id, "p1");
        assert_eq!(result.participants[0].side, Side::A);
        assert_eq!(result.participants[0].rating_before, 1600);
        assert_eq!(result.participants[2].side, Side::B);
    }

    #[test]
    fn test_with_rating_change_updates_counters() {
        let player = PlayerRecord {
            loss_streak: 2,
            ..PlayerRecord::new("p1", "Ana", 1500)
        };

        let win = RatingDelta {
            player_id: "p1".to_string(),
            side: Side::A,
            won: true,
            rating_before: 1500,
            delta: 16,
            rating_after: 1516,
        };
        let updated = player.with_rating_change(&win);

        assert_eq!(updated.rating, 1516);
        assert_eq!(updated.games_played, 1);
        assert_eq!(updated.wins, 1);
        assert_eq!(updated.win_streak, 1);
        assert_eq!(updated.loss_streak, 0);
        // original untouched
        assert_eq!(player.rating, 1500);
        assert_eq!(player.loss_streak, 2);

        let loss = RatingDelta {
            won: false,
            delta: -16,
            rating_before: 1516,
            rating_after: 1500,
            ..win
        };
        let updated = updated.with_rating_change(&loss);
        assert_eq!(updated.losses, 1);
        assert_eq!(updated.win_streak, 0);
        assert_eq!(updated.loss_streak, 1);
        assert_eq!(updated.games_played, 2);
    }
}
