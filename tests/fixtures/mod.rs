//! Test fixtures and roster builders for integration testing

#![allow(dead_code)]

use court_draft::draft::{DraftOutcome, DraftRequest};
use court_draft::types::{PlayerGroup, PlayerRecord, Position};
use std::collections::HashMap;

/// Build a roster with ids `p0..pN` in the given rating order
pub fn roster(ratings: &[i32]) -> Vec<PlayerRecord> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| PlayerRecord::new(format!("p{}", i), format!("Player {}", i), *rating))
        .collect()
}

/// A realistic volleyball session: mixed positions, a few unset
pub fn volleyball_session() -> Vec<PlayerRecord> {
    let players = vec![
        ("setter_1", 1820, Some(Position::Setter)),
        ("setter_2", 1540, Some(Position::Setter)),
        ("libero_1", 1610, Some(Position::Libero)),
        ("libero_2", 1380, Some(Position::Libero)),
        ("outside_1", 1900, Some(Position::Outside)),
        ("outside_2", 1720, Some(Position::Outside)),
        ("outside_3", 1460, Some(Position::Outside)),
        ("outside_4", 1290, Some(Position::Outside)),
        ("middle_1", 1680, Some(Position::Middle)),
        ("middle_2", 1500, Some(Position::Middle)),
        ("opposite_1", 1750, Some(Position::Opposite)),
        ("opposite_2", 1330, Some(Position::Opposite)),
        ("casual_1", 1450, None),
        ("casual_2", 1200, Some(Position::Any)),
    ];

    players
        .into_iter()
        .map(|(id, rating, position)| PlayerRecord {
            position,
            ..PlayerRecord::new(id, id.replace('_', " "), rating)
        })
        .collect()
}

pub fn request(
    roster: Vec<PlayerRecord>,
    court_count: usize,
    team_size: usize,
    groups: Vec<PlayerGroup>,
) -> DraftRequest {
    DraftRequest {
        roster,
        court_count,
        team_size,
        balance_positions: false,
        groups,
    }
}

/// Map every seated player to (court number, side label)
pub fn seating(outcome: &DraftOutcome) -> HashMap<String, (usize, char)> {
    let mut seats = HashMap::new();
    for court in outcome.assignments() {
        for player in &court.side_a {
            seats.insert(player.id.clone(), (court.court_number, 'A'));
        }
        for player in &court.side_b {
            seats.insert(player.id.clone(), (court.court_number, 'B'));
        }
    }
    seats
}

/// Every seated id across the batch, duplicates included
pub fn seated_ids(outcome: &DraftOutcome) -> Vec<String> {
    outcome
        .assignments()
        .flat_map(|court| court.player_ids().cloned())
        .collect()
}
