//! Working copy of the courts being drafted
//!
//! Sides are flattened into one sequence: court 1 side A, court 1 side B,
//! court 2 side A, and so on. Both the group and individual drafts walk this
//! sequence with a [`SnakeCursor`](crate::draft::SnakeCursor).

use crate::types::{CourtAssignment, PlayerRecord, Side};

/// Sides for a batch of courts, each holding at most `team_size` players
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBoard {
    team_size: usize,
    sides: Vec<Vec<PlayerRecord>>,
}

impl DraftBoard {
    /// Empty board with two sides per court.
    ///
    /// `court_count` must already be bounded by the caller; the engine checks
    /// it against `MatchmakingConfig::max_court_count`.
    pub fn new(court_count: usize, team_size: usize) -> Self {
        Self {
            team_size,
            sides: (0..court_count * 2)
                .map(|_| Vec::with_capacity(team_size))
                .collect(),
        }
    }

    /// Seats per side
    pub fn team_size(&self) -> usize {
        self.team_size
    }

    /// Number of flattened sides, always twice the court count
    pub fn side_count(&self) -> usize {
        self.sides.len()
    }

    /// Number of courts on the board
    pub fn court_count(&self) -> usize {
        self.sides.len() / 2
    }

    /// 1-based court number and side for a flattened index
    pub fn locate(index: usize) -> (usize, Side) {
        let side = if index % 2 == 0 { Side::A } else { Side::B };
        (index / 2 + 1, side)
    }

    /// Players seated so far on one side, in seating order
    pub fn players(&self, index: usize) -> &[PlayerRecord] {
        &self.sides[index]
    }

    /// Open seats on one side
    pub fn remaining(&self, index: usize) -> usize {
        self.team_size.saturating_sub(self.sides[index].len())
    }

    /// Open seats across the whole board
    pub fn remaining_capacity(&self) -> usize {
        (0..self.sides.len()).map(|i| self.remaining(i)).sum()
    }

    /// Seat a player; hands the player back if the side is full
    pub fn seat(&mut self, index: usize, player: PlayerRecord) -> Result<(), PlayerRecord> {
        if self.remaining(index) == 0 {
            return Err(player);
        }
        self.sides[index].push(player);
        Ok(())
    }

    /// Seat several players on one side, or none of them.
    ///
    /// Returns the open seat count when the side cannot take them all.
    pub fn seat_all(&mut self, index: usize, players: &[PlayerRecord]) -> Result<(), usize> {
        let open = self.remaining(index);
        if players.len() > open {
            return Err(open);
        }
        self.sides[index].extend(players.iter().cloned());
        Ok(())
    }

    /// Pair up sides into numbered courts, starting at court 1
    pub fn into_assignments(self) -> Vec<CourtAssignment> {
        let mut sides = self.sides.into_iter();
        let mut assignments = Vec::with_capacity(sides.len() / 2);
        let mut court_number = 1;

        while let (Some(side_a), Some(side_b)) = (sides.next(), sides.next()) {
            assignments.push(CourtAssignment {
                court_number,
                side_a,
                side_b,
            });
            court_number += 1;
        }

        assignments
    }
}
