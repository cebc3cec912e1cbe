//! Snake draft of individual players onto the open seats

use crate::draft::board::DraftBoard;
use crate::draft::snake::SnakeCursor;
use crate::types::{PlayerRecord, Position};
use std::cmp::Reverse;
use tracing::debug;

/// Bucket order used by the position-aware draft
pub const POSITION_DRAFT_ORDER: [Position; 6] = [
    Position::Setter,
    Position::Libero,
    Position::Outside,
    Position::Middle,
    Position::Opposite,
    Position::Any,
];

/// Fills open seats with a serpentine draft ordered by descending rating.
///
/// When more players are supplied than there are seats, the highest rated
/// players are drafted and the rest are handed back in rating order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourtAllocator {
    balance_positions: bool,
}

impl CourtAllocator {
    /// With `balance_positions`, each position bucket is drafted in turn
    /// instead of one draft over the whole pool
    pub fn new(balance_positions: bool) -> Self {
        Self { balance_positions }
    }

    /// Seat `players` on `board`, returning whoever did not get a seat
    pub fn allocate(
        &self,
        mut players: Vec<PlayerRecord>,
        board: &mut DraftBoard,
    ) -> Vec<PlayerRecord> {
        // sort_by_key is stable, so equal ratings keep roster order
        players.sort_by_key(|p| Reverse(p.rating));

        let capacity = board.remaining_capacity();
        let mut unassigned = if players.len() > capacity {
            players.split_off(capacity)
        } else {
            Vec::new()
        };

        let mut cursor = SnakeCursor::new(board.side_count());
        if self.balance_positions {
            for bucket in POSITION_DRAFT_ORDER {
                let (in_bucket, rest): (Vec<_>, Vec<_>) = players
                    .into_iter()
                    .partition(|p| p.position_bucket() == bucket);
                players = rest;

                debug!("Drafting {} {} players", in_bucket.len(), bucket);
                for player in in_bucket {
                    if let Some(player) = Self::seat_next(&mut cursor, board, player) {
                        unassigned.push(player);
                    }
                }
            }
        } else {
            for player in players {
                if let Some(player) = Self::seat_next(&mut cursor, board, player) {
                    unassigned.push(player);
                }
            }
        }

        unassigned
    }

    /// Seat a player on the next side in snake order with an open seat
    fn seat_next(
        cursor: &mut SnakeCursor,
        board: &mut DraftBoard,
        player: PlayerRecord,
    ) -> Option<PlayerRecord> {
        let walk = cursor.full_walk();
        let open_side = cursor
            .by_ref()
            .take(walk)
            .find(|&index| board.remaining(index) > 0);

        match open_side {
            Some(index) => board.seat(index, player).err(),
            None => Some(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(ratings: &[i32]) -> Vec<PlayerRecord> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| PlayerRecord::new(format!("p{}", i), format!("P{}", i), *r))
            .collect()
    }

    fn ids(players: &[PlayerRecord]) -> Vec<&str> {
        players.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_rating_snake_single_court() {
        let mut board = DraftBoard::new(1, 3);
        let roster = players(&[1500, 1800, 1200, 1700, 1300, 1600]);

        let unassigned = CourtAllocator::new(false).allocate(roster, &mut board);

        assert!(unassigned.is_empty());
        // 1800 A, 1700 B, 1600 B, 1500 A, 1300 A, 1200 B
        assert_eq!(ids(board.players(0)), vec!["p1", "p0", "p4"]);
        assert_eq!(ids(board.players(1)), vec!["p3", "p5", "p2"]);
    }

    #[test]
    fn test_equal_ratings_keep_input_order() {
        let mut board = DraftBoard::new(1, 2);
        let roster = players(&[1500, 1500, 1500, 1500]);

        CourtAllocator::new(false).allocate(roster, &mut board);

        assert_eq!(ids(board.players(0)), vec!["p0", "p3"]);
        assert_eq!(ids(board.players(1)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_oversupply_returns_lowest_rated() {
        let mut board = DraftBoard::new(1, 2);
        let roster = players(&[1000, 1900, 1100, 1800, 1700, 1600]);

        let unassigned = CourtAllocator::new(false).allocate(roster, &mut board);

        assert_eq!(ids(&unassigned), vec!["p2", "p0"]);
        assert_eq!(board.remaining_capacity(), 0);
    }

    #[test]
    fn test_full_sides_are_skipped() {
        let mut board = DraftBoard::new(1, 3);
        for rating in [1900, 1800] {
            board
                .seat(0, PlayerRecord::new(format!("g{}", rating), "G", rating))
                .unwrap();
        }

        let unassigned =
            CourtAllocator::new(false).allocate(players(&[1500, 1400, 1300, 1200]), &mut board);

        assert!(unassigned.is_empty());
        assert_eq!(board.players(0).len(), 3);
        assert_eq!(board.players(1).len(), 3);
    }

    #[test]
    fn test_position_aware_spreads_each_position() {
        let mut board = DraftBoard::new(1, 3);
        let roster = vec![
            PlayerRecord::new("s1", "S1", 1900).with_position(Position::Setter),
            PlayerRecord::new("s2", "S2", 1300).with_position(Position::Setter),
            PlayerRecord::new("m1", "M1", 1800).with_position(Position::Middle),
            PlayerRecord::new("m2", "M2", 1700).with_position(Position::Middle),
            PlayerRecord::new("x1", "X1", 1600),
            PlayerRecord::new("x2", "X2", 1500),
        ];

        let unassigned = CourtAllocator::new(true).allocate(roster.clone(), &mut board);
        assert!(unassigned.is_empty());

        for side in 0..2 {
            let seated = board.players(side);
            for position in [Position::Setter, Position::Middle, Position::Any] {
                let count = seated
                    .iter()
                    .filter(|p| p.position_bucket() == position)
                    .count();
                assert_eq!(count, 1, "side {} position {}", side, position);
            }
        }

        // the rating-only draft doubles up middles on side B
        let mut rating_board = DraftBoard::new(1, 3);
        CourtAllocator::new(false).allocate(roster, &mut rating_board);
        let middles_on_b = rating_board
            .players(1)
            .iter()
            .filter(|p| p.position_bucket() == Position::Middle)
            .count();
        assert_eq!(middles_on_b, 2);
    }
}
