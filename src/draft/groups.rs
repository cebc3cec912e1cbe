//! Seating pre-formed groups as indivisible units

use crate::draft::board::DraftBoard;
use crate::draft::snake::SnakeCursor;
use crate::types::{GroupId, PlayerId, PlayerRecord, Side};
use crate::utils::average_rating;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A group with its members looked up in the roster
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    pub id: GroupId,
    pub members: Vec<PlayerRecord>,
}

impl ResolvedGroup {
    /// Mean member rating, used to order groups
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.members)
    }
}

/// Why a group could not be seated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnplacedReason {
    /// No side had enough open seats for the whole group
    NoCapacity,
    /// A member was already seated with an earlier group
    DuplicateMember { player_id: PlayerId },
}

impl std::fmt::Display for UnplacedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnplacedReason::NoCapacity => write!(f, "no side has enough open seats"),
            UnplacedReason::DuplicateMember { player_id } => {
                write!(f, "player {} is already seated with another group", player_id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedGroup {
    pub group_id: GroupId,
    pub member_ids: Vec<PlayerId>,
    pub reason: UnplacedReason,
}

/// Outcome of seating every group
#[derive(Debug, Clone, Default)]
pub struct GroupPlacement {
    /// Ids of every seated group member
    pub reserved: HashSet<PlayerId>,
    /// (group, court number, side) for each seated group, in placement order
    pub placed: Vec<(GroupId, usize, Side)>,
    pub unplaced: Vec<UnplacedGroup>,
}

/// Places whole groups before the individual draft.
///
/// Groups go strongest first. A single snake cursor is shared by all groups,
/// so consecutive groups land on different sides instead of piling onto the
/// first side with room.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupAssigner;

impl GroupAssigner {
    pub fn new() -> Self {
        Self
    }

    /// Seat each group whole on one side of `board`.
    ///
    /// Groups that cannot be seated are reported in
    /// [`GroupPlacement::unplaced`] and leave the board untouched.
    pub fn assign(&self, groups: &[ResolvedGroup], board: &mut DraftBoard) -> GroupPlacement {
        let mut order: Vec<&ResolvedGroup> = groups.iter().collect();
        // stable: equal averages keep input order
        order.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating()));

        let mut placement = GroupPlacement::default();
        let mut cursor = SnakeCursor::new(board.side_count());

        for group in order {
            let member_ids: Vec<PlayerId> = group.members.iter().map(|p| p.id.clone()).collect();

            let already_seated = member_ids
                .iter()
                .find(|id| placement.reserved.contains(*id))
                .cloned();
            if let Some(player_id) = already_seated {
                warn!(
                    "Group {} rejected: player {} already seated",
                    group.id, player_id
                );
                placement.unplaced.push(UnplacedGroup {
                    group_id: group.id.clone(),
                    reason: UnplacedReason::DuplicateMember { player_id },
                    member_ids,
                });
                continue;
            }

            let needed = group.members.len();
            let walk = cursor.full_walk();
            let target = cursor
                .by_ref()
                .take(walk)
                .find(|&index| board.remaining(index) >= needed)
                .filter(|&index| board.seat_all(index, &group.members).is_ok());

            match target {
                Some(index) => {
                    let (court_number, side) = DraftBoard::locate(index);
                    debug!(
                        "Group {} ({} players, avg {:.1}) seated on court {} side {}",
                        group.id,
                        needed,
                        group.average_rating(),
                        court_number,
                        side
                    );
                    placement.reserved.extend(member_ids);
                    placement.placed.push((group.id.clone(), court_number, side));
                }
                None => {
                    warn!(
                        "Group {} ({} players) does not fit on any side",
                        group.id, needed
                    );
                    placement.unplaced.push(UnplacedGroup {
                        group_id: group.id.clone(),
                        member_ids,
                        reason: UnplacedReason::NoCapacity,
                    });
                }
            }
        }

        placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, ratings: &[i32]) -> ResolvedGroup {
        ResolvedGroup {
            id: id.to_string(),
            members: ratings
                .iter()
                .enumerate()
                .map(|(i, r)| PlayerRecord::new(format!("{}-{}", id, i), format!("{} {}", id, i), *r))
                .collect(),
        }
    }

    #[test]
    fn test_groups_placed_strongest_first_and_spread() {
        let mut board = DraftBoard::new(2, 6);
        let groups = vec![
            group("low", &[1200, 1300]),
            group("high", &[1900, 1800]),
            group("mid", &[1500, 1500]),
        ];

        let placement = GroupAssigner::new().assign(&groups, &mut board);

        assert!(placement.unplaced.is_empty());
        assert_eq!(
            placement.placed,
            vec![
                ("high".to_string(), 1, Side::A),
                ("mid".to_string(), 1, Side::B),
                ("low".to_string(), 2, Side::A),
            ]
        );
        assert_eq!(placement.reserved.len(), 6);
        assert_eq!(board.remaining_capacity(), 24 - 6);
    }

    #[test]
    fn test_cursor_skips_full_sides() {
        let mut board = DraftBoard::new(1, 4);
        let groups = vec![
            group("a", &[1800, 1800, 1800]),
            group("b", &[1700, 1700, 1700]),
            group("c", &[1600]),
        ];

        let placement = GroupAssigner::new().assign(&groups, &mut board);

        // a -> A, b -> B, then the walk turns at B which is full except one seat
        assert!(placement.unplaced.is_empty());
        assert_eq!(board.players(0).len(), 3);
        assert_eq!(board.players(1).len(), 4);
    }

    #[test]
    fn test_group_without_room_is_reported() {
        let mut board = DraftBoard::new(1, 3);
        let groups = vec![
            group("a", &[1800, 1800, 1800]),
            group("b", &[1700, 1700, 1700]),
            group("c", &[1600, 1600]),
        ];

        let placement = GroupAssigner::new().assign(&groups, &mut board);

        assert_eq!(placement.placed.len(), 2);
        assert_eq!(placement.unplaced.len(), 1);
        assert_eq!(placement.unplaced[0].group_id, "c");
        assert_eq!(placement.unplaced[0].reason, UnplacedReason::NoCapacity);
        assert_eq!(placement.unplaced[0].member_ids, vec!["c-0", "c-1"]);
    }

    #[test]
    fn test_overlapping_group_rejected() {
        let mut board = DraftBoard::new(1, 6);
        let first = group("first", &[1800, 1700]);
        let mut second = group("second", &[1500]);
        second.members.push(first.members[0].clone());

        let placement = GroupAssigner::new().assign(&[first, second], &mut board);

        assert_eq!(placement.placed.len(), 1);
        assert_eq!(
            placement.unplaced[0].reason,
            UnplacedReason::DuplicateMember {
                player_id: "first-0".to_string()
            }
        );
        assert_eq!(board.remaining_capacity(), 10);
    }
}
