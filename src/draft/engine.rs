//! Draft orchestration
//!
//! This module validates a draft request and runs it through group
//! placement, the individual snake draft, per-court swap optimization and
//! balance scoring.

use crate::config::MatchmakingConfig;
use crate::draft::allocator::CourtAllocator;
use crate::draft::balance::BalanceScorer;
use crate::draft::board::DraftBoard;
use crate::draft::groups::{GroupAssigner, ResolvedGroup, UnplacedGroup};
use crate::draft::optimizer::{LocalSwapOptimizer, SwapSummary};
use crate::error::{MatchmakingError, Result};
use crate::types::{BalanceReport, CourtAssignment, PlayerGroup, PlayerId, PlayerRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Everything needed to draft one batch of courts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    /// Checked-in players, in check-in order
    pub roster: Vec<PlayerRecord>,
    pub court_count: usize,
    pub team_size: usize,
    #[serde(default)]
    pub balance_positions: bool,
    #[serde(default)]
    pub groups: Vec<PlayerGroup>,
}

/// A drafted court with its balance before and after optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtDraft {
    pub assignment: CourtAssignment,
    pub balance_before: BalanceReport,
    pub balance: BalanceReport,
    pub optimization: SwapSummary,
}

/// Result of drafting one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOutcome {
    pub courts: Vec<CourtDraft>,
    pub unplaced_groups: Vec<UnplacedGroup>,
    /// Players left without a seat, in roster order
    pub unassigned: Vec<PlayerId>,
    pub team_size: usize,
    pub requested_slots: usize,
    pub assigned_count: usize,
}

impl DraftOutcome {
    /// Fewer players seated than the batch has slots
    pub fn is_partial(&self) -> bool {
        self.assigned_count < self.requested_slots
    }

    /// Final court assignments, in court order
    pub fn assignments(&self) -> impl Iterator<Item = &CourtAssignment> {
        self.courts.iter().map(|c| &c.assignment)
    }

    /// Look up a court by its 1-based number
    pub fn court(&self, court_number: usize) -> Option<&CourtDraft> {
        self.courts
            .iter()
            .find(|c| c.assignment.court_number == court_number)
    }

    /// Recoverable conditions the caller may want to surface
    pub fn warnings(&self) -> Vec<MatchmakingError> {
        let mut warnings: Vec<MatchmakingError> = self
            .unplaced_groups
            .iter()
            .map(|g| MatchmakingError::UnplaceableGroup {
                group_id: g.group_id.clone(),
                reason: g.reason.to_string(),
            })
            .collect();

        if self.is_partial() {
            warnings.push(MatchmakingError::PartialFill {
                requested: self.requested_slots,
                assigned: self.assigned_count,
            });
        }

        warnings
    }
}

/// Composition root for drafting.
///
/// Holds only configuration, so one engine can serve any number of
/// concurrent sessions.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchmakingConfig,
    scorer: BalanceScorer,
}

impl MatchEngine {
    /// Build an engine, rejecting invalid tunables
    pub fn new(config: MatchmakingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: MatchmakingConfig) -> Self {
        Self {
            scorer: BalanceScorer::new(config.fairness_span),
            config,
        }
    }

    /// Tunables this engine was built with
    pub fn config(&self) -> &MatchmakingConfig {
        &self.config
    }

    pub fn scorer(&self) -> &BalanceScorer {
        &self.scorer
    }

    /// Draft a batch of courts
    pub fn draft(&self, request: &DraftRequest) -> Result<DraftOutcome> {
        let groups = self.validate_request(request)?;
        let requested_slots = request
            .court_count
            .checked_mul(2)
            .and_then(|sides| sides.checked_mul(request.team_size))
            .ok_or_else(|| {
                MatchmakingError::invalid_config(format!(
                    "{} courts of {} players per side cannot be addressed",
                    request.court_count, request.team_size
                ))
            })?;

        let mut board = DraftBoard::new(request.court_count, request.team_size);
        let placement = GroupAssigner::new().assign(&groups, &mut board);

        // members of unplaced groups either join the pool or sit out
        let sitting_out: HashSet<&PlayerId> = if self.config.fallback_unplaced_groups {
            HashSet::new()
        } else {
            placement
                .unplaced
                .iter()
                .flat_map(|g| g.member_ids.iter())
                .filter(|id| !placement.reserved.contains(*id))
                .collect()
        };

        let pool: Vec<PlayerRecord> = request
            .roster
            .iter()
            .filter(|p| !placement.reserved.contains(&p.id) && !sitting_out.contains(&p.id))
            .cloned()
            .collect();

        let leftovers =
            CourtAllocator::new(request.balance_positions).allocate(pool, &mut board);

        let optimizer = LocalSwapOptimizer::new(self.config.optimizer.clone(), self.scorer)
            .with_position_locking(request.balance_positions);

        let courts: Vec<CourtDraft> = board
            .into_assignments()
            .into_iter()
            .map(|drafted| {
                let balance_before = self.scorer.score_court(&drafted);
                let (assignment, optimization) = optimizer.optimize(&drafted, &placement.reserved);
                CourtDraft {
                    balance: self.scorer.score_court(&assignment),
                    balance_before,
                    assignment,
                    optimization,
                }
            })
            .collect();

        let left_out: HashSet<&PlayerId> = leftovers
            .iter()
            .map(|p| &p.id)
            .chain(sitting_out.iter().copied())
            .collect();
        let unassigned: Vec<PlayerId> = request
            .roster
            .iter()
            .filter(|p| left_out.contains(&p.id))
            .map(|p| p.id.clone())
            .collect();

        let outcome = DraftOutcome {
            assigned_count: courts.iter().map(|c| c.assignment.player_count()).sum(),
            requested_slots,
            team_size: request.team_size,
            unplaced_groups: placement.unplaced,
            unassigned,
            courts,
        };

        if outcome.is_partial() {
            warn!(
                "Partial fill: {} of {} slots assigned",
                outcome.assigned_count, outcome.requested_slots
            );
        }
        info!(
            "Drafted {} courts: {} assigned, {} unassigned, {} groups unplaced",
            outcome.courts.len(),
            outcome.assigned_count,
            outcome.unassigned.len(),
            outcome.unplaced_groups.len()
        );

        Ok(outcome)
    }

    /// Check the request and resolve group members against the roster
    fn validate_request(&self, request: &DraftRequest) -> Result<Vec<ResolvedGroup>> {
        if request.court_count == 0 || request.court_count > self.config.max_court_count {
            return Err(MatchmakingError::invalid_config(format!(
                "Court count {} is outside 1..={}",
                request.court_count, self.config.max_court_count
            ))
            .into());
        }

        if request.team_size < self.config.min_team_size
            || request.team_size > self.config.max_team_size
        {
            return Err(MatchmakingError::invalid_config(format!(
                "Team size {} is outside {}..={}",
                request.team_size, self.config.min_team_size, self.config.max_team_size
            ))
            .into());
        }

        let mut by_id: HashMap<&str, &PlayerRecord> = HashMap::with_capacity(request.roster.len());
        for player in &request.roster {
            if by_id.insert(player.id.as_str(), player).is_some() {
                return Err(MatchmakingError::invalid_config(format!(
                    "Player {} appears more than once in the roster",
                    player.id
                ))
                .into());
            }
        }

        let max_group_size = self.config.max_group_size.min(request.team_size);
        let mut groups = Vec::with_capacity(request.groups.len());
        for group in &request.groups {
            if group.member_ids.is_empty() || group.member_ids.len() > max_group_size {
                return Err(MatchmakingError::invalid_config(format!(
                    "Group {} has {} members, expected 1..={}",
                    group.id,
                    group.member_ids.len(),
                    max_group_size
                ))
                .into());
            }

            let mut seen = HashSet::new();
            let mut members = Vec::with_capacity(group.member_ids.len());
            for member_id in &group.member_ids {
                if !seen.insert(member_id.as_str()) {
                    return Err(MatchmakingError::invalid_config(format!(
                        "Group {} lists player {} twice",
                        group.id, member_id
                    ))
                    .into());
                }
                let player = by_id.get(member_id.as_str()).ok_or_else(|| {
                    MatchmakingError::invalid_config(format!(
                        "Group {} references unknown player {}",
                        group.id, member_id
                    ))
                })?;
                members.push((*player).clone());
            }

            groups.push(ResolvedGroup {
                id: group.id.clone(),
                members,
            });
        }

        let required = request.team_size * 2;
        if request.roster.len() < required {
            return Err(MatchmakingError::InsufficientPlayers {
                available: request.roster.len(),
                required,
            }
            .into());
        }

        Ok(groups)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::from_validated(MatchmakingConfig::default())
    }
}
