//! Greedy one-for-one swap search within a single court

use crate::config::OptimizerConfig;
use crate::draft::balance::BalanceScorer;
use crate::types::{CourtAssignment, PlayerId, PlayerRecord};
use crate::utils::{rating_difference, rating_sum};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Why the optimizer stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The court was already within the target fairness
    TargetReached,
    /// No remaining swap improves the gap by the minimum amount
    NoImprovingSwap,
    /// The iteration cap was hit
    IterationCap,
}

/// One applied swap and the average gap on either side of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSwap {
    pub from_a: PlayerId,
    pub from_b: PlayerId,
    pub gap_before: f64,
    pub gap_after: f64,
}

/// What the optimizer did to one court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapSummary {
    pub iterations: usize,
    pub swaps: Vec<PlayerSwap>,
    pub stop_reason: StopReason,
}

/// Running side totals, so each candidate swap is O(1) to evaluate
struct SideTotals {
    sum_a: i64,
    sum_b: i64,
    len_a: f64,
    len_b: f64,
}

impl SideTotals {
    fn gap(&self) -> f64 {
        self.gap_with(self.sum_a, self.sum_b)
    }

    fn gap_with(&self, sum_a: i64, sum_b: i64) -> f64 {
        rating_difference(sum_a as f64 / self.len_a, sum_b as f64 / self.len_b)
    }

    fn gap_after_swap(&self, rating_a: i32, rating_b: i32) -> f64 {
        let shift = i64::from(rating_b) - i64::from(rating_a);
        self.gap_with(self.sum_a + shift, self.sum_b - shift)
    }
}

/// Bounded local search that trades one player from each side.
///
/// The first pair (in side order) that narrows the gap by at least
/// `min_improvement` is applied immediately and the scan restarts. Locked
/// players (seated groups) never move.
#[derive(Debug, Clone)]
pub struct LocalSwapOptimizer {
    config: OptimizerConfig,
    scorer: BalanceScorer,
    same_position_only: bool,
}

impl LocalSwapOptimizer {
    /// Optimizer that swaps across any positions; see [`Self::with_position_locking`]
    pub fn new(config: OptimizerConfig, scorer: BalanceScorer) -> Self {
        Self {
            config,
            scorer,
            same_position_only: false,
        }
    }

    /// Only trade players whose position buckets match
    pub fn with_position_locking(mut self, enabled: bool) -> Self {
        self.same_position_only = enabled;
        self
    }

    /// Swap players on one court until it reaches the target fairness or
    /// stops improving, within the iteration cap.
    ///
    /// Players in `locked` never move. The input court is left unchanged.
    pub fn optimize(
        &self,
        court: &CourtAssignment,
        locked: &HashSet<PlayerId>,
    ) -> (CourtAssignment, SwapSummary) {
        let mut side_a = court.side_a.clone();
        let mut side_b = court.side_b.clone();
        let mut swaps = Vec::new();

        if side_a.is_empty() || side_b.is_empty() {
            let summary = SwapSummary {
                iterations: 0,
                swaps,
                stop_reason: StopReason::NoImprovingSwap,
            };
            return (court.clone(), summary);
        }

        let mut totals = SideTotals {
            sum_a: rating_sum(&side_a),
            sum_b: rating_sum(&side_b),
            len_a: side_a.len() as f64,
            len_b: side_b.len() as f64,
        };

        let stop_reason = loop {
            let gap = totals.gap();
            if self.scorer.fairness_percent(gap) >= self.config.target_fairness {
                break StopReason::TargetReached;
            }
            if swaps.len() >= self.config.max_iterations {
                break StopReason::IterationCap;
            }

            let Some((i, j, gap_after)) = self.find_swap(&side_a, &side_b, &totals, gap, locked)
            else {
                break StopReason::NoImprovingSwap;
            };

            let shift = i64::from(side_b[j].rating) - i64::from(side_a[i].rating);
            totals.sum_a += shift;
            totals.sum_b -= shift;
            std::mem::swap(&mut side_a[i], &mut side_b[j]);

            // after the swap, side_b[j] holds the player that came from A
            debug!(
                "Court {}: swapped {} <-> {}, gap {:.1} -> {:.1}",
                court.court_number, side_b[j].id, side_a[i].id, gap, gap_after
            );
            swaps.push(PlayerSwap {
                from_a: side_b[j].id.clone(),
                from_b: side_a[i].id.clone(),
                gap_before: gap,
                gap_after,
            });
        };

        debug!(
            "Court {}: optimizer stopped after {} swaps ({:?})",
            court.court_number,
            swaps.len(),
            stop_reason
        );

        let optimized = CourtAssignment {
            court_number: court.court_number,
            side_a,
            side_b,
        };
        let summary = SwapSummary {
            iterations: swaps.len(),
            swaps,
            stop_reason,
        };
        (optimized, summary)
    }

    fn find_swap(
        &self,
        side_a: &[PlayerRecord],
        side_b: &[PlayerRecord],
        totals: &SideTotals,
        gap: f64,
        locked: &HashSet<PlayerId>,
    ) -> Option<(usize, usize, f64)> {
        for (i, a) in side_a.iter().enumerate() {
            if locked.contains(&a.id) {
                continue;
            }
            for (j, b) in side_b.iter().enumerate() {
                if locked.contains(&b.id) {
                    continue;
                }
                if self.same_position_only && a.position_bucket() != b.position_bucket() {
                    continue;
                }

                let gap_after = totals.gap_after_swap(a.rating, b.rating);
                if gap - gap_after >= self.config.min_improvement {
                    return Some((i, j, gap_after));
                }
            }
        }
        None
    }
}
