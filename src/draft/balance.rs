//! Balance scoring for a court's two sides

use crate::types::{BalanceReport, CourtAssignment, PlayerRecord};
use crate::utils::{average_rating, rating_difference};

/// Converts side averages into a bounded fairness percent.
///
/// Fairness falls linearly from 100 at no gap to 0 at `fairness_span` rating
/// points and stays at 0 beyond it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceScorer {
    fairness_span: f64,
}

impl BalanceScorer {
    /// `fairness_span` is the average gap at which fairness bottoms out at 0%
    pub fn new(fairness_span: f64) -> Self {
        Self { fairness_span }
    }

    /// Gap, in rating points, that scores 0%
    pub fn fairness_span(&self) -> f64 {
        self.fairness_span
    }

    /// Fairness in 0..=100 for a gap between side averages
    pub fn fairness_percent(&self, difference: f64) -> f64 {
        (100.0 - difference.abs() / self.fairness_span * 100.0).clamp(0.0, 100.0)
    }

    /// Averages, gap and fairness for two sides; an empty side averages 0
    pub fn score(&self, side_a: &[PlayerRecord], side_b: &[PlayerRecord]) -> BalanceReport {
        let average_a = average_rating(side_a);
        let average_b = average_rating(side_b);
        let difference = rating_difference(average_a, average_b);

        BalanceReport {
            average_a,
            average_b,
            difference,
            fairness_percent: self.fairness_percent(difference),
        }
    }

    /// Score both sides of a drafted court
    pub fn score_court(&self, court: &CourtAssignment) -> BalanceReport {
        self.score(&court.side_a, &court.side_b)
    }
}

impl Default for BalanceScorer {
    fn default() -> Self {
        Self::new(500.0)
    }
}
