//! Court drafting: balanced two-sided teams across a batch of courts
//!
//! Groups are seated first, remaining players are snake-drafted by rating,
//! and each court is then refined with a bounded swap search.

pub mod allocator;
pub mod balance;
pub mod board;
pub mod engine;
pub mod groups;
pub mod optimizer;
pub mod snake;

// Re-export commonly used types
pub use allocator::CourtAllocator;
pub use balance::BalanceScorer;
pub use board::DraftBoard;
pub use engine::{CourtDraft, DraftOutcome, DraftRequest, MatchEngine};
pub use groups::{GroupAssigner, GroupPlacement, ResolvedGroup, UnplacedGroup, UnplacedReason};
pub use optimizer::{LocalSwapOptimizer, PlayerSwap, StopReason, SwapSummary};
pub use snake::{Direction, SnakeCursor};
