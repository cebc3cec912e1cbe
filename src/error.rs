//! Error types for the draft and rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Every kind is recoverable by the caller.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific matchmaking scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchmakingError {
    #[error("Insufficient players: {available} available, {required} required")]
    InsufficientPlayers { available: usize, required: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Group {group_id} could not be placed: {reason}")]
    UnplaceableGroup { group_id: String, reason: String },

    #[error("Partial fill: {assigned} of {requested} slots assigned")]
    PartialFill { requested: usize, assigned: usize },

    #[error("Invalid match result: {reason}")]
    InvalidMatchResult { reason: String },
}

impl MatchmakingError {
    /// Shorthand for configuration errors
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
