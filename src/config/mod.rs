//! Configuration management for the draft engine
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values for drafting and rating.

pub mod app;
pub mod matchmaking;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use matchmaking::{MatchmakingConfig, OptimizerConfig};
pub use rating::EloConfig;
