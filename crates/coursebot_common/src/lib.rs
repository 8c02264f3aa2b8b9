//! Shared types and progression rules for Coursebot components.
//!
//! The catalog is static reference data, `LearnerState` holds one learner's
//! progress, and `ProgressionEngine` applies the reward rules. Leaderboard and
//! rating data live behind store traits so several sessions can share them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod learner;
pub mod progression;
pub mod stores;

pub use catalog::{Catalog, LevelTable, LevelTier};
pub use config::CoursebotConfig;
pub use error::{CoursebotError, Result};
pub use learner::{LearnerState, PendingAction, PendingCheck, ProgressState};
pub use progression::leaderboard::JoinOutcome;
pub use progression::{update_streak, CourseCompletion, ProgressionEngine};
pub use stores::{
    InMemoryLeaderboard, InMemoryRatings, LeaderboardStore, RatingStore, SharedLeaderboard,
    SharedRatings,
};

/// Version of the coursebot_common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
