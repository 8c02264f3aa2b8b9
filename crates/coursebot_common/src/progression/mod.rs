//! Progression engine
//!
//! Rules tying XP, levels, badges, quests and learning paths together for a
//! single learner.
//!
//! ## Reward rules
//!
//! - Completing a course grants a fixed reward once per course
//! - Quests and paths grant their XP and badge exactly once
//! - Chapters grant a fixed reward the first time they complete
//! - Badges are never removed and never re-awarded
//!
//! ## Deferred checks
//!
//! Mutating operations do not evaluate follow-on rewards themselves. They
//! enqueue `PendingCheck`s on the learner and `settle()` drains them in the
//! fixed order quests, badges, level, chapters, paths, then syncs the
//! leaderboard entry.

pub mod badges;
pub mod challenge;
pub mod courses;
pub mod leaderboard;
pub mod levels;
pub mod paths;
pub mod quests;
pub mod rating;
pub mod settle;
pub mod streaks;

pub use courses::CourseCompletion;
pub use rating::parse_stars;
pub use streaks::update_streak;

use crate::catalog::Catalog;
use crate::config::RewardSettings;
use std::sync::Arc;

/// Entries shown before an overflow note in name lists
pub(crate) const LIST_LIMIT: usize = 5;

/// Engine over one shared catalog. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    catalog: Arc<Catalog>,
    rewards: RewardSettings,
}

impl ProgressionEngine {
    pub fn new(catalog: Arc<Catalog>, rewards: RewardSettings) -> Self {
        Self { catalog, rewards }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rewards(&self) -> &RewardSettings {
        &self.rewards
    }

    /// `- Course (link)` lines
    pub(crate) fn course_lines<S: AsRef<str>>(&self, courses: &[S]) -> Vec<String> {
        courses
            .iter()
            .map(|c| {
                let name = c.as_ref();
                format!("- {} ({})", name, self.catalog.course_link(name))
            })
            .collect()
    }
}

/// First `limit` names as bullets plus an overflow note
pub(crate) fn capped_bullets<S: AsRef<str>>(names: &[S], limit: usize, what: &str) -> Vec<String> {
    let mut lines: Vec<String> = names
        .iter()
        .take(limit)
        .map(|n| format!("- {}", n.as_ref()))
        .collect();
    if names.len() > limit {
        lines.push(format!("...and {} more {}", names.len() - limit, what));
    }
    lines
}
