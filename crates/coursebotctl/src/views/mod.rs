//! Read-only replies
//!
//! Every view renders plain text from catalog, learner and store state and
//! never mutates anything.

pub mod courses;
pub mod help;
pub mod leaderboard;
pub mod paths;
pub mod profile;
pub mod quests;
pub mod recommend;

use coursebot_common::stores::RatingStore;
use coursebot_common::{LearnerState, LevelTable};

/// Cells in every progress bar
pub const BAR_CELLS: usize = 16;

/// Bullets shown before an overflow note
pub(crate) const LIST_LIMIT: usize = 5;

/// `done / total` as a percentage, 0 when `total` is 0
pub fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

/// Sixteen-cell bar, filled cells rounded down
pub fn progress_bar(pct: f64) -> String {
    let filled = ((BAR_CELLS as f64 * pct / 100.0).floor() as usize).min(BAR_CELLS);
    format!("{}{}", "🟩".repeat(filled), "⬜".repeat(BAR_CELLS - filled))
}

pub fn stars(avg: f64) -> String {
    "⭐".repeat(avg.round().clamp(0.0, 5.0) as usize)
}

/// `⭐⭐⭐⭐ (12 reviews)`, or `No reviews yet`
pub(crate) fn review_summary<S: RatingStore + ?Sized>(ratings: &S, course: &str) -> String {
    let agg = ratings.aggregate(course);
    match agg.average() {
        Some(avg) => format!("{} ({} reviews)", stars(avg), agg.count),
        None => "No reviews yet".to_string(),
    }
}

/// Star row only, `Not rated` without ratings
pub(crate) fn rating_cell<S: RatingStore + ?Sized>(ratings: &S, course: &str) -> String {
    ratings
        .average(course)
        .map(stars)
        .unwrap_or_else(|| "Not rated".to_string())
}

pub fn xp_line(learner: &LearnerState) -> String {
    format!("Your current XP ✨: {}", learner.xp)
}

pub fn level_line(learner: &LearnerState, levels: &LevelTable) -> String {
    format!("Your current level 🔝: {}.", learner.level(levels).label())
}

pub fn badges_line(learner: &LearnerState) -> String {
    if learner.badges.is_empty() {
        return "You haven't earned any badges yet.".to_string();
    }
    format!(
        "You have the following badges 🎖️:\n- {}",
        learner.badges.join("\n- ")
    )
}
