//! Course ratings submitted after completion.

use super::ProgressionEngine;
use crate::catalog::{clean_name, name_key};
use crate::learner::{LearnerState, PendingCheck};
use crate::stores::RatingStore;
use tracing::info;

const STAR_CHARS: &[char] = &['⭐', '★', '*'];

/// Star count of a string made only of star symbols (`⭐⭐⭐`, `***`)
pub fn parse_stars(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut count: u8 = 0;
    for c in trimmed.chars() {
        if c == '\u{fe0f}' || c.is_whitespace() {
            continue;
        }
        if !STAR_CHARS.contains(&c) {
            return None;
        }
        count = count.saturating_add(1);
    }
    (count > 0).then_some(count)
}

impl ProgressionEngine {
    /// Rate a completed course 1-5 stars.
    ///
    /// Checked in order: numeric, in range, course completed. Any failure
    /// leaves both the learner and the store untouched. Repeat ratings are
    /// accepted and each earns the feedback reward.
    pub fn rate_course<S: RatingStore + ?Sized>(
        &self,
        learner: &mut LearnerState,
        ratings: &mut S,
        course_name: &str,
        rating_str: &str,
    ) -> String {
        let course_name = clean_name(course_name);
        let Ok(rating) = rating_str.trim().parse::<i64>() else {
            return "Please provide a numeric rating between 1 and 5.".to_string();
        };
        if !(1..=5).contains(&rating) {
            return format!("Please provide a rating between 1 and 5 for '{}'.", course_name);
        }
        let key = name_key(course_name);
        let Some(course) = learner
            .completed_courses
            .iter()
            .find(|c| name_key(c) == key)
            .cloned()
        else {
            return format!("❌ You haven't completed '{}' yet.", course_name);
        };

        // Range checked above
        let stars = rating as u8;
        ratings.record(&course, stars);
        let reward = self.rewards().feedback_xp;
        learner.grant_xp(reward);
        learner.pending_checks.enqueue(PendingCheck::Level);
        info!(learner = %learner.id, course = %course, stars, "course rated");

        format!(
            "🙌 Thank you for rating '{}' {}/5 stars!\nYou earned ✨ {} XP for providing feedback.",
            course, stars, reward
        )
    }
}
