//! Skill badges, earned from a course set plus an XP floor.

use super::ProgressionEngine;
use crate::learner::LearnerState;
use tracing::info;

impl ProgressionEngine {
    /// Award every skill badge whose requirements are met and not yet held.
    /// Returns the names awarded by this call.
    pub fn evaluate_skill_badges(&self, learner: &mut LearnerState) -> Vec<String> {
        let mut awarded = Vec::new();
        for req in self.catalog().skill_badges() {
            if learner.has_badge(&req.name) {
                continue;
            }
            if learner.xp >= req.min_xp
                && learner.has_completed_all(&req.required_courses)
                && learner.award_badge(&req.name)
            {
                info!(learner = %learner.id, badge = %req.name, "skill badge awarded");
                awarded.push(req.name.clone());
            }
        }
        awarded
    }
}

/// Chat line announcing a skill badge
pub fn skill_badge_message(badge: &str) -> String {
    format!("You've earned a new skill badge: '{}'!", badge)
}

#[cfg(test)]
mod tests {
    use crate::learner::LearnerState;
    use crate::progression::test_support::{engine, mark_completed};

    #[test]
    fn test_badge_needs_courses_and_xp() {
        let engine = engine();
        let mut learner = LearnerState::new();
        mark_completed(
            &mut learner,
            &["Intro to Cybersecurity", "CIA Triad", "Basic Terminologies"],
        );
        learner.xp = 99;
        assert!(engine.evaluate_skill_badges(&mut learner).is_empty());
        learner.xp = 100;
        assert_eq!(
            engine.evaluate_skill_badges(&mut learner),
            vec!["Cybersecurity Fundamentals".to_string()]
        );
    }

    #[test]
    fn test_badge_idempotent() {
        let engine = engine();
        let mut learner = LearnerState::new();
        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);
        learner.xp = 100;
        assert_eq!(engine.evaluate_skill_badges(&mut learner).len(), 1);
        let size = learner.badges.len();
        assert!(engine.evaluate_skill_badges(&mut learner).is_empty());
        assert_eq!(learner.badges.len(), size);
    }

    #[test]
    fn test_badge_already_held_from_elsewhere() {
        let engine = engine();
        let mut learner = LearnerState::new();
        learner.award_badge("Python Beginner");
        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);
        learner.xp = 100;
        assert!(engine.evaluate_skill_badges(&mut learner).is_empty());
        assert_eq!(learner.badges.len(), 1);
    }
}
