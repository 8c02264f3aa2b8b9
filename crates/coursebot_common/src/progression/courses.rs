//! Course completion

use super::ProgressionEngine;
use crate::catalog::clean_name;
use crate::learner::LearnerState;
use tracing::{debug, info};

/// Suggestions listed per category when a course name is unknown
const SUGGESTIONS_PER_CATEGORY: usize = 3;

/// Outcome of a completion claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCompletion {
    pub message: String,
    /// Canonical course name to offer for rating; set only on a new completion
    pub rating_target: Option<String>,
}

impl ProgressionEngine {
    /// Record a course as completed.
    ///
    /// Grants the completion reward and enqueues every follow-on check, but
    /// evaluates none of them; the caller settles once any rating step is
    /// done.
    pub fn complete_course(&self, learner: &mut LearnerState, raw_name: &str) -> CourseCompletion {
        let cleaned = clean_name(raw_name);
        let Some(course) = self.catalog().find_course(cleaned) else {
            debug!(course = %cleaned, "completion claim for unknown course");
            return CourseCompletion {
                message: self.unknown_course_message(learner, cleaned),
                rating_target: None,
            };
        };

        if learner.has_completed(&course.name) {
            return CourseCompletion {
                message: format!(
                    "✔️ You've already completed '{}'. No additional XP awarded.",
                    course.name
                ),
                rating_target: None,
            };
        }

        let reward = self.rewards().course_completion_xp;
        learner.completed_courses.push(course.name.clone());
        learner.grant_xp(reward);
        learner.pending_checks.enqueue_all();
        info!(learner = %learner.id, course = %course.name, xp = learner.xp, "course completed");

        CourseCompletion {
            message: format!(
                "🎓 Congratulations on completing '{}'! You earned {} XP.",
                course.name, reward
            ),
            rating_target: Some(course.name.clone()),
        }
    }

    fn unknown_course_message(&self, learner: &LearnerState, cleaned: &str) -> String {
        let mut lines = vec![
            format!(
                "Unfortunately, '{}' does not exist in our course catalog. No XP has been awarded.",
                cleaned
            ),
            "Here are some courses you might want to complete:".to_string(),
        ];
        for category in self.catalog().categories() {
            let open = learner.remaining(&category.courses);
            if open.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(category.name.clone());
            let shown: Vec<&str> = open.iter().take(SUGGESTIONS_PER_CATEGORY).copied().collect();
            lines.extend(self.course_lines(&shown));
            if open.len() > SUGGESTIONS_PER_CATEGORY {
                lines.push(format!(
                    "...and {} more courses. Use 'show courses' to see all.",
                    open.len() - SUGGESTIONS_PER_CATEGORY
                ));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::learner::{LearnerState, PendingCheck};
    use crate::progression::test_support::engine;

    #[test]
    fn test_complete_new_course() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let result = engine.complete_course(&mut learner, "python for everybody");
        assert_eq!(result.rating_target.as_deref(), Some("Python for Everybody"));
        assert!(result.message.contains("'Python for Everybody'"));
        assert_eq!(learner.xp, 50);
        assert_eq!(learner.completed_courses, vec!["Python for Everybody"]);
        for check in PendingCheck::ALL {
            assert!(learner.pending_checks.contains(check));
        }
    }

    #[test]
    fn test_quoted_duplicate_is_same_course() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.complete_course(&mut learner, "python for everybody");
        let again = engine.complete_course(&mut learner, "'Python for Everybody'");
        assert!(again.rating_target.is_none());
        assert!(again.message.contains("already completed"));
        assert_eq!(learner.xp, 50);
        assert_eq!(learner.completed_courses.len(), 1);
    }

    #[test]
    fn test_unknown_course() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let result = engine.complete_course(&mut learner, "\"Basket Weaving\"");
        assert!(result.rating_target.is_none());
        assert!(result.message.contains("'Basket Weaving' does not exist"));
        assert!(result.message.contains("Cybersecurity"));
        assert!(result.message.contains("...and 29 more courses"));
        assert_eq!(learner.xp, 0);
        assert!(learner.pending_checks.is_empty());
    }

    #[test]
    fn test_unknown_course_skips_finished_categories() {
        let engine = engine();
        let mut learner = LearnerState::new();
        for course in ["Python for Everybody", "Intro to Data Science", "Machine Learning Basics"] {
            engine.complete_course(&mut learner, course);
        }
        let result = engine.complete_course(&mut learner, "nope");
        assert!(!result.message.contains("\nData Science\n"));
    }
}
