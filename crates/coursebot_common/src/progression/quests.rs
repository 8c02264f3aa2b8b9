//! Quests: named course bundles with a one-time XP and badge reward.

use super::{capped_bullets, ProgressionEngine, LIST_LIMIT};
use crate::catalog::clean_name;
use crate::learner::{LearnerState, PendingCheck, ProgressState, QuestProgress};
use tracing::info;

impl ProgressionEngine {
    /// Start a quest by (case-insensitive) name.
    pub fn start_quest(&self, learner: &mut LearnerState, raw_name: &str) -> String {
        let cleaned = clean_name(raw_name);
        let Some(quest) = self.catalog().find_quest(cleaned) else {
            return self.unknown_quest_message(learner, cleaned);
        };

        match learner.quest_state(&quest.name) {
            ProgressState::Completed => {
                let mut lines = vec![
                    format!("✅ You have already completed the quest '{}'!", quest.name),
                    String::new(),
                ];
                let available = self.available_quests(learner);
                if available.is_empty() {
                    lines.push("You've started every quest we have. Impressive!".to_string());
                } else {
                    lines.push(
                        "Would you like to start a new one? Here are some available quests:"
                            .to_string(),
                    );
                    lines.extend(capped_bullets(&available, LIST_LIMIT, "quests"));
                }
                lines.join("\n")
            }
            ProgressState::InProgress => {
                let remaining = learner.remaining(&quest.required_courses);
                if remaining.is_empty() {
                    format!(
                        "⏳ You're already in the middle of '{}', and you've finished all required courses. \
                         Use 'show quest progress' to see your progress. You might be moments away from completing it!",
                        quest.name
                    )
                } else {
                    let mut lines = vec![
                        format!(
                            "⏳ You're already in the middle of this quest: '{}'.",
                            quest.name
                        ),
                        String::new(),
                        "You still need to finish:".to_string(),
                    ];
                    lines.extend(self.course_lines(&remaining));
                    lines.push(String::new());
                    lines.push(
                        "✊ You can do it! Once you've completed all the required courses, you'll earn your rewards."
                            .to_string(),
                    );
                    lines.join("\n")
                }
            }
            ProgressState::NotStarted => {
                learner
                    .quests
                    .insert(quest.name.clone(), QuestProgress::InProgress);
                // Courses finished before the quest started still count
                learner.pending_checks.enqueue(PendingCheck::Quests);
                learner.pending_checks.enqueue(PendingCheck::Level);
                info!(learner = %learner.id, quest = %quest.name, "quest started");

                let mut lines = vec![
                    format!("🚀 You have started the '{}' quest!", quest.name),
                    String::new(),
                    "Required Courses:".to_string(),
                ];
                lines.extend(self.course_lines(&quest.required_courses));
                lines.push(String::new());
                lines.push(format!("Reward XP: {} XP", quest.reward_xp));
                lines.push(format!("Reward Badge: {}", quest.reward_badge));
                lines.push(String::new());
                lines.push(
                    "Complete all required courses to finish this quest and claim your rewards.".to_string(),
                );
                lines.push(
                    "Tip: Use 'show quest progress' to track your progress anytime.".to_string(),
                );
                lines.join("\n")
            }
        }
    }

    /// Quests the learner has not started, in catalog order
    pub fn available_quests(&self, learner: &LearnerState) -> Vec<&str> {
        self.catalog()
            .quests()
            .iter()
            .filter(|q| learner.quest_state(&q.name) == ProgressState::NotStarted)
            .map(|q| q.name.as_str())
            .collect()
    }

    fn unknown_quest_message(&self, learner: &LearnerState, cleaned: &str) -> String {
        let mut lines = vec![format!("❌ No quest named '{}' found.", cleaned)];
        let available = self.available_quests(learner);
        if !available.is_empty() {
            lines.push(String::new());
            lines.push("💪 Available quests you can start:".to_string());
            lines.extend(capped_bullets(
                &available,
                LIST_LIMIT,
                "quests. Use 'show quests' to see all.",
            ));
        }
        let active = learner.active_quests();
        if !active.is_empty() {
            lines.push(String::new());
            lines.push("⏳ Quests you're currently working on:".to_string());
            lines.extend(capped_bullets(
                &active,
                LIST_LIMIT,
                "quests in progress. Use 'show quest progress' to see all.",
            ));
        }
        lines.join("\n")
    }

    /// Complete every in-progress quest whose courses are all done.
    ///
    /// Returns one message per quest completed by this call.
    pub fn evaluate_quests(&self, learner: &mut LearnerState) -> Vec<String> {
        let mut messages = Vec::new();
        for quest in self.catalog().quests() {
            if learner.quest_state(&quest.name) != ProgressState::InProgress {
                continue;
            }
            if !learner.has_completed_all(&quest.required_courses) {
                continue;
            }
            learner
                .quests
                .insert(quest.name.clone(), QuestProgress::Completed);
            learner.grant_xp(quest.reward_xp);
            learner.award_badge(&quest.reward_badge);
            info!(learner = %learner.id, quest = %quest.name, "quest completed");
            messages.push(format!(
                "🎉 You have completed the '{}' Quest! You earned {} XP + {}!",
                quest.name, quest.reward_xp, quest.reward_badge
            ));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use crate::learner::{LearnerState, PendingCheck, ProgressState};
    use crate::progression::test_support::{engine, mark_completed};

    #[test]
    fn test_start_quest_case_insensitive() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let msg = engine.start_quest(&mut learner, "'data science starter'");
        assert!(msg.contains("started the 'Data Science Starter' quest"));
        assert!(msg.contains("Reward XP: 100 XP"));
        assert_eq!(learner.quest_state("Data Science Starter"), ProgressState::InProgress);
        assert!(learner.pending_checks.contains(PendingCheck::Quests));
    }

    #[test]
    fn test_start_unknown_quest() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_quest(&mut learner, "Web Developer Starter");
        let msg = engine.start_quest(&mut learner, "Dragon Slayer");
        assert!(msg.starts_with("❌ No quest named 'Dragon Slayer' found."));
        assert!(msg.contains("...and 4 more quests"));
        assert!(msg.contains("- Web Developer Starter"));
        assert_eq!(learner.quests.len(), 1);
    }

    #[test]
    fn test_start_in_progress_lists_remaining() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_quest(&mut learner, "Web Developer Starter");
        mark_completed(&mut learner, &["Introduction to HTML"]);
        let msg = engine.start_quest(&mut learner, "web developer starter");
        assert!(msg.contains("already in the middle"));
        assert!(msg.contains("Introduction to CSS"));
        assert!(!msg.contains("- Introduction to HTML"));
    }

    #[test]
    fn test_evaluate_quests_exactly_once() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_quest(&mut learner, "Data Science Starter");
        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);

        let first = engine.evaluate_quests(&mut learner);
        assert_eq!(first.len(), 1);
        assert_eq!(learner.xp, 100);
        assert!(learner.has_badge("Data Science Starter Badge"));

        let second = engine.evaluate_quests(&mut learner);
        assert!(second.is_empty());
        assert_eq!(learner.xp, 100);
        assert_eq!(learner.badges.len(), 1);
        assert_eq!(learner.quest_state("Data Science Starter"), ProgressState::Completed);
    }

    #[test]
    fn test_unstarted_quests_ignored() {
        let engine = engine();
        let mut learner = LearnerState::new();
        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);
        assert!(engine.evaluate_quests(&mut learner).is_empty());
        assert_eq!(learner.xp, 0);
    }

    #[test]
    fn test_restart_completed_quest() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_quest(&mut learner, "Data Science Starter");
        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);
        engine.evaluate_quests(&mut learner);
        let msg = engine.start_quest(&mut learner, "Data Science Starter");
        assert!(msg.contains("already completed"));
        assert!(msg.contains("- Cybersecurity Beginner"));
        assert_eq!(learner.xp, 100);
    }
}
