//! Settle pipeline: drain deferred checks once per turn.

use super::badges::skill_badge_message;
use super::ProgressionEngine;
use crate::learner::{LearnerState, PendingCheck};
use crate::stores::LeaderboardStore;
use tracing::debug;

impl ProgressionEngine {
    /// Run every pending check in order (quests, badges, level, chapters,
    /// paths), then sync the leaderboard entry. Returns the messages produced.
    ///
    /// Level comes after quests and badges so the announcement reflects their
    /// XP; paths come after chapters so a path can finish in the same turn as
    /// its last chapter.
    pub fn settle<B: LeaderboardStore + ?Sized>(
        &self,
        learner: &mut LearnerState,
        board: &mut B,
    ) -> Vec<String> {
        let checks = learner.pending_checks.drain();
        if !checks.is_empty() {
            debug!(learner = %learner.id, ?checks, "settling");
        }
        let mut messages = Vec::new();
        for check in checks {
            match check {
                PendingCheck::Quests => messages.extend(self.evaluate_quests(learner)),
                PendingCheck::Badges => messages.extend(
                    self.evaluate_skill_badges(learner)
                        .iter()
                        .map(|badge| skill_badge_message(badge)),
                ),
                PendingCheck::Level => messages.extend(self.apply_level_up(learner)),
                PendingCheck::Chapters => {
                    messages.extend(self.evaluate_chapter_completion(learner, None, false))
                }
                PendingCheck::Paths => messages.extend(self.evaluate_path_completion(learner)),
            }
        }
        self.sync_leaderboard_entry(learner, board);
        messages
    }
}

#[cfg(test)]
mod tests {
    use crate::learner::LearnerState;
    use crate::progression::test_support::engine;
    use crate::stores::{InMemoryLeaderboard, LeaderboardStore};

    #[test]
    fn test_settle_quest_then_level() {
        let engine = engine();
        let mut board = InMemoryLeaderboard::new();
        let mut learner = LearnerState::new();
        engine.start_quest(&mut learner, "Data Science Starter");
        engine.settle(&mut learner, &mut board);

        engine.complete_course(&mut learner, "Python for Everybody");
        engine.complete_course(&mut learner, "Intro to Data Science");
        let msgs = engine.settle(&mut learner, &mut board);

        assert_eq!(learner.xp, 200);
        assert!(learner.has_badge("Data Science Starter Badge"));
        assert!(learner.has_badge("Python Beginner"));
        assert!(msgs[0].contains("'Data Science Starter' Quest"));
        assert!(msgs[1].contains("skill badge: 'Python Beginner'"));
        assert!(msgs[2].contains("0x2 [Explorer]"));
        assert!(learner.pending_checks.is_empty());
    }

    #[test]
    fn test_settle_is_quiet_when_nothing_pending() {
        let engine = engine();
        let mut board = InMemoryLeaderboard::new();
        let mut learner = LearnerState::new();
        assert!(engine.settle(&mut learner, &mut board).is_empty());
    }

    #[test]
    fn test_settle_finishes_path_with_last_chapter() {
        let engine = engine();
        let mut board = InMemoryLeaderboard::new();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Data Science Fundamentals");
        for course in ["Python for Everybody", "Intro to Data Science"] {
            engine.complete_course(&mut learner, course);
        }
        engine.settle(&mut learner, &mut board);
        engine.complete_course(&mut learner, "Machine Learning Basics");
        let msgs = engine.settle(&mut learner, &mut board);
        assert!(msgs.iter().any(|m| m.contains("Chapter 2")));
        assert!(msgs
            .iter()
            .any(|m| m.contains("entire 'Data Science Fundamentals' learning path")));
        assert!(learner.has_badge("Data Science Explorer Badge"));
    }

    #[test]
    fn test_settle_syncs_leaderboard() {
        let engine = engine();
        let mut board = InMemoryLeaderboard::new();
        let mut learner = LearnerState::new();
        engine.join_leaderboard(&mut learner, &mut board, "ada");
        engine.complete_course(&mut learner, "CIA Triad");
        engine.settle(&mut learner, &mut board);
        assert_eq!(board.find(learner.id).unwrap().xp, 50);
    }
}
