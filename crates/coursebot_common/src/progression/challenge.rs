//! Daily challenge: one question per day for a small XP reward.

use super::ProgressionEngine;
use crate::learner::{LearnerState, PendingCheck};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

impl ProgressionEngine {
    /// Assign a random challenge for today unless today's is already done.
    pub fn present_challenge<R: Rng + ?Sized>(
        &self,
        learner: &mut LearnerState,
        today: NaiveDate,
        rng: &mut R,
    ) -> String {
        if learner.challenge.completed_on(today) {
            return "You've already completed today's challenge!".to_string();
        }
        let Some(challenge) = self.catalog().challenges().choose(rng) else {
            return "There is no challenge available today. Check back tomorrow!".to_string();
        };
        learner.challenge.current = Some(challenge.clone());
        learner.challenge.assigned_on = Some(today);
        learner.challenge.completed = false;
        debug!(learner = %learner.id, question = %challenge.question, "challenge assigned");
        format!(
            "🧩 Today's Challenge: {}\nJust type your guess as a message, and I'll check if it's correct!",
            challenge.question
        )
    }

    /// Check an answer against the active challenge.
    ///
    /// `None` means no challenge is active, so the message is not an answer.
    pub fn check_challenge_answer(
        &self,
        learner: &mut LearnerState,
        answer: &str,
    ) -> Option<String> {
        let challenge = learner.challenge.current.as_ref()?;
        if learner.challenge.completed {
            return Some("✅ You've already completed today's challenge.".to_string());
        }

        let expected = challenge.answer.trim().to_lowercase();
        if answer.trim().to_lowercase() != expected {
            return Some("🤔 That doesn't seem right. Try again!".to_string());
        }

        let reward = challenge.reward_xp;
        learner.challenge.completed = true;
        learner.challenge.current = None;
        learner.grant_xp(reward);
        learner.pending_checks.enqueue(PendingCheck::Level);
        info!(learner = %learner.id, xp = reward, "daily challenge solved");
        Some(format!(
            "✅ Correct! You earned {} XP for today's challenge!",
            reward
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::test_support::engine;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_no_active_challenge() {
        let engine = engine();
        let mut learner = LearnerState::new();
        assert!(engine.check_challenge_answer(&mut learner, "anything").is_none());
    }

    #[test]
    fn test_answer_flow() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let mut rng = StdRng::seed_from_u64(3);
        let msg = engine.present_challenge(&mut learner, today(), &mut rng);
        assert!(msg.starts_with("🧩 Today's Challenge:"));

        let challenge = learner.challenge.current.clone().unwrap();
        let wrong = engine.check_challenge_answer(&mut learner, "definitely wrong").unwrap();
        assert!(wrong.contains("Try again"));
        assert_eq!(learner.xp, 0);

        let answer = format!("  {}  ", challenge.answer.to_uppercase());
        let right = engine.check_challenge_answer(&mut learner, &answer).unwrap();
        assert!(right.contains(&format!("{} XP", challenge.reward_xp)));
        assert_eq!(learner.xp, challenge.reward_xp);
        assert!(learner.challenge.current.is_none());
        assert!(learner.pending_checks.contains(PendingCheck::Level));

        assert!(engine.check_challenge_answer(&mut learner, &answer).is_none());
        let again = engine.present_challenge(&mut learner, today(), &mut rng);
        assert_eq!(again, "You've already completed today's challenge!");
        assert_eq!(learner.xp, challenge.reward_xp);
    }

    #[test]
    fn test_new_day_new_challenge() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let mut rng = StdRng::seed_from_u64(11);
        engine.present_challenge(&mut learner, today(), &mut rng);
        let answer = learner.challenge.current.clone().unwrap().answer;
        engine.check_challenge_answer(&mut learner, &answer);

        let tomorrow = today().succ_opt().unwrap();
        let msg = engine.present_challenge(&mut learner, tomorrow, &mut rng);
        assert!(msg.starts_with("🧩"));
        assert!(!learner.challenge.completed);
        assert_eq!(learner.challenge.assigned_on, Some(tomorrow));
    }
}
