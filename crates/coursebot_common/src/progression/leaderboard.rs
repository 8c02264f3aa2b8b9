//! Joining, leaving and syncing the shared leaderboard.

use super::ProgressionEngine;
use crate::learner::LearnerState;
use crate::stores::{LeaderboardEntry, LeaderboardStore};
use tracing::{debug, info};

const JOIN_HINT: &str = "💪 Ready to join the leaderboard? Use: 'join leaderboard'\n\
                         Once you join, your XP and level will be displayed for others to see!";

/// Outcome of a join attempt, so callers can re-prompt on conflict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined(String),
    AlreadyJoined(String),
    NicknameTaken(String),
    InvalidNickname(String),
}

impl JoinOutcome {
    pub fn message(&self) -> &str {
        match self {
            JoinOutcome::Joined(m)
            | JoinOutcome::AlreadyJoined(m)
            | JoinOutcome::NicknameTaken(m)
            | JoinOutcome::InvalidNickname(m) => m,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            JoinOutcome::Joined(m)
            | JoinOutcome::AlreadyJoined(m)
            | JoinOutcome::NicknameTaken(m)
            | JoinOutcome::InvalidNickname(m) => m,
        }
    }
}

impl ProgressionEngine {
    fn snapshot(&self, learner: &LearnerState, nickname: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            learner_id: learner.id,
            nickname: nickname.to_string(),
            xp: learner.xp,
            level: learner.level(self.catalog().levels()).label(),
            streak: learner.streak.current,
        }
    }

    /// Put the learner on the board under a unique nickname.
    pub fn join_leaderboard<B: LeaderboardStore + ?Sized>(
        &self,
        learner: &mut LearnerState,
        board: &mut B,
        nickname: &str,
    ) -> JoinOutcome {
        if let Some(existing) = &learner.nickname {
            return JoinOutcome::AlreadyJoined(format!(
                "You are already on the leaderboard as '{}'.",
                existing
            ));
        }
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return JoinOutcome::InvalidNickname(
                "Please choose a nickname that isn't empty.".to_string(),
            );
        }
        if !board.insert_unique(self.snapshot(learner, nickname)) {
            debug!(nickname, "nickname conflict");
            return JoinOutcome::NicknameTaken(
                "Nickname is taken. Please choose another.".to_string(),
            );
        }
        learner.nickname = Some(nickname.to_string());
        info!(learner = %learner.id, nickname, "joined leaderboard");
        JoinOutcome::Joined(format!(
            "🙌 You have successfully joined the leaderboard as '{}'!",
            nickname
        ))
    }

    /// Refresh the learner's entry. No-op without a nickname.
    pub fn sync_leaderboard_entry<B: LeaderboardStore + ?Sized>(
        &self,
        learner: &LearnerState,
        board: &mut B,
    ) {
        if let Some(nickname) = &learner.nickname {
            board.upsert(self.snapshot(learner, nickname));
        }
    }

    pub fn leave_leaderboard<B: LeaderboardStore + ?Sized>(
        &self,
        learner: &mut LearnerState,
        board: &mut B,
    ) -> String {
        let Some(nickname) = learner.nickname.take() else {
            return format!("You are not on the leaderboard yet.\n{}", JOIN_HINT);
        };
        board.remove(learner.id);
        info!(learner = %learner.id, nickname = %nickname, "left leaderboard");
        format!(
            "You have been removed from the leaderboard. (Nickname was: {})",
            nickname
        )
    }
}

/// Hint shown when the learner is not on the board
pub fn join_hint() -> &'static str {
    JOIN_HINT
}
