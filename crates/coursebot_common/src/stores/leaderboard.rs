//! Leaderboard store
//!
//! Opt-in public list of learner summaries, shared by every session in the
//! process. Entries keep insertion order; `ranked()` sorts by XP descending
//! with ties left in insertion order.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

/// Snapshot of one learner on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub learner_id: Uuid,
    pub nickname: String,
    pub xp: u64,
    /// Level label at the last sync
    pub level: String,
    pub streak: u32,
}

/// Nickname comparison key (trimmed, case-folded)
pub fn nickname_key(nickname: &str) -> String {
    nickname.trim().to_lowercase()
}

pub trait LeaderboardStore {
    /// All entries in insertion order
    fn entries(&self) -> Vec<LeaderboardEntry>;

    fn find(&self, learner_id: Uuid) -> Option<LeaderboardEntry>;

    /// Nickname held by an entry belonging to someone else
    fn nickname_taken_by_other(&self, nickname: &str, learner_id: Uuid) -> bool;

    /// Insert, or overwrite the entry with the same learner id in place
    fn upsert(&mut self, entry: LeaderboardEntry);

    /// Insert only if no other learner holds the nickname, atomically.
    /// Returns false on conflict without touching the board.
    fn insert_unique(&mut self, entry: LeaderboardEntry) -> bool {
        if self.nickname_taken_by_other(&entry.nickname, entry.learner_id) {
            return false;
        }
        self.upsert(entry);
        true
    }

    fn remove(&mut self, learner_id: Uuid) -> Option<LeaderboardEntry>;

    /// Entries sorted by XP descending (stable)
    fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.xp.cmp(&a.xp));
        entries
    }

    /// 1-based rank of a learner, if on the board
    fn rank_of(&self, learner_id: Uuid) -> Option<usize> {
        self.ranked()
            .iter()
            .position(|e| e.learner_id == learner_id)
            .map(|idx| idx + 1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LeaderboardStore for InMemoryLeaderboard {
    fn entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }

    fn find(&self, learner_id: Uuid) -> Option<LeaderboardEntry> {
        self.entries
            .iter()
            .find(|e| e.learner_id == learner_id)
            .cloned()
    }

    fn nickname_taken_by_other(&self, nickname: &str, learner_id: Uuid) -> bool {
        let key = nickname_key(nickname);
        self.entries
            .iter()
            .any(|e| e.learner_id != learner_id && nickname_key(&e.nickname) == key)
    }

    fn upsert(&mut self, entry: LeaderboardEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.learner_id == entry.learner_id)
        {
            Some(existing) => *existing = entry,
            None => {
                debug!(nickname = %entry.nickname, "leaderboard entry created");
                self.entries.push(entry);
            }
        }
    }

    fn remove(&mut self, learner_id: Uuid) -> Option<LeaderboardEntry> {
        let idx = self.entries.iter().position(|e| e.learner_id == learner_id)?;
        Some(self.entries.remove(idx))
    }
}

/// Cloneable handle serialising access to one board across sessions
#[derive(Debug, Clone, Default)]
pub struct SharedLeaderboard {
    inner: Arc<Mutex<InMemoryLeaderboard>>,
}

impl SharedLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryLeaderboard> {
        // A panic elsewhere cannot leave the Vec half-written; keep going
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LeaderboardStore for SharedLeaderboard {
    fn entries(&self) -> Vec<LeaderboardEntry> {
        self.lock().entries()
    }

    fn find(&self, learner_id: Uuid) -> Option<LeaderboardEntry> {
        self.lock().find(learner_id)
    }

    fn nickname_taken_by_other(&self, nickname: &str, learner_id: Uuid) -> bool {
        self.lock().nickname_taken_by_other(nickname, learner_id)
    }

    fn upsert(&mut self, entry: LeaderboardEntry) {
        self.lock().upsert(entry)
    }

    fn insert_unique(&mut self, entry: LeaderboardEntry) -> bool {
        self.lock().insert_unique(entry)
    }

    fn remove(&mut self, learner_id: Uuid) -> Option<LeaderboardEntry> {
        self.lock().remove(learner_id)
    }

    fn ranked(&self) -> Vec<LeaderboardEntry> {
        self.lock().ranked()
    }
}
