//! Per-learner state
//!
//! One `LearnerState` per chat session, created with zero-valued defaults and
//! mutated only by the progression engine. The serialisable record is the
//! natural unit if a host ever wants to persist a learner.

use crate::catalog::{name_key, DailyChallenge, LevelTable, LevelTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// Quest or path status as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressState {
    NotStarted,
    InProgress,
    Completed,
}

/// Quest progress; an absent entry means not started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestProgress {
    InProgress,
    Completed,
}

/// Learning path progress; an absent entry means not started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathProgress {
    InProgress {
        /// First chapter not yet completed, or the chapter count when all are
        current_chapter: usize,
        chapters_completed: BTreeSet<usize>,
    },
    Completed,
}

impl PathProgress {
    pub fn started() -> Self {
        PathProgress::InProgress {
            current_chapter: 0,
            chapters_completed: BTreeSet::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PathProgress::Completed)
    }

    /// Number of completed chapters (all of them once the path is done)
    pub fn chapters_done(&self, chapter_count: usize) -> usize {
        match self {
            PathProgress::InProgress {
                chapters_completed, ..
            } => chapters_completed.len(),
            PathProgress::Completed => chapter_count,
        }
    }
}

/// Consecutive-day activity streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
    pub last_active: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallengeState {
    /// Challenge awaiting an answer
    pub current: Option<DailyChallenge>,
    pub assigned_on: Option<NaiveDate>,
    pub completed: bool,
}

impl DailyChallengeState {
    pub fn completed_on(&self, today: NaiveDate) -> bool {
        self.completed && self.assigned_on == Some(today)
    }

    /// A challenge is waiting for an answer
    pub fn is_active(&self) -> bool {
        self.current.is_some() && !self.completed
    }
}

/// Multi-turn prompt awaiting the learner's next message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    CompleteCourse,
    StartQuest,
    StartLearningPath,
    JoinLeaderboard,
    RateCourse(String),
}

/// Deferred progression checks, processed in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PendingCheck {
    Quests,
    Badges,
    Level,
    Chapters,
    Paths,
}

impl PendingCheck {
    pub const ALL: [PendingCheck; 5] = [
        PendingCheck::Quests,
        PendingCheck::Badges,
        PendingCheck::Level,
        PendingCheck::Chapters,
        PendingCheck::Paths,
    ];
}

/// Ordered set of checks that must run before the turn settles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChecks(BTreeSet<PendingCheck>);

impl PendingChecks {
    pub fn enqueue(&mut self, check: PendingCheck) {
        self.0.insert(check);
    }

    pub fn enqueue_all(&mut self) {
        self.0.extend(PendingCheck::ALL);
    }

    pub fn contains(&self, check: PendingCheck) -> bool {
        self.0.contains(&check)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove and return every pending check in processing order
    pub fn drain(&mut self) -> Vec<PendingCheck> {
        std::mem::take(&mut self.0).into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerState {
    pub id: Uuid,
    pub nickname: Option<String>,
    pub xp: u64,
    /// Tier index last congratulated; used only to detect level-ups
    pub announced_level: usize,
    /// Earned badges in award order
    pub badges: Vec<String>,
    /// Completed courses in catalog casing, completion order
    pub completed_courses: Vec<String>,
    /// Keyed by canonical quest name
    pub quests: HashMap<String, QuestProgress>,
    /// Keyed by canonical path name
    pub paths: HashMap<String, PathProgress>,
    pub streak: Streak,
    pub challenge: DailyChallengeState,
    pub pending_action: Option<PendingAction>,
    pub pending_checks: PendingChecks,
}

impl Default for LearnerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LearnerState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: None,
            xp: 0,
            announced_level: 0,
            badges: Vec::new(),
            completed_courses: Vec::new(),
            quests: HashMap::new(),
            paths: HashMap::new(),
            streak: Streak::default(),
            challenge: DailyChallengeState::default(),
            pending_action: None,
            pending_checks: PendingChecks::default(),
        }
    }

    pub fn grant_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// Current level, always derived from XP
    pub fn level<'a>(&self, levels: &'a LevelTable) -> &'a LevelTier {
        levels.resolve_level(self.xp)
    }

    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Append a badge once. Returns false if it was already held.
    pub fn award_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.to_string());
        true
    }

    pub fn has_completed(&self, course: &str) -> bool {
        let key = name_key(course);
        self.completed_courses.iter().any(|c| name_key(c) == key)
    }

    /// True when every listed course is completed
    pub fn has_completed_all<S: AsRef<str>>(&self, courses: &[S]) -> bool {
        courses.iter().all(|c| self.has_completed(c.as_ref()))
    }

    /// Listed courses not yet completed, in list order
    pub fn remaining<'a, S: AsRef<str>>(&self, courses: &'a [S]) -> Vec<&'a str> {
        courses
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| !self.has_completed(c))
            .collect()
    }

    pub fn quest_state(&self, quest: &str) -> ProgressState {
        match self.quests.get(quest) {
            None => ProgressState::NotStarted,
            Some(QuestProgress::InProgress) => ProgressState::InProgress,
            Some(QuestProgress::Completed) => ProgressState::Completed,
        }
    }

    pub fn path_state(&self, path: &str) -> ProgressState {
        match self.paths.get(path) {
            None => ProgressState::NotStarted,
            Some(PathProgress::InProgress { .. }) => ProgressState::InProgress,
            Some(PathProgress::Completed) => ProgressState::Completed,
        }
    }

    /// Quest names in progress, sorted for stable output
    pub fn active_quests(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .quests
            .iter()
            .filter(|(_, p)| **p == QuestProgress::InProgress)
            .map(|(n, _)| n.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn active_paths(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .paths
            .iter()
            .filter(|(_, p)| !p.is_completed())
            .map(|(n, _)| n.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn completed_quest_count(&self) -> usize {
        self.quests
            .values()
            .filter(|p| **p == QuestProgress::Completed)
            .count()
    }

    pub fn completed_path_count(&self) -> usize {
        self.paths.values().filter(|p| p.is_completed()).count()
    }
}
