//! Level tiers
//!
//! Ten hex-coded tiers from `0x1 [Initiate]` to `0xA [Legendary]`. A learner's
//! level is always derived from XP through this table; nothing stores it as
//! ground truth.

use crate::error::{CoursebotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in tier table: (code, title, xp needed)
pub const TEN_LEVELS: &[(&str, &str, u64)] = &[
    ("0x1", "Initiate", 0),
    ("0x2", "Explorer", 200),
    ("0x3", "Challenger", 500),
    ("0x4", "Vanguard", 1000),
    ("0x5", "Innovator", 1500),
    ("0x6", "Visionary", 2000),
    ("0x7", "Mastermind", 3000),
    ("0x8", "Renegade", 4500),
    ("0x9", "Ascendant", 6000),
    ("0xA", "Legendary", 8000),
];

/// One level tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTier {
    pub code: String,
    pub title: String,
    pub xp_needed: u64,
}

impl LevelTier {
    pub fn new(code: &str, title: &str, xp_needed: u64) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            xp_needed,
        }
    }

    /// Label shown to learners, e.g. `0x2 [Explorer]`
    pub fn label(&self) -> String {
        format!("{} [{}]", self.code, self.title)
    }
}

impl fmt::Display for LevelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.code, self.title)
    }
}

/// Ordered tier table with strictly increasing thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTable {
    tiers: Vec<LevelTier>,
}

impl LevelTable {
    /// Build a table, rejecting empty tables, a non-zero first threshold and
    /// thresholds that do not strictly increase.
    pub fn new(tiers: Vec<LevelTier>) -> Result<Self> {
        let first = tiers
            .first()
            .ok_or_else(|| CoursebotError::Catalog("level table is empty".to_string()))?;
        if first.xp_needed != 0 {
            return Err(CoursebotError::Catalog(format!(
                "first level tier '{}' must start at 0 XP, found {}",
                first.title, first.xp_needed
            )));
        }
        for pair in tiers.windows(2) {
            if pair[1].xp_needed <= pair[0].xp_needed {
                return Err(CoursebotError::Catalog(format!(
                    "level tier '{}' ({} XP) does not exceed '{}' ({} XP)",
                    pair[1].title, pair[1].xp_needed, pair[0].title, pair[0].xp_needed
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn builtin() -> Self {
        Self {
            tiers: TEN_LEVELS
                .iter()
                .map(|&(code, title, xp)| LevelTier::new(code, title, xp))
                .collect(),
        }
    }

    pub fn tiers(&self) -> &[LevelTier] {
        &self.tiers
    }

    /// Index of the highest tier whose threshold is <= xp. Falls back to the
    /// first tier when xp is below every threshold.
    pub fn resolve_index(&self, xp: u64) -> usize {
        self.tiers
            .iter()
            .rposition(|tier| xp >= tier.xp_needed)
            .unwrap_or(0)
    }

    /// Tier for the given XP
    pub fn resolve_level(&self, xp: u64) -> &LevelTier {
        &self.tiers[self.resolve_index(xp)]
    }

    /// Next tier above the one xp resolves to, `None` at the top
    pub fn next_tier(&self, xp: u64) -> Option<&LevelTier> {
        self.tiers.get(self.resolve_index(xp) + 1)
    }

    /// XP still needed for the next tier (0 at max level)
    pub fn xp_to_next(&self, xp: u64) -> u64 {
        self.next_tier(xp)
            .map(|next| next.xp_needed.saturating_sub(xp))
            .unwrap_or(0)
    }

    /// Progress through the current tier as a fraction (0.0 - 1.0)
    pub fn progress_to_next(&self, xp: u64) -> f64 {
        let current = self.resolve_level(xp);
        let Some(next) = self.next_tier(xp) else {
            return 1.0;
        };
        let range = next.xp_needed - current.xp_needed;
        let progress = xp.saturating_sub(current.xp_needed) as f64 / range as f64;
        progress.clamp(0.0, 1.0)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::builtin()
    }
}
