//! Coursebot configuration
//!
//! Optional TOML file with reward amounts, leaderboard size, demo rating
//! seeding and typing reveal pacing. Every field has a default, so an absent
//! file (or an empty one) yields the stock behaviour.
//!
//! Lookup order:
//! 1. `--config <path>` (must exist)
//! 2. `$COURSEBOT_CONFIG` (must exist)
//! 3. `<config dir>/coursebot/config.toml` (`~/.config` on Linux)

use crate::error::{CoursebotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "COURSEBOT_CONFIG";
const CONFIG_DIR: &str = "coursebot";
const CONFIG_FILE: &str = "config.toml";

/// XP amounts for the fixed rewards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSettings {
    #[serde(default = "default_course_completion_xp")]
    pub course_completion_xp: u64,

    #[serde(default = "default_chapter_completion_xp")]
    pub chapter_completion_xp: u64,

    /// XP for rating a completed course
    #[serde(default = "default_feedback_xp")]
    pub feedback_xp: u64,
}

fn default_course_completion_xp() -> u64 {
    50
}

fn default_chapter_completion_xp() -> u64 {
    50
}

fn default_feedback_xp() -> u64 {
    10
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            course_completion_xp: default_course_completion_xp(),
            chapter_completion_xp: default_chapter_completion_xp(),
            feedback_xp: default_feedback_xp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    /// Rows shown in the leaderboard table (valid: 1-50)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    5
}

impl LeaderboardSettings {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.clamp(1, 50)
    }
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Fill the rating store with plausible demo ratings at startup
    #[serde(default = "default_seed_demo_ratings")]
    pub seed_demo_ratings: bool,

    /// Fixed RNG seed for reproducible sessions (entropy when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

fn default_seed_demo_ratings() -> bool {
    true
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            seed_demo_ratings: default_seed_demo_ratings(),
            rng_seed: None,
        }
    }
}

/// Pacing of the incremental reply reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSettings {
    #[serde(default = "default_typing_enabled")]
    pub enabled: bool,

    /// Words revealed per step (valid: 1-50)
    #[serde(default = "default_chunk_words")]
    pub chunk_words: usize,

    #[serde(default = "default_chunk_delay_ms")]
    pub chunk_delay_ms: u64,

    /// Pause before the first chunk
    #[serde(default = "default_pre_delay_ms")]
    pub pre_delay_ms: u64,
}

fn default_typing_enabled() -> bool {
    true
}

fn default_chunk_words() -> usize {
    3
}

fn default_chunk_delay_ms() -> u64 {
    150
}

fn default_pre_delay_ms() -> u64 {
    750
}

impl TypingSettings {
    pub fn effective_chunk_words(&self) -> usize {
        self.chunk_words.clamp(1, 50)
    }
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            enabled: default_typing_enabled(),
            chunk_words: default_chunk_words(),
            chunk_delay_ms: default_chunk_delay_ms(),
            pre_delay_ms: default_pre_delay_ms(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursebotConfig {
    #[serde(default)]
    pub rewards: RewardSettings,

    #[serde(default)]
    pub leaderboard: LeaderboardSettings,

    #[serde(default)]
    pub ratings: RatingSettings,

    #[serde(default)]
    pub typing: TypingSettings,
}

impl CoursebotConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a specific file; a missing file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoursebotError::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| CoursebotError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load using the lookup order. `explicit` is the `--config` flag.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = env_path(CONFIG_ENV) {
            return Self::load_from(&path);
        }
        if let Some(candidate) = default_config_path().filter(|p| p.exists()) {
            return Self::load_from(&candidate);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CoursebotError::ConfigValue {
            key: "config",
            reason: e.to_string(),
        })
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Per-user config file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
