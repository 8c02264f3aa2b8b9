//! Error types for Coursebot.
//!
//! Progression operations never fail with these: learner-facing problems are
//! reported as chat messages. Only configuration loading and catalog
//! validation surface a `CoursebotError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoursebotError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    ConfigValue { key: &'static str, reason: String },

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl CoursebotError {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            CoursebotError::ConfigNotFound(_) => 66,
            CoursebotError::ConfigRead { .. } => 74,
            CoursebotError::ConfigParse(_) | CoursebotError::ConfigValue { .. } => 78,
            CoursebotError::Catalog(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoursebotError>;
