//! Level-up detection

use super::ProgressionEngine;
use crate::learner::LearnerState;
use tracing::info;

impl ProgressionEngine {
    /// Congratulate once when XP has crossed into a new tier.
    ///
    /// Only the first call after an XP change can return a message; repeated
    /// calls in the same turn are silent.
    pub fn apply_level_up(&self, learner: &mut LearnerState) -> Option<String> {
        let levels = self.catalog().levels();
        let idx = levels.resolve_index(learner.xp);
        if idx == learner.announced_level {
            return None;
        }
        learner.announced_level = idx;
        let label = levels.resolve_level(learner.xp).label();
        info!(learner = %learner.id, level = %label, "level up");
        Some(format!("👏 Congratulations! You've advanced to {}! 🚀", label))
    }
}
