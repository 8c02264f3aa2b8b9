//! Profile overview and level table

use super::{percent, progress_bar};
use coursebot_common::{Catalog, LearnerState, LeaderboardStore, LevelTable};

const BADGES_PER_ROW: usize = 5;

pub fn profile<B: LeaderboardStore + ?Sized>(
    catalog: &Catalog,
    learner: &LearnerState,
    board: &B,
) -> String {
    let levels = catalog.levels();
    let mut lines = vec![
        "# Your Profile Overview".to_string(),
        String::new(),
        "## 📊 Level & Experience".to_string(),
        format!("Current Level: {}", learner.level(levels).label()),
        format!("Total XP: {} XP", learner.xp),
    ];
    match levels.next_tier(learner.xp) {
        Some(next) => {
            let pct = levels.progress_to_next(learner.xp) * 100.0;
            lines.push(format!("Progress to {}: {:.1}%", next.label(), pct));
            lines.push(progress_bar(pct));
            lines.push(format!(
                "XP needed for next level: {} XP",
                levels.xp_to_next(learner.xp)
            ));
        }
        None => lines.push("Status: Maximum level achieved! 🏆".to_string()),
    }

    lines.push(String::new());
    lines.push("## 🔥 Activity Streak".to_string());
    lines.push(format!("Current Streak: {} days", learner.streak.current));
    lines.push(format!("Longest Streak: {} days", learner.streak.longest));

    lines.push(String::new());
    lines.push("## 🎖️ Earned Badges".to_string());
    if learner.badges.is_empty() {
        lines.push(
            "You haven't earned any badges yet. Complete courses and quests to earn badges!"
                .to_string(),
        );
    } else {
        lines.extend(
            learner
                .badges
                .chunks(BADGES_PER_ROW)
                .map(|row| format!("• {}", row.join(" • "))),
        );
    }

    let total = catalog.courses().len();
    let done = learner.completed_courses.len();
    let completed_quests = learner.completed_quest_count();
    let completed_paths = learner.completed_path_count();
    lines.push(String::new());
    lines.push("## 📈 Learning Progress".to_string());
    lines.push(format!(
        "Completed Courses: {}/{} ({:.1}%)",
        done,
        total,
        percent(done, total)
    ));
    lines.push(format!("Active Quests: {}", learner.quests.len() - completed_quests));
    lines.push(format!("Completed Quests: {}", completed_quests));
    lines.push(format!("Active Learning Paths: {}", learner.paths.len() - completed_paths));
    lines.push(format!("Completed Learning Paths: {}", completed_paths));

    if let Some(nickname) = &learner.nickname {
        if let Some(rank) = board.rank_of(learner.id) {
            lines.push(String::new());
            lines.push("## 🏆 Leaderboard Status".to_string());
            lines.push(format!("Nickname: {}", nickname));
            lines.push(format!("Rank: {} of {}", rank, board.entries().len()));
        }
    }

    lines.push(String::new());
    lines.push(
        "💡 Tip: Continue completing courses, quests, and daily challenges to earn XP and level up!"
            .to_string(),
    );
    lines.join("\n")
}

/// Every tier with its threshold
pub fn level_table(levels: &LevelTable) -> String {
    let mut lines = vec![format!("{:<18} {:>8}", "Level", "XP")];
    lines.extend(
        levels
            .tiers()
            .iter()
            .map(|tier| format!("{:<18} {:>8}", tier.label(), tier.xp_needed)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebot_common::learner::QuestProgress;
    use coursebot_common::stores::LeaderboardEntry;
    use coursebot_common::InMemoryLeaderboard;

    #[test]
    fn test_profile_new_learner() {
        let catalog = Catalog::builtin().unwrap();
        let board = InMemoryLeaderboard::new();
        let learner = LearnerState::new();
        let out = profile(&catalog, &learner, &board);
        assert!(out.contains("Current Level: 0x1 [Initiate]"));
        assert!(out.contains("Progress to 0x2 [Explorer]: 0.0%"));
        assert!(out.contains("XP needed for next level: 200 XP"));
        assert!(out.contains("Completed Courses: 0/59 (0.0%)"));
        assert!(!out.contains("Leaderboard Status"));
    }

    #[test]
    fn test_profile_counts_and_rank() {
        let catalog = Catalog::builtin().unwrap();
        let mut board = InMemoryLeaderboard::new();
        let mut learner = LearnerState::new();
        learner.xp = 8000;
        learner.nickname = Some("ada".to_string());
        learner.badges = (0..7).map(|i| format!("B{}", i)).collect();
        learner.quests.insert("Data Science Starter".to_string(), QuestProgress::Completed);
        learner.quests.insert("Web Developer Starter".to_string(), QuestProgress::InProgress);
        board.upsert(LeaderboardEntry {
            learner_id: learner.id,
            nickname: "ada".to_string(),
            xp: 8000,
            level: "0xA [Legendary]".to_string(),
            streak: 0,
        });

        let out = profile(&catalog, &learner, &board);
        assert!(out.contains("Status: Maximum level achieved! 🏆"));
        assert!(out.contains("• B0 • B1 • B2 • B3 • B4\n• B5 • B6"));
        assert!(out.contains("Active Quests: 1"));
        assert!(out.contains("Completed Quests: 1"));
        assert!(out.contains("Rank: 1 of 1"));
    }

    #[test]
    fn test_level_table() {
        let out = level_table(&LevelTable::builtin());
        assert_eq!(out.lines().count(), 11);
        assert!(out.contains("0xA [Legendary]"));
    }
}
