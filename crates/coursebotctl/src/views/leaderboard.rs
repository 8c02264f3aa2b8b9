//! Leaderboard table

use coursebot_common::progression::leaderboard::join_hint;
use coursebot_common::{LearnerState, LeaderboardStore};

/// Top `top_n` entries by XP, plus the viewer's own rank when they are on
/// the board.
pub fn leaderboard_table<B: LeaderboardStore + ?Sized>(
    board: &B,
    viewer: &LearnerState,
    top_n: usize,
) -> String {
    let ranked = board.ranked();
    if ranked.is_empty() {
        return format!(
            "The leaderboard is currently empty! Be the first to add your name and start the competition.\n\n{}",
            join_hint()
        );
    }

    let mut lines = vec![
        "## 🏆 Leaderboard 🏆".to_string(),
        "Top performers in our learning community:".to_string(),
        String::new(),
        format!(
            "{:>4}  {:<20} {:>7}  {:<18} {:>6}",
            "#", "Name", "XP", "Level", "Streak"
        ),
    ];
    for (idx, entry) in ranked.iter().take(top_n).enumerate() {
        lines.push(format!(
            "{:>4}  {:<20} {:>7}  {:<18} {:>6}",
            idx + 1,
            entry.nickname,
            entry.xp,
            entry.level,
            entry.streak
        ));
    }
    lines.push(String::new());

    let own = viewer
        .nickname
        .as_ref()
        .and_then(|_| ranked.iter().position(|e| e.learner_id == viewer.id));
    match own {
        Some(pos) => {
            lines.push(format!("Your current rank: {} of {}", pos + 1, ranked.len()));
            if pos >= top_n {
                let entry = &ranked[pos];
                lines.push(format!(
                    "Your stats: {} - {} XP (Level: {})",
                    entry.nickname, entry.xp, entry.level
                ));
            }
        }
        None => lines.push("🤩 Want to see your name here? Use: 'join leaderboard'".to_string()),
    }
    lines.join("\n")
}
