//! Help texts and the welcome banner

use crate::intent_router::HelpTopic;

/// Command list for one feature
pub fn help_topic(topic: HelpTopic) -> &'static str {
    match topic {
        HelpTopic::Courses => {
            "### Course Commands:\n\
             - 'show courses' - List all available courses\n\
             - 'show trending courses' - List some trending courses\n\
             - 'completed course [name]' - Mark a course as completed\n\
             - 'course rating [name]' - See how other learners rated a course"
        }
        HelpTopic::LearningPaths => {
            "### Learning Paths Commands:\n\
             - 'list learning paths' - See all available paths\n\
             - 'start learning path [name]' - Begin a learning path\n\
             - 'show learning path progress' - Check your current progress\n\
             - 'show learning path details' - View detailed curriculum\n\
             - 'check chapter completion' - Update chapter progress"
        }
        HelpTopic::Quests => {
            "### Quest Commands:\n\
             - 'show quests' - List all available quests\n\
             - 'show quest details' - View detailed info of each quest\n\
             - 'start quest [name]' - Begin a new quest\n\
             - 'show quest progress' - Check your current quest progress"
        }
        HelpTopic::Challenges => {
            "### Daily Challenge Commands:\n\
             - 'daily challenge' - Get today's challenge\n\
             - Simply type your answer to respond to a challenge"
        }
        HelpTopic::Progress => {
            "### Progress Tracking Commands:\n\
             - 'show xp' - View your current experience points\n\
             - 'show level' - Check your current level\n\
             - 'show badges' - See all earned badges\n\
             - 'show profile' - Displays all user profile information."
        }
        HelpTopic::Leaderboard => {
            "### Leaderboard Commands:\n\
             - 'show leaderboard' - View top performers\n\
             - 'join leaderboard [nickname]' - Add yourself to rankings\n\
             - 'leave leaderboard' - Remove yourself from rankings"
        }
    }
}

/// Every feature's commands in one guide
pub fn help_all() -> String {
    let mut parts = vec![
        "# Coursebot - Command Guide".to_string(),
        "Here's a comprehensive list of all available commands organized by feature:".to_string(),
    ];
    for topic in HelpTopic::ALL {
        parts.push(format!("\n## {}\n{}", topic.title(), help_topic(topic)));
        parts.push("\n---".to_string());
    }
    parts.push("### 💡 Tips".to_string());
    parts.push("- Commands are case-insensitive".to_string());
    parts.push("- Daily challenges refresh every day for bonus XP".to_string());
    parts.push("- For personalized recommendations, just chat about your interests!".to_string());
    parts.join("\n")
}

pub fn welcome() -> &'static str {
    "👋 Welcome to Coursebot - start your personalized learning journey now!\n\n\
     Available Features:\n\
     - 📚 Courses - Gain knowledge from different fields\n\
     - 🛣️ Learning Paths - Structured educational journeys\n\
     - 🎯 Quests - Complete tasks to earn rewards\n\
     - 🧩 Daily Challenges - Test your knowledge daily\n\
     - 📈 Progress Tracking - Monitor your advancement\n\
     - 🏆 Leaderboard - Compare with other learners\n\n\
     💡 Tips:\n\
     Type 'help all' to see all commands for every feature\n\
     Type 'help [feature]' to learn more about any feature (e.g., 'help quests')"
}

/// Reply to a help request; no topic means the general overview
pub fn help(topic: Option<HelpTopic>) -> String {
    match topic {
        Some(topic) => help_topic(topic).to_string(),
        None => welcome().to_string(),
    }
}
