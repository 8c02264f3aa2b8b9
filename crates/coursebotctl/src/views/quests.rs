//! Quest overview, details and progress

use super::{percent, progress_bar, LIST_LIMIT};
use coursebot_common::catalog::{clean_name, Quest};
use coursebot_common::{Catalog, LearnerState, ProgressState};

fn status_text(state: ProgressState) -> &'static str {
    match state {
        ProgressState::NotStarted => "Not Started",
        ProgressState::InProgress => "⏳ In Progress",
        ProgressState::Completed => "✅ Completed",
    }
}

fn done_count(learner: &LearnerState, quest: &Quest) -> usize {
    quest
        .required_courses
        .iter()
        .filter(|c| learner.has_completed(c))
        .count()
}

/// Available, in-progress and completed quests in three sections
pub fn list_quests(catalog: &Catalog, learner: &LearnerState) -> String {
    let mut available = Vec::new();
    let mut in_progress = Vec::new();
    let mut completed = Vec::new();
    for quest in catalog.quests() {
        match learner.quest_state(&quest.name) {
            ProgressState::NotStarted => available.push(quest.name.as_str()),
            ProgressState::InProgress => in_progress.push(quest.name.as_str()),
            ProgressState::Completed => completed.push(quest.name.as_str()),
        }
    }
    if available.is_empty() && in_progress.is_empty() && completed.is_empty() {
        return "❌ There are currently no quests available.".to_string();
    }

    let mut lines = Vec::new();
    if let Some(first) = available.first() {
        lines.push("## Available Quests".to_string());
        lines.push("💪 Here are all the available quests:".to_string());
        lines.push(String::new());
        lines.extend(
            available
                .iter()
                .take(LIST_LIMIT)
                .map(|q| format!("- {} - Not Started", q)),
        );
        if available.len() > LIST_LIMIT {
            lines.push(format!(
                "...and {} more quests. Use 'show quest details' to see all.",
                available.len() - LIST_LIMIT
            ));
        }
        lines.push(String::new());
        lines.push("### 💡 Want to find out more about each quest?".to_string());
        lines.push("Use: 'show quest details'".to_string());
        lines.push(String::new());
        lines.push("### ⚔️ Ready to start a quest?".to_string());
        lines.push("Use: 'start quest <Quest Name>'".to_string());
        lines.push(format!("For example: 'start quest {}'", first));
    }

    if !in_progress.is_empty() {
        if !lines.is_empty() {
            lines.push("\n---\n".to_string());
        }
        lines.push("## Current Progress".to_string());
        lines.push("⏳ Here's your current progress so far:".to_string());
        lines.push(String::new());
        lines.extend(in_progress.iter().map(|q| format!("- {} - In Progress", q)));
        lines.push(String::new());
        lines.push("### 🔍 Want to see detailed quest progress?".to_string());
        lines.push("Use: 'show quest progress'".to_string());
    }

    if !completed.is_empty() {
        if !lines.is_empty() {
            lines.push("\n---\n".to_string());
        }
        lines.push("## Completed Progress".to_string());
        lines.push("🥳 Here are your completed quests:".to_string());
        lines.push(String::new());
        lines.extend(completed.iter().map(|q| format!("- ✅ {} - Completed", q)));
    }

    lines.join("\n")
}

/// Details of one quest, or a summary of every quest when `quest_name` is
/// `None`.
pub fn quest_details(
    catalog: &Catalog,
    learner: &LearnerState,
    quest_name: Option<&str>,
) -> String {
    let Some(raw) = quest_name else {
        return all_quest_details(catalog, learner);
    };
    let Some(quest) = catalog.find_quest(raw) else {
        return format!(
            "❌ No quest named '{}' found. Use 'show quests' to see available quests.",
            clean_name(raw)
        );
    };

    let state = learner.quest_state(&quest.name);
    let done = done_count(learner, quest);
    let total = quest.required_courses.len();
    let pct = percent(done, total);

    let mut lines = vec![
        format!("# {} - Quest Details", quest.name),
        String::new(),
        format!("Status: {}", status_text(state)),
    ];
    if state != ProgressState::NotStarted {
        lines.push(format!(
            "Progress: {}/{} courses completed ({:.1}%)",
            done, total, pct
        ));
        lines.push(progress_bar(pct));
    }
    lines.push(String::new());
    lines.push(format!("Reward XP: {} XP", quest.reward_xp));
    lines.push(format!("Reward Badge: {}", quest.reward_badge));
    lines.push(String::new());
    lines.push("## Required Courses".to_string());
    lines.push(String::new());
    for course in &quest.required_courses {
        let icon = if learner.has_completed(course) { "✅" } else { "⏳" };
        lines.push(format!("- {} {} ({})", icon, course, catalog.course_link(course)));
    }

    match state {
        ProgressState::NotStarted => {
            lines.push(String::new());
            lines.push("## 🚀 Ready to begin?".to_string());
            lines.push(format!("Use the command: 'start quest {}'", quest.name));
        }
        ProgressState::InProgress => {
            if done < total {
                lines.push(String::new());
                lines.push("## ⏩ Continue your progress!".to_string());
                lines.push("Complete the remaining courses to finish this quest.".to_string());
            }
        }
        ProgressState::Completed => {
            lines.push(String::new());
            lines.push("## 🎉 Quest Completed!".to_string());
            lines.push("You've already completed this quest and earned the rewards.".to_string());
            lines.push("Use 'show quests' to find more quests to complete.".to_string());
        }
    }
    lines.join("\n")
}

fn all_quest_details(catalog: &Catalog, learner: &LearnerState) -> String {
    let mut lines = vec!["## Quest Details".to_string(), String::new()];
    for quest in catalog.quests() {
        let state = learner.quest_state(&quest.name);
        lines.push(format!("### {} ({})", quest.name, status_text(state)));
        lines.push(String::new());
        lines.push("Required Courses:".to_string());
        for course in &quest.required_courses {
            let icon = if learner.has_completed(course) { "✅ " } else { "" };
            lines.push(format!("- {}{} ({})", icon, course, catalog.course_link(course)));
        }
        lines.push(String::new());
        lines.push(format!("Reward XP: {} XP", quest.reward_xp));
        lines.push(format!("Reward Badge: {}", quest.reward_badge));
        lines.push(match state {
            ProgressState::NotStarted => {
                format!("Note: Use 'start quest {}' to start this quest", quest.name)
            }
            ProgressState::InProgress => {
                "Note: Use 'show quest progress' to track your current progress".to_string()
            }
            ProgressState::Completed => {
                "Note: Use 'show quests' to see all available quests".to_string()
            }
        });
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Progress bars and course checklists for every in-progress quest
pub fn quest_progress(catalog: &Catalog, learner: &LearnerState) -> String {
    if learner.quests.is_empty() {
        return "❌ You haven't started any quests yet.\nType 'show quests' to see available quests."
            .to_string();
    }
    let active: Vec<&Quest> = catalog
        .quests()
        .iter()
        .filter(|q| learner.quest_state(&q.name) == ProgressState::InProgress)
        .collect();
    if active.is_empty() {
        return "❌ You have no quests in progress. All your started quests are completed.\n\
                Type 'show quests' to see available quests."
            .to_string();
    }

    let mut lines = vec!["## 📈 Your Quest Progress".to_string()];
    for quest in active {
        let (done, remaining): (Vec<&String>, Vec<&String>) = quest
            .required_courses
            .iter()
            .partition(|c| learner.has_completed(c));
        let total = quest.required_courses.len();
        let pct = percent(done.len(), total);

        lines.push(format!("### {}", quest.name));
        lines.push(format!(
            "Progress: {}/{} courses completed ({:.1}%)",
            done.len(),
            total,
            pct
        ));
        lines.push(progress_bar(pct));
        lines.push(String::new());
        lines.push("Rewards upon completion:".to_string());
        lines.push(format!("- {} XP", quest.reward_xp));
        lines.push(format!("- {}", quest.reward_badge));
        if !done.is_empty() {
            lines.push(String::new());
            lines.push("Completed Courses:".to_string());
            lines.extend(
                done.iter()
                    .map(|c| format!("- ✅ {} ({})", c, catalog.course_link(c))),
            );
        }
        if !remaining.is_empty() {
            lines.push(String::new());
            lines.push("Courses Remaining:".to_string());
            lines.extend(
                remaining
                    .iter()
                    .map(|c| format!("- ⏳ {} ({})", c, catalog.course_link(c))),
            );
        }
        lines.push("\n---\n".to_string());
    }
    lines.push(
        "💰 Complete the remaining courses to finish your quests and earn rewards!".to_string(),
    );
    lines.join("\n")
}

fn bullets(names: &[&str]) -> Vec<String> {
    names.iter().take(LIST_LIMIT).map(|n| format!("- {}", n)).collect()
}

/// Prompt for the quest name when "start quest" came without one
pub fn missing_quest_prompt(catalog: &Catalog, learner: &LearnerState) -> String {
    let mut available = Vec::new();
    let mut in_progress = Vec::new();
    for quest in catalog.quests() {
        match learner.quest_state(&quest.name) {
            ProgressState::NotStarted => available.push(quest.name.as_str()),
            ProgressState::InProgress => in_progress.push(quest.name.as_str()),
            ProgressState::Completed => {}
        }
    }

    if !available.is_empty() {
        let mut lines = vec![
            "It seems like you forgot to include the quest name, no worries! Here are some quests you can start:"
                .to_string(),
            String::new(),
        ];
        lines.extend(bullets(&available));
        if available.len() > LIST_LIMIT {
            lines.push(format!(
                "...and {} more quests. Use 'show quests' to see all.",
                available.len() - LIST_LIMIT
            ));
        }
        lines.push(String::new());
        lines.push("Just type the quest name you'd like to begin!".to_string());
        return lines.join("\n");
    }
    if !in_progress.is_empty() {
        let mut lines = vec![
            "You don't have any new quests available at the moment, but here are some quests you're currently working on:"
                .to_string(),
            String::new(),
        ];
        lines.extend(bullets(&in_progress));
        if in_progress.len() > LIST_LIMIT {
            lines.push(format!(
                "...and {} more quests in progress. Use 'show quest progress' to see all.",
                in_progress.len() - LIST_LIMIT
            ));
        }
        lines.push(String::new());
        lines.push(
            "Would you like to continue with any of these? Just type the quest name!".to_string(),
        );
        return lines.join("\n");
    }
    "It looks like you've completed all available quests! Check back later for new quests, \
     or type 'list quests' to see all your completed quests."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebot_common::learner::QuestProgress;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_list_quests_sections() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        let out = list_quests(&catalog, &learner);
        assert!(out.contains("- Data Science Starter - Not Started"));
        assert!(out.contains("...and 5 more quests."));
        assert!(out.contains("For example: 'start quest Data Science Starter'"));
        assert!(!out.contains("## Current Progress"));

        learner
            .quests
            .insert("Data Science Starter".to_string(), QuestProgress::InProgress);
        learner
            .quests
            .insert("Web Developer Starter".to_string(), QuestProgress::Completed);
        let out = list_quests(&catalog, &learner);
        assert!(out.contains("- Data Science Starter - In Progress"));
        assert!(out.contains("- ✅ Web Developer Starter - Completed"));
        assert!(out.contains("For example: 'start quest Cybersecurity Beginner'"));
    }

    #[test]
    fn test_quest_details_single() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        learner
            .quests
            .insert("Data Science Starter".to_string(), QuestProgress::InProgress);
        learner.completed_courses.push("Python for Everybody".to_string());

        let out = quest_details(&catalog, &learner, Some("data science starter"));
        assert!(out.starts_with("# Data Science Starter - Quest Details"));
        assert!(out.contains("Status: ⏳ In Progress"));
        assert!(out.contains("Progress: 1/2 courses completed (50.0%)"));
        assert!(out.contains("- ✅ Python for Everybody"));
        assert!(out.contains("- ⏳ Intro to Data Science"));
        assert!(out.contains("## ⏩ Continue your progress!"));
    }

    #[test]
    fn test_quest_details_unknown_and_all() {
        let catalog = catalog();
        let learner = LearnerState::new();
        assert!(quest_details(&catalog, &learner, Some("Moon Landing"))
            .starts_with("❌ No quest named 'Moon Landing' found."));
        let all = quest_details(&catalog, &learner, None);
        assert_eq!(all.matches("### ").count(), catalog.quests().len());
    }

    #[test]
    fn test_quest_progress_states() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        assert!(quest_progress(&catalog, &learner)
            .starts_with("❌ You haven't started any quests yet."));

        learner
            .quests
            .insert("Data Science Starter".to_string(), QuestProgress::Completed);
        assert!(quest_progress(&catalog, &learner)
            .starts_with("❌ You have no quests in progress."));

        learner
            .quests
            .insert("Web Developer Starter".to_string(), QuestProgress::InProgress);
        learner.completed_courses.push("Introduction to HTML".to_string());
        let out = quest_progress(&catalog, &learner);
        assert!(out.contains("### Web Developer Starter"));
        assert!(out.contains("Courses Remaining:"));
        assert!(!out.contains("### Data Science Starter"));
    }

    #[test]
    fn test_missing_quest_prompt_variants() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        assert!(missing_quest_prompt(&catalog, &learner).starts_with("It seems like you forgot"));

        for quest in catalog.quests() {
            learner.quests.insert(quest.name.clone(), QuestProgress::InProgress);
        }
        assert!(missing_quest_prompt(&catalog, &learner)
            .starts_with("You don't have any new quests"));

        for quest in catalog.quests() {
            learner.quests.insert(quest.name.clone(), QuestProgress::Completed);
        }
        assert!(missing_quest_prompt(&catalog, &learner)
            .starts_with("It looks like you've completed all"));
    }
}
