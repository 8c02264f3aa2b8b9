//! Learning paths: ordered chapters with per-chapter and whole-path rewards.

use super::{ProgressionEngine, LIST_LIMIT};
use crate::catalog::{clean_name, Chapter, LearningPath};
use crate::learner::{LearnerState, PathProgress, PendingCheck, ProgressState};
use tracing::info;

/// Courses previewed when a new chapter unlocks
const NEXT_CHAPTER_PREVIEW: usize = 3;

impl ProgressionEngine {
    pub fn start_learning_path(&self, learner: &mut LearnerState, raw_name: &str) -> String {
        let cleaned = clean_name(raw_name);
        let Some(path) = self.catalog().find_path(cleaned) else {
            return self.unknown_path_message(learner, cleaned);
        };

        match learner.paths.get(&path.name) {
            Some(PathProgress::Completed) => {
                let mut lines = vec![
                    format!("You have already completed the learning path '{}'!", path.name),
                    String::new(),
                ];
                let available = self.available_paths(learner);
                if available.is_empty() {
                    lines.push("You've started every learning path we offer!".to_string());
                } else {
                    lines.push(
                        "Would you like to start a new one? Here are some available learning paths:"
                            .to_string(),
                    );
                    lines.extend(available.iter().map(|p| path_summary_line(p)));
                }
                lines.join("\n")
            }
            Some(PathProgress::InProgress {
                current_chapter,
                chapters_completed,
            }) => self.path_in_progress_message(
                learner,
                path,
                *current_chapter,
                chapters_completed.len(),
            ),
            None => {
                learner.paths.insert(path.name.clone(), PathProgress::started());
                learner.pending_checks.enqueue(PendingCheck::Chapters);
                learner.pending_checks.enqueue(PendingCheck::Paths);
                learner.pending_checks.enqueue(PendingCheck::Level);
                info!(learner = %learner.id, path = %path.name, "learning path started");

                let mut lines = vec![
                    format!("You have started the Learning Path: '{}'!", path.name),
                    String::new(),
                    format!("Description: {}", path.description),
                    format!("Difficulty: {}", path.difficulty),
                    format!("Estimated Hours: {}", path.estimated_hours),
                    format!("Total Chapters: {}", path.chapter_count()),
                ];
                if let Some(first) = path.chapters.first() {
                    lines.push(String::new());
                    lines.push(format!("First Chapter: {}", first.title));
                    lines.push(first.description.clone());
                    lines.push(String::new());
                    lines.push("Required Courses:".to_string());
                    lines.extend(self.course_lines(&first.required_courses));
                }
                lines.push(String::new());
                lines.push(format!(
                    "Complete Reward: {} XP + {}",
                    path.reward_xp, path.reward_badge
                ));
                lines.push(
                    "Complete all required courses in each chapter to progress through this learning path!"
                        .to_string(),
                );
                lines.join("\n")
            }
        }
    }

    fn path_in_progress_message(
        &self,
        learner: &LearnerState,
        path: &LearningPath,
        current_chapter: usize,
        done: usize,
    ) -> String {
        let Some(chapter) = path.chapters.get(current_chapter) else {
            return format!(
                "⏳ You're already in the middle of '{}', and you've completed all chapters. \
                 Use 'check learning path progress' to update your status.",
                path.name
            );
        };
        let total = path.chapter_count();
        let mut lines = vec![
            format!("⏳ You're already in the middle of the learning path: '{}'.", path.name),
            String::new(),
            format!("Current Chapter: {}", chapter.title),
            format!(
                "Progress: {}/{} chapters completed ({:.1}%)",
                done,
                total,
                percent(done, total)
            ),
            String::new(),
        ];
        let remaining = learner.remaining(&chapter.required_courses);
        if remaining.is_empty() {
            lines.push(
                "You've completed all the courses in the current chapter! \
                 Use 'check chapter completion' to update your progress."
                    .to_string(),
            );
        } else {
            lines.push(
                "You still need to finish these courses in the current chapter:".to_string(),
            );
            lines.extend(self.course_lines(&remaining));
            lines.push(String::new());
            lines.push("💪 Keep going to complete this chapter!".to_string());
        }
        lines.join("\n")
    }

    /// Paths the learner has not started, in catalog order
    pub fn available_paths(&self, learner: &LearnerState) -> Vec<&LearningPath> {
        self.catalog()
            .learning_paths()
            .iter()
            .filter(|p| learner.path_state(&p.name) == ProgressState::NotStarted)
            .collect()
    }

    fn unknown_path_message(&self, learner: &LearnerState, cleaned: &str) -> String {
        let mut lines = vec![format!("❌ No learning path named '{}' found.", cleaned)];
        let available = self.available_paths(learner);
        if let Some(first) = available.first() {
            lines.push(String::new());
            lines.push("🚀 Available learning paths you can start:".to_string());
            lines.extend(available.iter().map(|p| path_summary_line(p)));
            lines.push(String::new());
            lines.push(format!(
                "Tip: To begin a learning path, use 'start learning path <name>', for example 'start learning path {}'",
                first.name
            ));
        }
        let active = self.active_path_lines(learner);
        if !active.is_empty() {
            lines.push(String::new());
            lines.push("⏳ Learning paths you're currently working on:".to_string());
            lines.extend(active);
            lines.push(String::new());
            lines.push(
                "Tip: To track your current progress, use 'show learning path progress'"
                    .to_string(),
            );
        }
        lines.join("\n")
    }

    fn active_path_lines(&self, learner: &LearnerState) -> Vec<String> {
        learner
            .active_paths()
            .into_iter()
            .filter_map(|name| {
                let path = self.catalog().find_path(name)?;
                let total = path.chapter_count();
                let done = learner.paths.get(name)?.chapters_done(total);
                Some(format!(
                    "- {} - {}/{} chapters completed ({:.1}%)",
                    path.name,
                    done,
                    total,
                    percent(done, total)
                ))
            })
            .collect()
    }

    /// Advance the current chapter of in-progress paths whose chapter courses
    /// are all completed. One chapter per path per call.
    ///
    /// `path_name` restricts the check to one active path. With
    /// `report_remaining`, a call that changes nothing explains what is left.
    pub fn evaluate_chapter_completion(
        &self,
        learner: &mut LearnerState,
        path_name: Option<&str>,
        report_remaining: bool,
    ) -> Vec<String> {
        let selected: Vec<String> = match path_name {
            Some(raw) => {
                let cleaned = clean_name(raw);
                match self.catalog().find_path(cleaned) {
                    Some(path) if learner.paths.contains_key(&path.name) => vec![path.name.clone()],
                    _ => {
                        return vec![format!(
                            "❌ No learning path named '{}' found in your active paths.",
                            cleaned
                        )]
                    }
                }
            }
            None => learner
                .active_paths()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let chapter_reward = self.rewards().chapter_completion_xp;
        let mut messages = Vec::new();

        for name in &selected {
            let Some(path) = self.catalog().find_path(name) else {
                continue;
            };
            let Some(PathProgress::InProgress {
                current_chapter, ..
            }) = learner.paths.get(name)
            else {
                continue;
            };
            let idx = *current_chapter;
            let Some(chapter) = path.chapters.get(idx) else {
                continue;
            };
            if !learner.has_completed_all(&chapter.required_courses) {
                continue;
            }

            let newly_completed = match learner.paths.get_mut(name) {
                Some(PathProgress::InProgress {
                    current_chapter,
                    chapters_completed,
                }) => {
                    let inserted = chapters_completed.insert(idx);
                    *current_chapter = first_open_chapter(chapters_completed, path.chapter_count());
                    inserted
                }
                _ => false,
            };

            if newly_completed {
                learner.grant_xp(chapter_reward);
                info!(
                    learner = %learner.id,
                    path = %path.name,
                    chapter = idx + 1,
                    "chapter completed"
                );
                messages.push(format!(
                    "🎉 You've completed Chapter {}: '{}' in the '{}' learning path! \
                     You earned {} XP for completing this chapter!",
                    idx + 1,
                    chapter.title,
                    path.name,
                    chapter_reward
                ));
            }

            if let Some(next) = path.chapters.get(idx + 1) {
                messages.push(self.next_chapter_message(learner, next));
            }
        }

        if messages.is_empty() && report_remaining {
            messages.push(self.remaining_chapter_report(learner, &selected));
        }
        messages
    }

    fn next_chapter_message(&self, learner: &LearnerState, next: &Chapter) -> String {
        let total = next.required_courses.len();
        let shown = total.min(NEXT_CHAPTER_PREVIEW);
        let mut lines = vec![
            format!("🚩 Next chapter unlocked: '{}'", next.title),
            next.description.clone(),
            String::new(),
            format!("Required Courses: (showing {} of {})", shown, total),
        ];
        for course in next.required_courses.iter().take(shown) {
            let tick = if learner.has_completed(course) { "✅ " } else { "" };
            lines.push(format!(
                "- {}{} ({})",
                tick,
                course,
                self.catalog().course_link(course)
            ));
        }
        if total > shown {
            lines.push(format!("- ...and {} more courses", total - shown));
        }
        lines.push(String::new());
        lines.push("Use 'show learning path progress' to see all required courses.".to_string());
        lines.join("\n")
    }

    fn remaining_chapter_report(&self, learner: &LearnerState, selected: &[String]) -> String {
        let multiple = selected.len() > 1;
        let mut lines = Vec::new();
        for name in selected {
            let Some(path) = self.catalog().find_path(name) else {
                continue;
            };
            let Some(PathProgress::InProgress {
                current_chapter, ..
            }) = learner.paths.get(name)
            else {
                continue;
            };
            let Some(chapter) = path.chapters.get(*current_chapter) else {
                continue;
            };
            let remaining = learner.remaining(&chapter.required_courses);
            if remaining.is_empty() {
                continue;
            }
            let indent = if multiple {
                lines.push(format!(
                    "{} - Chapter {}: '{}'",
                    path.name,
                    current_chapter + 1,
                    chapter.title
                ));
                "  "
            } else {
                ""
            };
            for course in remaining.iter().take(LIST_LIMIT) {
                lines.push(format!(
                    "{}- {} ({})",
                    indent,
                    course,
                    self.catalog().course_link(course)
                ));
            }
            if remaining.len() > LIST_LIMIT {
                lines.push(format!(
                    "{}- ...and {} more courses",
                    indent,
                    remaining.len() - LIST_LIMIT
                ));
            }
        }

        if lines.is_empty() {
            return "No chapters to update. All your learning paths are either completed or up to date."
                .to_string();
        }
        let header = if multiple {
            "Your current learning path progress:"
        } else {
            "You still need to complete these courses to finish the current chapter:"
        };
        format!("{}\n{}", header, lines.join("\n"))
    }

    /// Complete every in-progress path whose chapters are all done,
    /// granting its XP and badge once.
    pub fn evaluate_path_completion(&self, learner: &mut LearnerState) -> Vec<String> {
        let mut messages = Vec::new();
        for path in self.catalog().learning_paths() {
            let finished = matches!(
                learner.paths.get(&path.name),
                Some(PathProgress::InProgress { chapters_completed, .. })
                    if chapters_completed.len() == path.chapter_count()
            );
            if !finished {
                continue;
            }
            learner
                .paths
                .insert(path.name.clone(), PathProgress::Completed);
            learner.grant_xp(path.reward_xp);
            learner.award_badge(&path.reward_badge);
            info!(learner = %learner.id, path = %path.name, "learning path completed");
            messages.push(format!(
                "🎊 Congratulations! You've completed the entire '{}' learning path!\n\
                 You've earned:\n- {} XP\n- '{}'\n\n\
                 This achievement shows your dedication to mastering {}. Well done! 🫡",
                path.name, path.reward_xp, path.reward_badge, path.name
            ));
        }
        messages
    }
}

/// Index of the first chapter not completed, or `count` when all are
fn first_open_chapter(done: &std::collections::BTreeSet<usize>, count: usize) -> usize {
    (0..count).find(|idx| !done.contains(idx)).unwrap_or(count)
}

fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

fn path_summary_line(path: &LearningPath) -> String {
    format!(
        "- {} ({}, {} hours)",
        path.name, path.difficulty, path.estimated_hours
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::test_support::{engine, mark_completed};
    use std::collections::BTreeSet;

    fn progress(learner: &LearnerState, name: &str) -> (usize, BTreeSet<usize>) {
        match learner.paths.get(name) {
            Some(PathProgress::InProgress {
                current_chapter,
                chapters_completed,
            }) => (*current_chapter, chapters_completed.clone()),
            other => panic!("unexpected progress {:?}", other),
        }
    }

    #[test]
    fn test_start_path() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let msg = engine.start_learning_path(&mut learner, "data science fundamentals");
        assert!(msg.contains("Learning Path: 'Data Science Fundamentals'"));
        assert!(msg.contains("First Chapter: Foundations of Data Analysis"));
        assert!(msg.contains("Complete Reward: 100 XP + Data Science Explorer Badge"));
        assert_eq!(progress(&learner, "Data Science Fundamentals"), (0, BTreeSet::new()));
    }

    #[test]
    fn test_unknown_path_lists_available() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Web Fundamentals");
        let msg = engine.start_learning_path(&mut learner, "Underwater Basket Weaving");
        assert!(msg.starts_with("❌ No learning path named 'Underwater Basket Weaving' found."));
        assert!(msg.contains("- Cyber Security 101 (Advanced, 28 hours)"));
        assert!(msg.contains("- Web Fundamentals - 0/5 chapters completed (0.0%)"));
    }

    #[test]
    fn test_chapter_to_path_chain() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Data Science Fundamentals");

        mark_completed(&mut learner, &["Python for Everybody", "Intro to Data Science"]);
        let msgs = engine.evaluate_chapter_completion(&mut learner, None, false);
        assert_eq!(msgs.len(), 2);
        assert!(msgs[0].contains("Chapter 1: 'Foundations of Data Analysis'"));
        assert!(msgs[1].contains("Next chapter unlocked: 'Machine Learning Essentials'"));
        assert_eq!(progress(&learner, "Data Science Fundamentals"), (1, BTreeSet::from([0])));
        assert_eq!(learner.xp, 50);
        assert!(engine.evaluate_path_completion(&mut learner).is_empty());

        mark_completed(&mut learner, &["Machine Learning Basics"]);
        let msgs = engine.evaluate_chapter_completion(&mut learner, None, false);
        assert_eq!(msgs.len(), 1);
        assert_eq!(progress(&learner, "Data Science Fundamentals"), (2, BTreeSet::from([0, 1])));

        let done = engine.evaluate_path_completion(&mut learner);
        assert_eq!(done.len(), 1);
        assert!(done[0].contains("entire 'Data Science Fundamentals' learning path"));
        assert_eq!(learner.path_state("Data Science Fundamentals"), ProgressState::Completed);
        assert_eq!(learner.xp, 50 + 50 + 100);
        assert!(learner.has_badge("Data Science Explorer Badge"));

        assert!(engine.evaluate_path_completion(&mut learner).is_empty());
        assert_eq!(learner.xp, 200);
    }

    #[test]
    fn test_one_chapter_per_call() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Management 101");
        mark_completed(
            &mut learner,
            &[
                "Introduction to Business",
                "Business Structures and Types",
                "Key Business Functions",
                "Introduction to Management",
                "Leadership and Decision-Making",
                "Planning and Organizational Structure",
            ],
        );
        engine.evaluate_chapter_completion(&mut learner, None, false);
        assert_eq!(progress(&learner, "Management 101").0, 1);
        engine.evaluate_chapter_completion(&mut learner, None, false);
        assert_eq!(progress(&learner, "Management 101").0, 2);
        assert_eq!(learner.xp, 100);
    }

    #[test]
    fn test_report_remaining() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Cyber Security 101");
        mark_completed(&mut learner, &["CIA Triad"]);
        let msgs =
            engine.evaluate_chapter_completion(&mut learner, Some("cyber security 101"), true);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].starts_with("You still need to complete these courses"));
        assert!(msgs[0].contains("- Intro to Cybersecurity"));
        assert!(!msgs[0].contains("- CIA Triad"));

        assert!(engine
            .evaluate_chapter_completion(&mut learner, None, false)
            .is_empty());
    }

    #[test]
    fn test_named_path_not_active() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let msgs = engine.evaluate_chapter_completion(&mut learner, Some("Web Fundamentals"), true);
        assert_eq!(
            msgs,
            vec!["❌ No learning path named 'Web Fundamentals' found in your active paths."]
        );
    }

    #[test]
    fn test_nothing_to_update() {
        let engine = engine();
        let mut learner = LearnerState::new();
        let msgs = engine.evaluate_chapter_completion(&mut learner, None, true);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].starts_with("No chapters to update"));
    }

    #[test]
    fn test_in_progress_restart_shows_current_chapter() {
        let engine = engine();
        let mut learner = LearnerState::new();
        engine.start_learning_path(&mut learner, "Web Fundamentals");
        let msg = engine.start_learning_path(&mut learner, "web fundamentals");
        assert!(msg.contains("Current Chapter: Introduction to the Web"));
        assert!(msg.contains("Progress: 0/5 chapters completed (0.0%)"));
        assert!(msg.contains("- What is the Web?"));
    }
}
