//! Learning path overview, curriculum and progress

use super::{percent, progress_bar};
use coursebot_common::catalog::{clean_name, LearningPath};
use coursebot_common::learner::PathProgress;
use coursebot_common::{Catalog, LearnerState};

fn path_row(path: &LearningPath) -> String {
    format!(
        "{:<28} {:<14} {} hours",
        path.name,
        path.difficulty.as_str(),
        path.estimated_hours
    )
}

fn path_table<'a>(paths: impl Iterator<Item = &'a LearningPath>) -> Vec<String> {
    let mut rows = vec![format!(
        "{:<28} {:<14} {}",
        "Learning Path", "Difficulty", "Estimated Time"
    )];
    rows.extend(paths.map(path_row));
    rows
}

/// (completed, total) courses of a path for this learner
fn course_counts(learner: &LearnerState, path: &LearningPath) -> (usize, usize) {
    let total = path.all_courses().count();
    let done = path.all_courses().filter(|c| learner.has_completed(c)).count();
    (done, total)
}

/// Hours invested and remaining, pro rata to completed courses
fn time_split(path: &LearningPath, done: usize, total: usize) -> (f64, f64) {
    let hours = f64::from(path.estimated_hours);
    let invested = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * hours
    };
    (invested, hours - invested)
}

/// Available, in-progress and completed paths
pub fn list_paths(catalog: &Catalog, learner: &LearnerState) -> String {
    let paths = catalog.learning_paths();
    if paths.is_empty() {
        return "❌ There are currently no learning paths available.".to_string();
    }

    let available: Vec<&LearningPath> = paths
        .iter()
        .filter(|p| !learner.paths.contains_key(&p.name))
        .collect();
    let mut in_progress = Vec::new();
    let mut completed = Vec::new();
    for path in paths {
        match learner.paths.get(&path.name) {
            Some(PathProgress::Completed) => completed.push(path.name.as_str()),
            Some(progress) => {
                let done = progress.chapters_done(path.chapter_count());
                in_progress.push(format!(
                    "{:<28} {:<10} {:.1}%",
                    path.name,
                    format!("{}/{}", done, path.chapter_count()),
                    percent(done, path.chapter_count())
                ));
            }
            None => {}
        }
    }

    let mut lines = Vec::new();
    if !available.is_empty() {
        lines.push("## 🚀 Available Learning Paths".to_string());
        lines.push("Here are learning paths you can start anytime:".to_string());
        lines.push(String::new());
        lines.extend(path_table(available.iter().copied()));
    }
    if !in_progress.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("## ⏳ In-Progress Learning Paths".to_string());
        lines.push("Continue your learning journey:".to_string());
        lines.push(String::new());
        lines.push(format!("{:<28} {:<10} {}", "Learning Path", "Chapters", "Progress"));
        lines.extend(in_progress.iter().cloned());
    }
    if !completed.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("## 🥳 Completed Learning Paths".to_string());
        lines.push("You've mastered these paths:".to_string());
        lines.push(String::new());
        lines.extend(completed.iter().map(|p| format!("✅ {}", p)));
    }

    lines.push(String::new());
    lines.push("### 🔎 Want to find out more about each learning path?".to_string());
    lines.push("Use: 'show learning path details'".to_string());
    if let Some(first) = available.first() {
        lines.push(String::new());
        lines.push("### 🚀 Ready to start a new learning path?".to_string());
        lines.push("Use: 'start learning path <Learning Path Name>'".to_string());
        lines.push(format!("For example: 'start learning path {}'", first.name));
    }
    if !in_progress.is_empty() {
        lines.push(String::new());
        lines.push("### 📄 Want to see detailed progress?".to_string());
        lines.push("Use: 'show learning path progress'".to_string());
    }
    lines.join("\n")
}

fn status_text(progress: Option<&PathProgress>, path: &LearningPath) -> String {
    match progress {
        None => "Not Started".to_string(),
        Some(PathProgress::Completed) => "✅ Completed".to_string(),
        Some(p) => format!(
            "⏳ In Progress ({:.1}%)",
            percent(p.chapters_done(path.chapter_count()), path.chapter_count())
        ),
    }
}

/// Curriculum of one path, or an overview of every path when `path_name`
/// is `None`.
pub fn path_details(catalog: &Catalog, learner: &LearnerState, path_name: Option<&str>) -> String {
    let Some(raw) = path_name else {
        return all_path_details(catalog, learner);
    };
    let Some(path) = catalog.find_path(raw) else {
        return format!(
            "❌ No learning path named '{}' found. Use 'list learning paths' to see available paths.",
            clean_name(raw)
        );
    };

    let progress = learner.paths.get(&path.name);
    let mut lines = vec![
        format!("# {} - Learning Path Details", path.name),
        String::new(),
        format!("Status: {}", status_text(progress, path)),
        format!("Description: {}", path.description),
        format!("Difficulty Level: {}", path.difficulty),
        format!("Estimated Time: {} hours", path.estimated_hours),
        format!("Total Chapters: {}", path.chapter_count()),
        format!(
            "Completion Rewards: {} XP + '{}' badge",
            path.reward_xp, path.reward_badge
        ),
        String::new(),
        "## Chapter Breakdown".to_string(),
        String::new(),
    ];

    for (idx, chapter) in path.chapters.iter().enumerate() {
        let marker = match progress {
            Some(PathProgress::InProgress {
                current_chapter,
                chapters_completed,
            }) => {
                if chapters_completed.contains(&idx) {
                    " ✅"
                } else if *current_chapter == idx {
                    " ⏳ (Current)"
                } else {
                    ""
                }
            }
            Some(PathProgress::Completed) => " ✅",
            None => "",
        };
        lines.push(format!("### Chapter {}: {}{}", idx + 1, chapter.title, marker));
        lines.push(chapter.description.clone());
        lines.push(String::new());
        lines.push("Courses:".to_string());
        for course in &chapter.required_courses {
            let icon = if learner.has_completed(course) { "✅ " } else { "" };
            lines.push(format!("- {}{} ({})", icon, course, catalog.course_link(course)));
        }
        lines.push(String::new());
    }

    match progress {
        None => {
            lines.push("## 🚀 Ready to begin?".to_string());
            lines.push(format!("Use the command: 'start learning path {}'", path.name));
        }
        Some(PathProgress::InProgress { .. }) => {
            lines.push(
                "⏩ Continue your progress! Use 'show learning path progress' to see what's next."
                    .to_string(),
            );
        }
        Some(PathProgress::Completed) => {}
    }
    lines.join("\n")
}

fn all_path_details(catalog: &Catalog, learner: &LearnerState) -> String {
    let mut lines = vec!["## Learning Path Details".to_string(), String::new()];
    for path in catalog.learning_paths() {
        let progress = learner.paths.get(&path.name);
        lines.push(format!("### {} ({})", path.name, status_text(progress, path)));
        lines.push(String::new());
        lines.push(format!("Description: {}", path.description));
        lines.push(format!("Difficulty Level: {}", path.difficulty));
        lines.push(format!("Estimated Time: {} hours", path.estimated_hours));
        lines.push(format!("Total Chapters: {}", path.chapter_count()));
        lines.push(format!(
            "Completion Rewards: {} XP + {}",
            path.reward_xp, path.reward_badge
        ));
        if let Some(first) = path.chapters.first() {
            lines.push(String::new());
            lines.push(format!("First Chapter: {}", first.title));
            lines.push(first.description.clone());
        }
        lines.push(String::new());
        lines.push(format!(
            "Note: Use 'show learning path details {}' for the full chapter and course listing",
            path.name
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Progress of one started path, or a summary of every started path when
/// `path_name` is `None`.
pub fn path_progress(catalog: &Catalog, learner: &LearnerState, path_name: Option<&str>) -> String {
    match path_name {
        None => progress_summary(catalog, learner),
        Some(raw) => single_path_progress(catalog, learner, raw),
    }
}

fn progress_summary(catalog: &Catalog, learner: &LearnerState) -> String {
    struct Row<'a> {
        path: &'a LearningPath,
        chapters_done: usize,
        pct: f64,
    }

    let mut in_progress = Vec::new();
    let mut completed = Vec::new();
    for path in catalog.learning_paths() {
        match learner.paths.get(&path.name) {
            Some(PathProgress::Completed) => completed.push(path),
            Some(progress) => {
                let chapters_done = progress.chapters_done(path.chapter_count());
                in_progress.push(Row {
                    path,
                    chapters_done,
                    pct: percent(chapters_done, path.chapter_count()),
                });
            }
            None => {}
        }
    }
    if in_progress.is_empty() && completed.is_empty() {
        return "You haven't started any learning paths yet. Use 'list learning paths' to see available options."
            .to_string();
    }
    in_progress.sort_by(|a, b| b.pct.total_cmp(&a.pct));

    let mut lines = vec!["# Your Learning Path Progress".to_string(), String::new()];
    if !in_progress.is_empty() {
        lines.push("## ⏳ In-Progress Learning Paths".to_string());
        lines.push(String::new());
        for row in &in_progress {
            let (done, total) = course_counts(learner, row.path);
            let (invested, remaining) = time_split(row.path, done, total);
            lines.push(format!("### {} ({})", row.path.name, row.path.difficulty));
            lines.push(format!(
                "Progress: {}/{} chapters completed ({:.1}%)",
                row.chapters_done,
                row.path.chapter_count(),
                row.pct
            ));
            lines.push(progress_bar(row.pct));
            lines.push(format!("Courses Completed: {}/{}", done, total));
            lines.push(format!(
                "Time Investment: ~{:.1} hours invested, ~{:.1} hours remaining",
                invested, remaining
            ));
            lines.push(String::new());
            lines.push(format!(
                "To see detailed chapter progress: 'show learning path progress {}'",
                row.path.name
            ));
            lines.push("---".to_string());
            lines.push(String::new());
        }
    }
    if !completed.is_empty() {
        lines.push("## 🥳 Completed Learning Paths".to_string());
        lines.extend(completed.iter().map(|p| {
            format!(
                "✅ {} - Earned: {} XP + '{}' badge",
                p.name, p.reward_xp, p.reward_badge
            )
        }));
        lines.push(String::new());
    }
    if !in_progress.is_empty() {
        lines.push("💡 Tips:".to_string());
        lines.push(
            "- Complete all courses in a chapter to advance to the next chapter".to_string(),
        );
        lines.push(
            "- Use 'check chapter completion' to update your progress after completing courses"
                .to_string(),
        );
        lines.push(
            "- Use 'show learning path details <path name>' to see the full curriculum".to_string(),
        );
    }
    lines.join("\n")
}

fn single_path_progress(catalog: &Catalog, learner: &LearnerState, raw: &str) -> String {
    let Some(path) = catalog.find_path(raw) else {
        return format!(
            "❌ No learning path named '{}' found. Use 'list learning paths' to see available paths.",
            clean_name(raw)
        );
    };
    let (current_chapter, chapters_completed) = match learner.paths.get(&path.name) {
        None => {
            return format!(
                "You haven't started the '{}' learning path yet. Use 'start learning path {}' to begin.",
                path.name, path.name
            )
        }
        Some(PathProgress::Completed) => {
            let courses = path.all_courses().count();
            return [
                format!("# {} - COMPLETED 🏆", path.name),
                String::new(),
                "## Congratulations!".to_string(),
                "You've successfully completed this learning path with:".to_string(),
                format!("- {} chapters mastered", path.chapter_count()),
                format!("- {} courses completed", courses),
                format!("- {} hours of learning", path.estimated_hours),
                String::new(),
                "## Rewards Earned".to_string(),
                format!("- {} XP", path.reward_xp),
                format!("- '{}'", path.reward_badge),
                String::new(),
                "Feel free to explore other learning paths with 'list learning paths'.".to_string(),
            ]
            .join("\n");
        }
        Some(PathProgress::InProgress {
            current_chapter,
            chapters_completed,
        }) => (*current_chapter, chapters_completed),
    };

    let Some(chapter) = path.chapters.get(current_chapter) else {
        return format!(
            "You've completed all chapters in '{}'. Use 'check chapter completion' to update your status.",
            path.name
        );
    };

    let total_chapters = path.chapter_count();
    let path_pct = percent(chapters_completed.len(), total_chapters);
    let (done, total) = course_counts(learner, path);
    let course_pct = percent(done, total);
    let (invested, remaining) = time_split(path, done, total);
    let chapter_done = chapter
        .required_courses
        .iter()
        .filter(|c| learner.has_completed(c))
        .count();
    let chapter_pct = percent(chapter_done, chapter.required_courses.len());

    let mut lines = vec![
        format!("# {} - Learning Path Progress", path.name),
        String::new(),
        "## Overall Progress".to_string(),
        String::new(),
        format!(
            "Path Completion: {}/{} chapters ({:.1}%)",
            chapters_completed.len(),
            total_chapters,
            path_pct
        ),
        progress_bar(path_pct),
        format!("Course Completion: {}/{} courses ({:.1}%)", done, total, course_pct),
        progress_bar(course_pct),
        format!(
            "Time Stats: ~{:.1} hours invested, ~{:.1} hours remaining",
            invested, remaining
        ),
        String::new(),
        format!("## Current Chapter: {}", chapter.title),
        String::new(),
        format!("Description: {}", chapter.description),
        format!(
            "Chapter Progress: {}/{} courses ({:.1}%)",
            chapter_done,
            chapter.required_courses.len(),
            chapter_pct
        ),
        progress_bar(chapter_pct),
        String::new(),
        "Required Courses:".to_string(),
    ];
    for course in &chapter.required_courses {
        let icon = if learner.has_completed(course) { "✅" } else { "⏳" };
        lines.push(format!("- {} {} ({})", icon, course, catalog.course_link(course)));
    }

    lines.push(String::new());
    lines.push("## Learning Path Map".to_string());
    lines.push(String::new());
    for (idx, ch) in path.chapters.iter().enumerate() {
        let status = if chapters_completed.contains(&idx) {
            "✅ COMPLETED"
        } else if idx == current_chapter {
            "⏳ IN PROGRESS"
        } else if idx < current_chapter {
            "⚠️ PENDING COMPLETION"
        } else {
            "🔒 LOCKED"
        };
        lines.push(format!("Chapter {}: {} - {}", idx + 1, ch.title, status));
    }

    lines.push(String::new());
    lines.push("## Completion Reward".to_string());
    lines.push(format!("- {} XP", path.reward_xp));
    lines.push(format!("- '{}' badge", path.reward_badge));
    lines.push(String::new());
    lines.push("## 💡 Tips".to_string());
    lines.push("- Complete all courses in the current chapter to unlock the next one".to_string());
    lines.push(
        "- Use 'check chapter completion' to update your progress after completing courses".to_string(),
    );
    lines.push("- Use 'show learning path details' to see the full curriculum".to_string());
    lines.join("\n")
}

/// Prompt for the path name when "start learning path" came without one
pub fn missing_path_prompt(catalog: &Catalog, learner: &LearnerState) -> String {
    let available: Vec<&LearningPath> = catalog
        .learning_paths()
        .iter()
        .filter(|p| !learner.paths.contains_key(&p.name))
        .collect();
    if !available.is_empty() {
        let mut lines = vec![
            "Which learning path 🛤️ would you like to start? Here are the available options:".to_string(),
            String::new(),
        ];
        lines.extend(path_table(available.into_iter()));
        lines.push(String::new());
        lines.push("Just type the name of the learning path you'd like to begin!".to_string());
        return lines.join("\n");
    }

    let in_progress: Vec<String> = catalog
        .learning_paths()
        .iter()
        .filter_map(|p| match learner.paths.get(&p.name) {
            Some(progress @ PathProgress::InProgress { .. }) => {
                let done = progress.chapters_done(p.chapter_count());
                Some(format!(
                    "- {} - {}/{} chapters completed ({:.1}%)",
                    p.name,
                    done,
                    p.chapter_count(),
                    percent(done, p.chapter_count())
                ))
            }
            _ => None,
        })
        .collect();
    if !in_progress.is_empty() {
        return format!(
            "You've already started all available learning paths. Here are your in-progress paths:\n\n{}\n\n\
             Would you like to continue with any of these? Just type the path name!",
            in_progress.join("\n")
        );
    }
    "You've either completed or started all available learning paths. \
     Check your progress with 'show learning path progress'."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn in_progress(current: usize, done: &[usize]) -> PathProgress {
        PathProgress::InProgress {
            current_chapter: current,
            chapters_completed: done.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_list_paths_sections() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        let out = list_paths(&catalog, &learner);
        assert!(out.contains("## 🚀 Available Learning Paths"));
        assert!(out.contains("For example: 'start learning path Cyber Security 101'"));
        assert!(!out.contains("In-Progress"));

        learner
            .paths
            .insert("Data Science Fundamentals".to_string(), in_progress(1, &[0]));
        learner
            .paths
            .insert("Management 101".to_string(), PathProgress::Completed);
        let out = list_paths(&catalog, &learner);
        assert!(out.contains("## ⏳ In-Progress Learning Paths"));
        assert!(out.contains("50.0%"));
        assert!(out.contains("✅ Management 101"));
    }

    #[test]
    fn test_path_details_marks_current_chapter() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        learner
            .paths
            .insert("Data Science Fundamentals".to_string(), in_progress(1, &[0]));
        let out = path_details(&catalog, &learner, Some("data science fundamentals"));
        assert!(out.starts_with("# Data Science Fundamentals - Learning Path Details"));
        assert!(out.contains("Status: ⏳ In Progress (50.0%)"));
        assert!(out.contains("### Chapter 1: "));
        assert!(out.contains(" ⏳ (Current)"));
        assert!(path_details(&catalog, &learner, Some("Underwater Basketry"))
            .starts_with("❌ No learning path named 'Underwater Basketry' found."));
    }

    #[test]
    fn test_all_path_details() {
        let catalog = catalog();
        let learner = LearnerState::new();
        let out = path_details(&catalog, &learner, None);
        assert_eq!(out.matches("### ").count(), catalog.learning_paths().len());
        assert!(out.contains("### Web Fundamentals (Not Started)"));
    }

    #[test]
    fn test_progress_summary() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        assert!(path_progress(&catalog, &learner, None)
            .starts_with("You haven't started any learning paths yet."));

        learner
            .paths
            .insert("Data Science Fundamentals".to_string(), in_progress(1, &[0]));
        learner.completed_courses = vec![
            "Python for Everybody".to_string(),
            "Intro to Data Science".to_string(),
        ];
        let out = path_progress(&catalog, &learner, None);
        assert!(out.contains("### Data Science Fundamentals"));
        assert!(out.contains("Progress: 1/2 chapters completed (50.0%)"));
        assert!(out.contains("Courses Completed: 2/3"));
    }

    #[test]
    fn test_single_path_progress() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        assert!(path_progress(&catalog, &learner, Some("Web Fundamentals"))
            .starts_with("You haven't started the 'Web Fundamentals' learning path yet."));

        learner
            .paths
            .insert("Data Science Fundamentals".to_string(), in_progress(1, &[0]));
        let out = path_progress(&catalog, &learner, Some("Data Science Fundamentals"));
        assert!(out.contains("Path Completion: 1/2 chapters (50.0%)"));
        assert!(out.contains("- ✅ COMPLETED"));
        assert!(out.contains("- ⏳ IN PROGRESS"));
        assert!(out.contains("- ⏳ Machine Learning Basics"));

        learner
            .paths
            .insert("Data Science Fundamentals".to_string(), PathProgress::Completed);
        let done = path_progress(&catalog, &learner, Some("Data Science Fundamentals"));
        assert!(done.starts_with("# Data Science Fundamentals - COMPLETED 🏆"));
        assert!(done.contains("- 3 courses completed"));
    }

    #[test]
    fn test_missing_path_prompt() {
        let catalog = catalog();
        let mut learner = LearnerState::new();
        assert!(missing_path_prompt(&catalog, &learner).starts_with("Which learning path 🛤️"));

        for path in catalog.learning_paths() {
            learner.paths.insert(path.name.clone(), PathProgress::started());
        }
        assert!(missing_path_prompt(&catalog, &learner).starts_with("You've already started all"));

        for path in catalog.learning_paths() {
            learner.paths.insert(path.name.clone(), PathProgress::Completed);
        }
        assert!(missing_path_prompt(&catalog, &learner).starts_with("You've either completed"));
    }
}
