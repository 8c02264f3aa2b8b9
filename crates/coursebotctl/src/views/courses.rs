//! Course listings, trending sample and rating lookups

use super::{percent, progress_bar, rating_cell, review_summary, stars, LIST_LIMIT};
use coursebot_common::catalog::{clean_name, Course};
use coursebot_common::stores::{average_rating_text, RatingStore};
use coursebot_common::{Catalog, LearnerState};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uncompleted courses shown per category in the overview
const PER_CATEGORY: usize = 3;
/// Candidates the trending sample is drawn from
const TRENDING_POOL: usize = 20;
/// Categories guaranteed a trending slot
const TRENDING_CATEGORIES: usize = 4;
const TRENDING_PICKS: usize = 5;

fn course_row<S: RatingStore + ?Sized>(catalog: &Catalog, ratings: &S, course: &str) -> String {
    format!(
        "- {} ({}) - {}",
        course,
        catalog.course_link(course),
        review_summary(ratings, course)
    )
}

/// Completed courses that exist in the catalog, as (name, category)
fn completed_with_category<'a>(
    catalog: &'a Catalog,
    learner: &LearnerState,
) -> Vec<(&'a str, &'a str)> {
    learner
        .completed_courses
        .iter()
        .filter_map(|c| catalog.find_course(c))
        .map(|c| (c.name.as_str(), c.category.as_str()))
        .collect()
}

fn completed_row<S: RatingStore + ?Sized>(ratings: &S, course: &str, category: &str) -> String {
    format!("✅ {:<42} {:<22} {}", course, category, rating_cell(ratings, course))
}

/// Top uncompleted courses per category, overall progress and recent
/// completions.
pub fn available_courses<S: RatingStore + ?Sized>(
    catalog: &Catalog,
    learner: &LearnerState,
    ratings: &S,
) -> String {
    let mut lines = vec!["## 🚀 Available Courses".to_string(), String::new()];
    let mut exhausted = Vec::new();

    for category in catalog.categories() {
        let open = learner.remaining(&category.courses);
        if open.is_empty() {
            exhausted.push(category.name.as_str());
            continue;
        }
        lines.push(format!("### {}", category.name.to_uppercase()));
        lines.extend(
            open.iter()
                .take(PER_CATEGORY)
                .map(|c| course_row(catalog, ratings, c)),
        );
        if open.len() > PER_CATEGORY {
            lines.push(format!(
                "...and {} more courses. Use 'show {} courses' to see all.",
                open.len() - PER_CATEGORY,
                category.name.to_lowercase()
            ));
        }
        lines.push(String::new());
    }

    if !exhausted.is_empty() {
        if exhausted.len() == catalog.categories().len() {
            lines = vec![
                "## Congratulations! 🎉".to_string(),
                String::new(),
                "You've completed all available courses!".to_string(),
                String::new(),
            ];
        } else {
            lines.push(format!(
                "Note: You've completed all courses in: {}",
                exhausted.join(", ")
            ));
            lines.push(String::new());
        }
    }

    let completed = completed_with_category(catalog, learner);
    let total = catalog.courses().len();
    let pct = percent(completed.len(), total);
    lines.push(format!(
        "## 📈 Your Progress: {}/{} courses",
        completed.len(),
        total
    ));
    lines.push(format!("{} ({:.1}%)", progress_bar(pct), pct));

    if !completed.is_empty() {
        let mut sorted = completed;
        sorted.sort_by(|a, b| a.1.cmp(b.1));
        let shown = sorted.len().min(LIST_LIMIT);
        lines.push(String::new());
        lines.push("## Recent Completed Courses".to_string());
        lines.extend(
            sorted[sorted.len() - shown..]
                .iter()
                .map(|(course, category)| completed_row(ratings, course, category)),
        );
        if sorted.len() > shown {
            lines.push(String::new());
            lines.push(format!(
                "...and {} more completed courses. Use 'show completed courses' to see all.",
                sorted.len() - shown
            ));
        }
    }

    lines.join("\n")
}

/// Every course of one category, split into available and completed
pub fn category_courses<S: RatingStore + ?Sized>(
    catalog: &Catalog,
    learner: &LearnerState,
    ratings: &S,
    category_name: &str,
) -> String {
    let Some(category) = catalog.find_category(category_name) else {
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        return format!(
            "❌ Category '{}' not found. Available categories: {}",
            clean_name(category_name),
            names.join(", ")
        );
    };

    let (done, open): (Vec<&String>, Vec<&String>) = category
        .courses
        .iter()
        .partition(|c| learner.has_completed(c));

    let mut lines = vec![
        format!("## {} Courses", category.name.to_uppercase()),
        String::new(),
    ];
    if !open.is_empty() {
        lines.push("### Available Courses".to_string());
        lines.extend(open.iter().map(|c| course_row(catalog, ratings, c)));
        lines.push(String::new());
    }
    if !done.is_empty() {
        lines.push("### Completed Courses".to_string());
        lines.extend(
            done.iter()
                .map(|c| format!("✅ {:<42} {}", c, rating_cell(ratings, c))),
        );
    }
    lines.join("\n")
}

pub fn completed_courses<S: RatingStore + ?Sized>(
    catalog: &Catalog,
    learner: &LearnerState,
    ratings: &S,
) -> String {
    let mut completed = completed_with_category(catalog, learner);
    if completed.is_empty() {
        return "❌ You haven't completed any courses yet. Use 'show courses' to see available courses."
            .to_string();
    }
    completed.sort_by(|a, b| a.1.cmp(b.1));

    let mut lines = vec![
        "# Your Completed Courses".to_string(),
        String::new(),
        format!("   {:<42} {:<22} {}", "Course", "Category", "Rating"),
    ];
    lines.extend(
        completed
            .iter()
            .map(|(course, category)| completed_row(ratings, course, category)),
    );
    lines.join("\n")
}

struct TrendingCandidate<'a> {
    course: &'a Course,
    avg: f64,
    count: u64,
    score: f64,
}

fn already_picked(picked: &[&TrendingCandidate], candidate: &TrendingCandidate) -> bool {
    picked.iter().any(|p| p.course.name == candidate.course.name)
}

/// Five well-rated courses, one drawn from each of the first four
/// categories where possible.
///
/// Candidates are the top twenty rated courses by `avg * (1 + count / 10)`.
pub fn trending_courses<S, R>(catalog: &Catalog, ratings: &S, rng: &mut R) -> String
where
    S: RatingStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut eligible: Vec<TrendingCandidate> = catalog
        .courses()
        .iter()
        .filter_map(|course| {
            let agg = ratings.aggregate(&course.name);
            let avg = agg.average()?;
            Some(TrendingCandidate {
                course,
                avg,
                count: agg.count,
                score: avg * (1.0 + agg.count as f64 / 10.0),
            })
        })
        .collect();
    if eligible.is_empty() {
        return "No course has been rated yet, so nothing is trending. Use 'show courses' to browse the catalog."
            .to_string();
    }
    eligible.sort_by(|a, b| b.score.total_cmp(&a.score));
    let pool = &eligible[..eligible.len().min(TRENDING_POOL)];

    let mut picked: Vec<&TrendingCandidate> = Vec::new();

    for category in catalog.categories().iter().take(TRENDING_CATEGORIES) {
        let options: Vec<&TrendingCandidate> = pool
            .iter()
            .filter(|c| c.course.category == category.name && !already_picked(&picked, c))
            .collect();
        if let Some(choice) = options.choose(rng) {
            picked.push(*choice);
        }
    }

    let slots = TRENDING_PICKS.saturating_sub(picked.len());
    let rest: Vec<&TrendingCandidate> = pool
        .iter()
        .filter(|c| !already_picked(&picked, c))
        .collect();
    picked.extend(rest.choose_multiple(rng, slots).copied());

    while picked.len() < TRENDING_PICKS {
        let rest: Vec<&TrendingCandidate> = eligible
            .iter()
            .filter(|c| !already_picked(&picked, c))
            .collect();
        match rest.choose(rng) {
            Some(choice) => picked.push(*choice),
            None => break,
        }
    }

    let mut lines = vec!["## 🔥 Trending Courses Right Now".to_string(), String::new()];
    for (idx, candidate) in picked.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) - {} ({} reviews)",
            idx + 1,
            candidate.course.name,
            candidate.course.category,
            stars(candidate.avg),
            candidate.count
        ));
        lines.push(format!("   Visit Course: {}", candidate.course.link));
    }
    lines.push(String::new());
    lines.push("Courses selected based on user reviews and popularity".to_string());
    lines.push(String::new());
    lines.push("If you need to see all available courses, use: 'show courses'".to_string());
    lines.join("\n")
}

/// Average rating of a course named by the learner
pub fn course_rating<S: RatingStore + ?Sized>(catalog: &Catalog, ratings: &S, raw: &str) -> String {
    let name = catalog
        .find_course(raw)
        .map(|c| c.name.as_str())
        .unwrap_or_else(|| clean_name(raw));
    format!(
        "'{}' has an average rating of {}.",
        name,
        average_rating_text(ratings, name)
    )
}

/// Every category and course with its link
pub fn catalog_listing(catalog: &Catalog) -> String {
    let mut lines = Vec::new();
    for category in catalog.categories() {
        lines.push(format!("{} ({} courses)", category.name, category.courses.len()));
        lines.extend(
            category
                .courses
                .iter()
                .map(|c| format!("  - {:<42} {}", c, catalog.course_link(c))),
        );
        lines.push(String::new());
    }
    lines.push(format!("{} courses in total", catalog.courses().len()));
    lines.join("\n")
}
