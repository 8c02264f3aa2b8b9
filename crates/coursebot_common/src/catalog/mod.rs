//! Course catalog
//!
//! Static reference data loaded once at startup: courses grouped into
//! categories, quests, learning paths, skill badge requirements, daily
//! challenges and the level table. Name lookups go through lower-cased
//! indexes built at construction time.

mod data;
pub mod levels;

pub use data::{CHALLENGING_COURSES, FOUNDATIONAL_COURSES, POPULAR_COURSES};
pub use levels::{LevelTable, LevelTier, TEN_LEVELS};

use crate::error::{CoursebotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Link used for courses without a catalog entry
pub const FALLBACK_LINK: &str = "https://example.com/courses";

/// Quote characters stripped from user-supplied names
const QUOTE_CHARS: &[char] = &['"', '\'', '`', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Strip surrounding whitespace and quotes, keep inner text as typed
pub fn clean_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || QUOTE_CHARS.contains(&c))
}

/// Lookup key for a user-supplied or catalog name
pub fn name_key(raw: &str) -> String {
    clean_name(raw).to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub category: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub courses: Vec<String>,
}

/// Badge earned by completing a set of courses with enough XP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBadgeRequirement {
    pub name: String,
    pub required_courses: Vec<String>,
    pub min_xp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub required_courses: Vec<String>,
    pub reward_xp: u64,
    pub reward_badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub description: String,
    pub required_courses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_hours: u32,
    pub chapters: Vec<Chapter>,
    pub reward_xp: u64,
    pub reward_badge: String,
}

impl LearningPath {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Every course across all chapters, in chapter order
    pub fn all_courses(&self) -> impl Iterator<Item = &str> {
        self.chapters
            .iter()
            .flat_map(|c| c.required_courses.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub question: String,
    /// Expected answer, compared trimmed and case-folded
    pub answer: String,
    pub reward_xp: u64,
}

/// Raw catalog content before indexing
#[derive(Debug, Clone, Default)]
pub struct CatalogParts {
    pub levels: Vec<LevelTier>,
    /// (category name, [(course name, link)])
    pub categories: Vec<(String, Vec<(String, String)>)>,
    pub skill_badges: Vec<SkillBadgeRequirement>,
    pub quests: Vec<Quest>,
    pub learning_paths: Vec<LearningPath>,
    pub challenges: Vec<DailyChallenge>,
}

/// Validated, indexed catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: LevelTable,
    categories: Vec<Category>,
    courses: Vec<Course>,
    skill_badges: Vec<SkillBadgeRequirement>,
    quests: Vec<Quest>,
    learning_paths: Vec<LearningPath>,
    challenges: Vec<DailyChallenge>,
    course_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
    quest_index: HashMap<String, usize>,
    path_index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in course catalog
    pub fn builtin() -> Result<Self> {
        Self::from_parts(data::builtin_parts())
    }

    pub fn from_parts(parts: CatalogParts) -> Result<Self> {
        let levels = LevelTable::new(parts.levels)?;

        let mut categories = Vec::new();
        let mut courses = Vec::new();
        for (category, entries) in parts.categories {
            let mut names = Vec::new();
            for (name, link) in entries {
                names.push(name.clone());
                courses.push(Course {
                    name,
                    category: category.clone(),
                    link,
                });
            }
            categories.push(Category {
                name: category,
                courses: names,
            });
        }

        let catalog = Self {
            course_index: build_index(courses.iter().map(|c| c.name.as_str())),
            category_index: build_index(categories.iter().map(|c| c.name.as_str())),
            quest_index: build_index(parts.quests.iter().map(|q| q.name.as_str())),
            path_index: build_index(parts.learning_paths.iter().map(|p| p.name.as_str())),
            levels,
            categories,
            courses,
            skill_badges: parts.skill_badges,
            quests: parts.quests,
            learning_paths: parts.learning_paths,
            challenges: parts.challenges,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check name uniqueness and that every referenced course exists
    pub fn validate(&self) -> Result<()> {
        check_unique("course", self.courses.iter().map(|c| c.name.as_str()))?;
        check_unique("category", self.categories.iter().map(|c| c.name.as_str()))?;
        check_unique("quest", self.quests.iter().map(|q| q.name.as_str()))?;
        check_unique(
            "learning path",
            self.learning_paths.iter().map(|p| p.name.as_str()),
        )?;
        check_unique(
            "skill badge",
            self.skill_badges.iter().map(|b| b.name.as_str()),
        )?;

        for quest in &self.quests {
            self.check_courses_exist(&format!("quest '{}'", quest.name), &quest.required_courses)?;
        }
        for badge in &self.skill_badges {
            self.check_courses_exist(
                &format!("skill badge '{}'", badge.name),
                &badge.required_courses,
            )?;
        }
        for path in &self.learning_paths {
            if path.chapters.is_empty() {
                return Err(CoursebotError::Catalog(format!(
                    "learning path '{}' has no chapters",
                    path.name
                )));
            }
            for chapter in &path.chapters {
                if chapter.required_courses.is_empty() {
                    return Err(CoursebotError::Catalog(format!(
                        "chapter '{}' in '{}' has no courses",
                        chapter.title, path.name
                    )));
                }
                self.check_courses_exist(
                    &format!("chapter '{}' in '{}'", chapter.title, path.name),
                    &chapter.required_courses,
                )?;
            }
        }
        if self.challenges.is_empty() {
            return Err(CoursebotError::Catalog(
                "daily challenge pool is empty".to_string(),
            ));
        }
        Ok(())
    }

    fn check_courses_exist(&self, owner: &str, courses: &[String]) -> Result<()> {
        for course in courses {
            if self.find_course(course).is_none() {
                return Err(CoursebotError::Catalog(format!(
                    "{} references unknown course '{}'",
                    owner, course
                )));
            }
        }
        Ok(())
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All courses, grouped by category in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn skill_badges(&self) -> &[SkillBadgeRequirement] {
        &self.skill_badges
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn learning_paths(&self) -> &[LearningPath] {
        &self.learning_paths
    }

    pub fn challenges(&self) -> &[DailyChallenge] {
        &self.challenges
    }

    /// Case- and quote-insensitive course lookup
    pub fn find_course(&self, raw: &str) -> Option<&Course> {
        self.course_index
            .get(&name_key(raw))
            .map(|&idx| &self.courses[idx])
    }

    pub fn find_category(&self, raw: &str) -> Option<&Category> {
        self.category_index
            .get(&name_key(raw))
            .map(|&idx| &self.categories[idx])
    }

    pub fn find_quest(&self, raw: &str) -> Option<&Quest> {
        self.quest_index
            .get(&name_key(raw))
            .map(|&idx| &self.quests[idx])
    }

    pub fn find_path(&self, raw: &str) -> Option<&LearningPath> {
        self.path_index
            .get(&name_key(raw))
            .map(|&idx| &self.learning_paths[idx])
    }

    pub fn course_category(&self, name: &str) -> Option<&str> {
        self.find_course(name).map(|c| c.category.as_str())
    }

    /// Course link, or the generic course page when unknown
    pub fn course_link(&self, name: &str) -> &str {
        self.find_course(name)
            .map(|c| c.link.as_str())
            .unwrap_or(FALLBACK_LINK)
    }
}

fn build_index<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (idx, name) in names.enumerate() {
        // First entry wins; duplicates are reported by validate()
        index.entry(name_key(name)).or_insert(idx);
    }
    index
}

fn check_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name_key(name)) {
            return Err(CoursebotError::Catalog(format!(
                "duplicate {} name '{}'",
                kind, name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = catalog();
        let sizes: Vec<(&str, usize)> = catalog
            .categories()
            .iter()
            .map(|c| (c.name.as_str(), c.courses.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![
                ("Cybersecurity", 32),
                ("Data Science", 3),
                ("Web Development", 15),
                ("Business Management", 9)
            ]
        );
        assert_eq!(catalog.courses().len(), 59);
        assert_eq!(catalog.quests().len(), 10);
        assert_eq!(catalog.learning_paths().len(), 4);
        assert_eq!(catalog.skill_badges().len(), 4);
        assert_eq!(catalog.challenges().len(), 3);
        assert_eq!(catalog.levels().tiers().len(), 10);
    }

    #[test]
    fn test_case_and_quote_insensitive_lookup() {
        let catalog = catalog();
        for raw in [
            "python for everybody",
            "'Python for Everybody'",
            "  \"PYTHON FOR EVERYBODY\" ",
        ] {
            assert_eq!(catalog.find_course(raw).unwrap().name, "Python for Everybody");
        }
        assert!(catalog.find_course("Basket Weaving").is_none());
    }

    #[test]
    fn test_links_and_categories() {
        let catalog = catalog();
        assert_eq!(catalog.course_link("cia triad"), "https://example.com/cia-triad");
        assert_eq!(catalog.course_link("Unknown"), FALLBACK_LINK);
        assert_eq!(
            catalog.course_category("Leadership and Decision-Making"),
            Some("Business Management")
        );
        assert_eq!(catalog.course_category("Unknown"), None);
    }

    #[test]
    fn test_path_lookup() {
        let catalog = catalog();
        let path = catalog.find_path("cyber security 101").unwrap();
        assert_eq!(path.chapter_count(), 8);
        assert_eq!(path.difficulty, Difficulty::Advanced);
        assert_eq!(path.all_courses().count(), 32);
        assert_eq!(catalog.find_path("data science fundamentals").unwrap().chapter_count(), 2);
    }

    #[test]
    fn test_rejects_unknown_course_reference() {
        let mut parts = data::builtin_parts();
        parts.quests[0].required_courses.push("Underwater Basket Weaving".to_string());
        let err = Catalog::from_parts(parts).unwrap_err();
        assert!(err.to_string().contains("Underwater Basket Weaving"));
    }

    #[test]
    fn test_rejects_duplicate_quest() {
        let mut parts = data::builtin_parts();
        let mut dup = parts.quests[0].clone();
        dup.name = dup.name.to_uppercase();
        parts.quests.push(dup);
        assert!(Catalog::from_parts(parts).is_err());
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("  'CIA Triad' "), "CIA Triad");
        assert_eq!(clean_name("\u{201c}What is the Web?\u{201d}"), "What is the Web?");
        assert_eq!(name_key("Deploying a Website"), "deploying a website");
    }
}
