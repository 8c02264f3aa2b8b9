//! Intent Router - chat message to intent mapping
//!
//! Rules are ordered keyword-synonym checks on the lower-cased message. The
//! first rule that matches wins, so the more specific phrasings are checked
//! before the general ones ("show learning path progress" before "show
//! learning paths").

use coursebot_common::Catalog;

/// Feature sections of the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Courses,
    LearningPaths,
    Quests,
    Challenges,
    Progress,
    Leaderboard,
}

impl HelpTopic {
    pub const ALL: [HelpTopic; 6] = [
        HelpTopic::Courses,
        HelpTopic::LearningPaths,
        HelpTopic::Quests,
        HelpTopic::Challenges,
        HelpTopic::Progress,
        HelpTopic::Leaderboard,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            HelpTopic::Courses => "📚 Courses",
            HelpTopic::LearningPaths => "🛣️ Learning Paths",
            HelpTopic::Quests => "🎯 Quests",
            HelpTopic::Challenges => "🧩 Challenges",
            HelpTopic::Progress => "📈 Progress",
            HelpTopic::Leaderboard => "🏆 Leaderboard",
        }
    }
}

/// First match wins, so "learning path" must not be shadowed by "course"
const HELP_TOPIC_KEYWORDS: &[(&str, HelpTopic)] = &[
    ("course", HelpTopic::Courses),
    ("path", HelpTopic::LearningPaths),
    ("quest", HelpTopic::Quests),
    ("challenge", HelpTopic::Challenges),
    ("progress", HelpTopic::Progress),
    ("xp", HelpTopic::Progress),
    ("level", HelpTopic::Progress),
    ("badge", HelpTopic::Progress),
    ("leaderboard", HelpTopic::Leaderboard),
    ("ranking", HelpTopic::Leaderboard),
];

const HELP: &[&str] = &["help", "how to", "show commands for", "tell me about"];

const TRENDING_SHOW: &[&str] = &["show", "display", "provide", "tell me", "share", "can i see"];
const TRENDING: &[&str] = &["trending", "popular", "hot", "top-rated"];
const TRENDING_COURSES: &[&str] = &["course", "courses", "class", "classes", "program", "programs"];

const COURSE_LISTING: &[&str] = &["show", "display", "list"];

const COMPLETION: &[&str] = &["completed", "finished", "done with"];
const COMPLETION_COURSE: &[&str] = &["course", "program", "programme", "class"];

const SHOW: &[&str] = &["show", "display", "tell me", "my"];
const BADGE: &[&str] = &["badge", "badges"];
const LEVEL: &[&str] = &["level", "rank"];

const QUEST_START: &[&str] = &["start", "begin", "kick off", "go ahead with"];
const QUEST: &[&str] = &["quest", "quests"];
const QUEST_LIST: &[&str] = &[
    "show",
    "list",
    "provide",
    "display",
    "tell me",
    "what are",
    "can you show me",
    "could you display",
    "can i see",
];
const QUEST_PROGRESS: &[&str] = &["progress", "status", "advancement", "details", "info"];
const QUEST_DETAILS: &[&str] = &[
    "details",
    "information",
    "description",
    "info",
    "explain",
    "tell me more about",
];

const LEADERBOARD: &[&str] = &["leaderboard", "rankings", "scoreboard"];
const LEAVE: &[&str] = &["leave", "quit", "exit from", "withdraw from"];
const JOIN: &[&str] = &[
    "join",
    "be part of",
    "get on",
    "see my name on",
    "participate in",
    "add me to",
    "include me in",
    "be included in",
];

const PATH_START: &[&str] = &[
    "start",
    "begin",
    "kick off",
    "go ahead with",
    "undertake",
    "embark on",
];
const PATH_LIST: &[&str] = &["list", "show", "display", "view", "see", "what are"];
const PATH_CHECK: &[&str] = &["check", "update", "verify", "look at"];
const PATH_PROGRESS: &[&str] = &["progress", "status", "advancement", "development"];
const PATH_DETAILS: &[&str] = &[
    "details",
    "information",
    "description",
    "info",
    "courses",
    "explain",
    "tell me more about",
];
const PATH: &[&str] = &[
    "learning path",
    "learning paths",
    "path",
    "paths",
    "learning journey",
    "journey",
];

const PROFILE: &[&str] = &[
    "profile",
    "stats",
    "status",
    "info",
    "information",
    "summary",
    "overview",
];

/// User intent parsed from a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Leave the chat
    Exit,
    /// Every help section at once
    HelpAll,
    /// One help section, or the feature overview when no topic matched
    Help { topic: Option<HelpTopic> },
    /// A random sample of well-rated courses
    TrendingCourses,
    /// Top uncompleted courses per category
    ShowCourses,
    /// Every course of one category (canonical category name)
    ShowCategoryCourses { category: String },
    /// The learner's completed courses
    ShowCompletedCourses,
    /// Claim a course completion; `None` prompts for the name
    CompleteCourse { course: Option<String> },
    ShowXp,
    ShowBadges,
    ShowLevel,
    /// Present (or re-present) today's challenge
    DailyChallenge,
    /// Start a quest; `None` prompts for the name
    StartQuest { quest: Option<String> },
    /// Details of one quest (canonical name) or of all quests
    QuestDetails { quest: Option<String> },
    QuestProgress,
    ListQuests,
    ShowLeaderboard,
    LeaveLeaderboard,
    /// Join the board; `None` prompts for the nickname
    JoinLeaderboard { nickname: Option<String> },
    /// Progress of one path (canonical name) or of every started path
    PathProgress { path: Option<String> },
    /// Details of one path (canonical name) or of all paths
    PathDetails { path: Option<String> },
    /// Start a path; `None` prompts for the name
    StartPath { path: Option<String> },
    ListPaths,
    /// Re-evaluate chapter progress, optionally for one named path
    CheckChapter { path: Option<String> },
    /// Average rating of a course, by the name typed after "course rating"
    CourseRating { course: Option<String> },
    Profile,
    /// Nothing matched; falls through to challenge answers or recommendations
    Unrecognized,
}

/// Words that end the chat
pub fn is_exit(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "exit" | "quit" | "bye" | "goodbye"
    )
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// `word` as a whole token, so "xp" does not match inside "explorer"
fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Route a chat message to an intent.
///
/// The catalog resolves names mentioned inside a message (categories,
/// quests, paths), which keyword rules alone cannot.
pub fn route_intent(input: &str, catalog: &Catalog) -> Intent {
    let lower = input.trim().to_lowercase();

    if is_exit(&lower) {
        return Intent::Exit;
    }

    if lower == "help all" {
        return Intent::HelpAll;
    }
    if contains_any(&lower, HELP) {
        let topic = HELP_TOPIC_KEYWORDS
            .iter()
            .find(|(kw, _)| lower.contains(kw))
            .map(|(_, topic)| *topic);
        return Intent::Help { topic };
    }

    if contains_any(&lower, TRENDING_SHOW)
        && contains_any(&lower, TRENDING)
        && contains_any(&lower, TRENDING_COURSES)
    {
        return Intent::TrendingCourses;
    }

    if contains_any(&lower, COURSE_LISTING) && lower.contains("courses") {
        if lower.contains("completed") {
            return Intent::ShowCompletedCourses;
        }
        if let Some(category) = catalog
            .categories()
            .iter()
            .find(|c| lower.contains(&c.name.to_lowercase()))
        {
            return Intent::ShowCategoryCourses {
                category: category.name.clone(),
            };
        }
        return Intent::ShowCourses;
    }

    if contains_any(&lower, COMPLETION) && contains_any(&lower, COMPLETION_COURSE) {
        return Intent::CompleteCourse {
            course: non_empty(extract_after_keyword(input, COMPLETION_COURSE)),
        };
    }

    if contains_any(&lower, SHOW) && has_word(&lower, "xp") {
        return Intent::ShowXp;
    }
    if contains_any(&lower, SHOW) && contains_any(&lower, BADGE) {
        return Intent::ShowBadges;
    }
    if contains_any(&lower, SHOW) && contains_any(&lower, LEVEL) {
        return Intent::ShowLevel;
    }

    if lower.contains("daily") && lower.contains("challenge") {
        return Intent::DailyChallenge;
    }

    if contains_any(&lower, QUEST_START) && contains_any(&lower, QUEST) {
        return Intent::StartQuest {
            quest: non_empty(extract_after_keyword(input, QUEST)),
        };
    }

    if contains_any(&lower, QUEST_LIST) && contains_any(&lower, QUEST) {
        if contains_any(&lower, QUEST_DETAILS) {
            let quest = catalog
                .quests()
                .iter()
                .find(|q| lower.contains(&q.name.to_lowercase()))
                .map(|q| q.name.clone());
            return Intent::QuestDetails { quest };
        }
        if contains_any(&lower, QUEST_PROGRESS) {
            return Intent::QuestProgress;
        }
        return Intent::ListQuests;
    }

    if contains_any(&lower, TRENDING_SHOW) && contains_any(&lower, LEADERBOARD) {
        return Intent::ShowLeaderboard;
    }
    if contains_any(&lower, LEAVE) && contains_any(&lower, LEADERBOARD) {
        return Intent::LeaveLeaderboard;
    }
    if contains_any(&lower, JOIN) && contains_any(&lower, LEADERBOARD) {
        let keywords: Vec<&str> = LEADERBOARD.iter().chain(JOIN.iter()).copied().collect();
        return Intent::JoinLeaderboard {
            nickname: non_empty(extract_after_keyword(input, &keywords)),
        };
    }

    if let Some(intent) = route_path_intent(input, &lower, catalog) {
        return intent;
    }

    if lower.starts_with("course rating") {
        let course = lower
            .split_once("rating")
            .map(|(_, rest)| rest.to_string())
            .and_then(non_empty);
        return Intent::CourseRating { course };
    }

    if contains_any(&lower, SHOW) && contains_any(&lower, PROFILE) {
        return Intent::Profile;
    }

    Intent::Unrecognized
}

fn mentioned_path(lower: &str, catalog: &Catalog) -> Option<String> {
    catalog
        .learning_paths()
        .iter()
        .find(|p| lower.contains(&p.name.to_lowercase()))
        .map(|p| p.name.clone())
}

fn route_path_intent(input: &str, lower: &str, catalog: &Catalog) -> Option<Intent> {
    let listing_or_check = contains_any(lower, PATH_LIST) || contains_any(lower, PATH_CHECK);
    if (listing_or_check && contains_any(lower, PATH_PROGRESS) && contains_any(lower, PATH))
        || lower.contains("show learning path progress")
    {
        return Some(Intent::PathProgress {
            path: mentioned_path(lower, catalog),
        });
    }

    if (contains_any(lower, PATH_LIST) || lower.contains("get"))
        && contains_any(lower, PATH_DETAILS)
        && contains_any(lower, PATH)
    {
        return Some(Intent::PathDetails {
            path: mentioned_path(lower, catalog),
        });
    }

    if contains_any(lower, PATH_START) && contains_any(lower, PATH) {
        return Some(Intent::StartPath {
            path: non_empty(extract_after_keyword(input, PATH)),
        });
    }

    if contains_any(lower, PATH_LIST) && contains_any(lower, PATH) {
        return Some(Intent::ListPaths);
    }

    if contains_any(lower, PATH_CHECK)
        && contains_any(lower, &["chapter", "learning path progress"])
    {
        return Some(Intent::CheckChapter {
            path: mentioned_path(lower, catalog),
        });
    }

    None
}

/// Byte length of `needle` matched case-insensitively at the start of `hay`
fn match_len_ci(hay: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut hay_chars = hay.chars();
    for expected in needle.chars() {
        let c = hay_chars.next()?;
        let mut lowered = c.to_lowercase();
        if lowered.next() != Some(expected) || lowered.next().is_some() {
            return None;
        }
        len += c.len_utf8();
    }
    Some(len)
}

/// Right-most case-insensitive match of `needle`, as (start, byte length)
fn rfind_ci(hay: &str, needle: &str) -> Option<(usize, usize)> {
    hay.char_indices()
        .rev()
        .find_map(|(idx, _)| match_len_ci(&hay[idx..], needle).map(|len| (idx, len)))
}

/// Text after the right-most occurrence of any keyword.
///
/// The remainder keeps the message's original casing, is trimmed of spaces,
/// `.`, `:` and `-`, and loses one pair of matching surrounding quotes. Ties
/// on position go to the earlier keyword. Empty when no keyword occurs.
pub fn extract_after_keyword(message: &str, keywords: &[&str]) -> String {
    let mut best: Option<(usize, usize)> = None;
    for kw in keywords {
        if let Some(found) = rfind_ci(message, kw) {
            if best.map_or(true, |(idx, _)| found.0 > idx) {
                best = Some(found);
            }
        }
    }
    let Some((idx, len)) = best else {
        return String::new();
    };

    let remainder = message[idx + len..].trim_matches(|c| matches!(c, ' ' | '.' | ':' | '-'));
    strip_matching_quotes(remainder).to_string()
}

fn strip_matching_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(input: &str) -> Intent {
        let catalog = Catalog::builtin().unwrap();
        route_intent(input, &catalog)
    }

    #[test]
    fn test_extract_after_keyword() {
        assert_eq!(
            extract_after_keyword("I completed course Python for Everybody", &["course"]),
            "Python for Everybody"
        );
        assert_eq!(
            extract_after_keyword("start quest: 'Data Science Starter'.", &["quest", "quests"]),
            "Data Science Starter"
        );
        assert_eq!(extract_after_keyword("join leaderboard", &["leaderboard"]), "");
        assert_eq!(extract_after_keyword("nothing here", &["quest"]), "");
    }

    #[test]
    fn test_extract_keeps_original_case() {
        assert_eq!(
            extract_after_keyword("JOIN LEADERBOARD NeoRunner", &["leaderboard", "join"]),
            "NeoRunner"
        );
    }

    #[test]
    fn test_extract_prefers_rightmost_keyword() {
        // "path" occurs after "learning path" starts, so it wins
        assert_eq!(
            extract_after_keyword("start learning path Web Fundamentals", PATH),
            "Web Fundamentals"
        );
    }

    #[test]
    fn test_strip_quotes_needs_matching_pair() {
        assert_eq!(strip_matching_quotes("\"CIA Triad\""), "CIA Triad");
        assert_eq!(strip_matching_quotes("'CIA Triad\""), "'CIA Triad\"");
        assert_eq!(strip_matching_quotes("'"), "'");
    }

    #[test]
    fn test_exit_words() {
        assert_eq!(route("exit"), Intent::Exit);
        assert_eq!(route("  Bye "), Intent::Exit);
        assert_ne!(route("quit leaderboard"), Intent::Exit);
    }

    #[test]
    fn test_help_routing() {
        assert_eq!(route("help all"), Intent::HelpAll);
        assert_eq!(
            route("help quests"),
            Intent::Help {
                topic: Some(HelpTopic::Quests)
            }
        );
        assert_eq!(
            route("how to use learning paths"),
            Intent::Help {
                topic: Some(HelpTopic::LearningPaths)
            }
        );
        assert_eq!(route("help"), Intent::Help { topic: None });
    }

    #[test]
    fn test_course_listings() {
        assert_eq!(route("show trending courses"), Intent::TrendingCourses);
        assert_eq!(route("show courses"), Intent::ShowCourses);
        assert_eq!(route("show completed courses"), Intent::ShowCompletedCourses);
        assert_eq!(
            route("list data science courses"),
            Intent::ShowCategoryCourses {
                category: "Data Science".to_string()
            }
        );
    }

    #[test]
    fn test_course_completion() {
        assert_eq!(
            route("completed course CIA Triad"),
            Intent::CompleteCourse {
                course: Some("CIA Triad".to_string())
            }
        );
        assert_eq!(route("I finished a course"), Intent::CompleteCourse { course: None });
    }

    #[test]
    fn test_progress_lines() {
        assert_eq!(route("show xp"), Intent::ShowXp);
        assert_eq!(route("show my badges"), Intent::ShowBadges);
        assert_eq!(route("show level"), Intent::ShowLevel);
        assert_eq!(route("daily challenge"), Intent::DailyChallenge);
        assert_eq!(route("show profile"), Intent::Profile);
    }

    #[test]
    fn test_quest_routing() {
        assert_eq!(
            route("start quest Web Developer Starter"),
            Intent::StartQuest {
                quest: Some("Web Developer Starter".to_string())
            }
        );
        assert_eq!(route("begin a quest"), Intent::StartQuest { quest: None });
        assert_eq!(route("show quest details"), Intent::QuestDetails { quest: None });
        assert_eq!(
            route("show quest details cryptography explorer"),
            Intent::QuestDetails {
                quest: Some("Cryptography Explorer".to_string())
            }
        );
        assert_eq!(route("show quest progress"), Intent::QuestProgress);
        assert_eq!(route("list quests"), Intent::ListQuests);
    }

    #[test]
    fn test_leaderboard_routing() {
        assert_eq!(route("show leaderboard"), Intent::ShowLeaderboard);
        assert_eq!(route("leave leaderboard"), Intent::LeaveLeaderboard);
        assert_eq!(
            route("join leaderboard Neo"),
            Intent::JoinLeaderboard {
                nickname: Some("Neo".to_string())
            }
        );
        assert_eq!(route("add me to the scoreboard"), Intent::JoinLeaderboard { nickname: None });
    }

    #[test]
    fn test_path_routing() {
        assert_eq!(route("show learning path progress"), Intent::PathProgress { path: None });
        assert_eq!(
            route("show learning path details Web Fundamentals"),
            Intent::PathDetails {
                path: Some("Web Fundamentals".to_string())
            }
        );
        assert_eq!(
            route("start learning path management 101"),
            Intent::StartPath {
                path: Some("management 101".to_string())
            }
        );
        assert_eq!(route("embark on a journey"), Intent::StartPath { path: None });
        assert_eq!(route("list learning paths"), Intent::ListPaths);
        assert_eq!(route("check chapter completion"), Intent::CheckChapter { path: None });
    }

    #[test]
    fn test_course_rating_lookup() {
        assert_eq!(
            route("Course rating CIA Triad"),
            Intent::CourseRating {
                course: Some("cia triad".to_string())
            }
        );
        assert_eq!(route("course rating"), Intent::CourseRating { course: None });
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(route("I like data science"), Intent::Unrecognized);
        assert_eq!(route("42"), Intent::Unrecognized);
    }
}
