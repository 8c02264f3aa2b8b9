//! Chat session - one learner's conversation
//!
//! A turn runs in a fixed order: streak update, a pending prompt's answer,
//! the daily challenge, then normal dispatch. Progression checks queued
//! during the turn are settled at its end, unless a course completion asks
//! for a rating first. Settling then waits for `submit_rating` or
//! `skip_rating`.

use crate::intent_router::{route_intent, Intent};
use crate::views;
use crate::views::courses::{
    available_courses, category_courses, completed_courses, course_rating, trending_courses,
};
use crate::views::help::{help, help_all};
use crate::views::leaderboard::leaderboard_table;
use crate::views::paths::{list_paths, missing_path_prompt, path_details, path_progress};
use crate::views::profile::profile;
use crate::views::quests::{list_quests, missing_quest_prompt, quest_details, quest_progress};
use crate::views::recommend::recommend;
use chrono::NaiveDate;
use coursebot_common::progression::parse_stars;
use coursebot_common::stores::seed_demo_ratings;
use coursebot_common::{
    update_streak, Catalog, CoursebotConfig, JoinOutcome, LearnerState, PendingAction,
    ProgressionEngine, SharedLeaderboard, SharedRatings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::debug;

pub const FAREWELL: &str = "👋 Goodbye! Keep learning and come back for tomorrow's challenge.";

const MISSING_COURSE_PROMPT: &str = "It seems like you forgot to include the course name, no worries!\n\n\
     Please type the name of the course you've completed.\n\n\
     If you need to see available courses, use: 'show courses'";

const NICKNAME_PROMPT: &str = "🤩 Absolutely! Can I please have your nickname?";

const RATING_USAGE: &str = "Usage: 'course rating <course name>'.";

const CHALLENGE_ERROR: &str = "🚫 Unexpected error. Please try again.";

/// Messages produced by one turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub messages: Vec<String>,
    /// Course waiting for a rating; checks stay queued until it is rated
    /// or skipped
    pub rating_target: Option<String>,
}

impl Reply {
    fn text(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            rating_target: None,
        }
    }
}

pub fn rating_prompt(course: &str) -> String {
    format!("⭐ Please rate '{}' from 1 to 5 stars! ⭐", course)
}

/// Digits or a row of stars
fn rating_value(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    parse_stars(raw)
        .map(u32::from)
        .or_else(|| raw.parse::<u32>().ok())
}

pub struct ChatSession {
    learner: LearnerState,
    engine: ProgressionEngine,
    leaderboard: SharedLeaderboard,
    ratings: SharedRatings,
    config: CoursebotConfig,
    rng: StdRng,
}

impl ChatSession {
    pub fn new(
        engine: ProgressionEngine,
        leaderboard: SharedLeaderboard,
        ratings: SharedRatings,
        config: CoursebotConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            learner: LearnerState::new(),
            engine,
            leaderboard,
            ratings,
            config,
            rng,
        }
    }

    /// Fresh session over the built-in catalog with its own stores.
    ///
    /// Demo ratings are seeded when enabled. A configured `rng_seed` makes
    /// every random pick reproducible.
    pub fn from_config(config: CoursebotConfig) -> coursebot_common::Result<Self> {
        let catalog = Arc::new(Catalog::builtin()?);
        let engine = ProgressionEngine::new(Arc::clone(&catalog), config.rewards.clone());
        let mut rng = match config.ratings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut ratings = SharedRatings::new();
        if config.ratings.seed_demo_ratings {
            seed_demo_ratings(&mut ratings, &catalog, &mut rng);
        }
        Ok(Self::new(engine, SharedLeaderboard::new(), ratings, config, rng))
    }

    pub fn learner(&self) -> &LearnerState {
        &self.learner
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn leaderboard(&self) -> &SharedLeaderboard {
        &self.leaderboard
    }

    pub fn ratings(&self) -> &SharedRatings {
        &self.ratings
    }

    pub fn config(&self) -> &CoursebotConfig {
        &self.config
    }

    /// Course waiting for a rating, if any
    pub fn awaiting_rating(&self) -> Option<&str> {
        match &self.learner.pending_action {
            Some(PendingAction::RateCourse(course)) => Some(course),
            _ => None,
        }
    }

    /// Handle one chat message.
    ///
    /// While a rating is pending, a message that reads as a rating is
    /// submitted; anything else drops the rating and is handled normally.
    pub fn handle(&mut self, message: &str, today: NaiveDate) -> Reply {
        update_streak(&mut self.learner, today);
        let message = message.trim();

        if self.awaiting_rating().is_some() && rating_value(message).is_some() {
            return self.submit_rating(message);
        }

        let mut reply = self.respond(message, today);
        match &reply.rating_target {
            Some(course) => {
                self.learner.pending_action = Some(PendingAction::RateCourse(course.clone()));
                reply.messages.push(rating_prompt(course));
            }
            None => reply.messages.extend(self.settle()),
        }
        reply
    }

    /// Rate the pending course.
    ///
    /// An unreadable or out-of-range value keeps the rating pending.
    pub fn submit_rating(&mut self, value: &str) -> Reply {
        let Some(course) = self.awaiting_rating().map(str::to_string) else {
            return Reply::text("There is no course waiting for a rating.");
        };
        let stars = match rating_value(value) {
            Some(stars) if (1..=5).contains(&stars) => stars,
            _ => {
                return Reply::text(format!(
                    "Please provide a rating between 1 and 5 for '{}'.",
                    course
                ))
            }
        };

        self.learner.pending_action = None;
        let mut reply = Reply::text(self.engine.rate_course(
            &mut self.learner,
            &mut self.ratings,
            &course,
            &stars.to_string(),
        ));
        reply.messages.extend(self.settle());
        reply
    }

    /// Drop the pending rating and deliver the deferred messages
    pub fn skip_rating(&mut self) -> Reply {
        if self.awaiting_rating().is_some() {
            self.learner.pending_action = None;
        }
        Reply {
            messages: self.settle(),
            rating_target: None,
        }
    }

    fn settle(&mut self) -> Vec<String> {
        self.engine.settle(&mut self.learner, &mut self.leaderboard)
    }

    fn respond(&mut self, message: &str, today: NaiveDate) -> Reply {
        // The message answers the question the previous turn asked
        match self.learner.pending_action.take() {
            Some(PendingAction::CompleteCourse) => return self.complete_course(message),
            Some(PendingAction::StartQuest) => {
                return Reply::text(self.engine.start_quest(&mut self.learner, message))
            }
            Some(PendingAction::StartLearningPath) => {
                return Reply::text(self.engine.start_learning_path(&mut self.learner, message))
            }
            Some(PendingAction::JoinLeaderboard) => return self.join(message, true),
            Some(PendingAction::RateCourse(course)) => {
                debug!(learner = %self.learner.id, course = %course, "rating dropped");
            }
            None => {}
        }

        let intent = route_intent(message, self.engine.catalog());
        if self.learner.challenge.is_active() && matches!(intent, Intent::Unrecognized) {
            return Reply::text(
                self.engine
                    .check_challenge_answer(&mut self.learner, message)
                    .unwrap_or_else(|| CHALLENGE_ERROR.to_string()),
            );
        }
        debug!(?intent, "dispatching");
        self.dispatch(intent, message, today)
    }

    fn complete_course(&mut self, course: &str) -> Reply {
        let completion = self.engine.complete_course(&mut self.learner, course);
        Reply {
            messages: vec![completion.message],
            rating_target: completion.rating_target,
        }
    }

    /// A successful join is followed by the board with the new entry on it.
    /// `reprompt` asks for another nickname when this one is taken.
    fn join(&mut self, nickname: &str, reprompt: bool) -> Reply {
        let outcome = self
            .engine
            .join_leaderboard(&mut self.learner, &mut self.leaderboard, nickname);
        match outcome {
            JoinOutcome::Joined(message) => Reply {
                messages: vec![
                    message,
                    leaderboard_table(
                        &self.leaderboard,
                        &self.learner,
                        self.config.leaderboard.effective_top_n(),
                    ),
                ],
                rating_target: None,
            },
            JoinOutcome::NicknameTaken(message) => {
                if reprompt {
                    self.learner.pending_action = Some(PendingAction::JoinLeaderboard);
                }
                Reply::text(message)
            }
            other => Reply::text(other.into_message()),
        }
    }

    fn ask(&mut self, action: PendingAction, prompt: String) -> Reply {
        self.learner.pending_action = Some(action);
        Reply::text(prompt)
    }

    fn dispatch(&mut self, intent: Intent, message: &str, today: NaiveDate) -> Reply {
        let catalog = self.engine.catalog();
        let learner = &self.learner;
        let text = match intent {
            Intent::Exit => FAREWELL.to_string(),
            Intent::HelpAll => help_all(),
            Intent::Help { topic } => help(topic),
            Intent::TrendingCourses => trending_courses(catalog, &self.ratings, &mut self.rng),
            Intent::ShowCourses => available_courses(catalog, learner, &self.ratings),
            Intent::ShowCategoryCourses { category } => {
                category_courses(catalog, learner, &self.ratings, &category)
            }
            Intent::ShowCompletedCourses => completed_courses(catalog, learner, &self.ratings),
            Intent::CompleteCourse { course: Some(course) } => return self.complete_course(&course),
            Intent::CompleteCourse { course: None } => {
                return self.ask(PendingAction::CompleteCourse, MISSING_COURSE_PROMPT.to_string())
            }
            Intent::ShowXp => views::xp_line(learner),
            Intent::ShowBadges => views::badges_line(learner),
            Intent::ShowLevel => views::level_line(learner, catalog.levels()),
            Intent::DailyChallenge => {
                self.engine
                    .present_challenge(&mut self.learner, today, &mut self.rng)
            }
            Intent::StartQuest { quest: Some(quest) } => {
                self.engine.start_quest(&mut self.learner, &quest)
            }
            Intent::StartQuest { quest: None } => {
                let prompt = missing_quest_prompt(catalog, learner);
                return self.ask(PendingAction::StartQuest, prompt);
            }
            Intent::QuestDetails { quest } => quest_details(catalog, learner, quest.as_deref()),
            Intent::QuestProgress => quest_progress(catalog, learner),
            Intent::ListQuests => list_quests(catalog, learner),
            Intent::ShowLeaderboard => leaderboard_table(
                &self.leaderboard,
                learner,
                self.config.leaderboard.effective_top_n(),
            ),
            Intent::LeaveLeaderboard => self
                .engine
                .leave_leaderboard(&mut self.learner, &mut self.leaderboard),
            Intent::JoinLeaderboard {
                nickname: Some(nickname),
            } => return self.join(&nickname, false),
            Intent::JoinLeaderboard { nickname: None } => {
                if learner.nickname.is_none() {
                    return self.ask(PendingAction::JoinLeaderboard, NICKNAME_PROMPT.to_string());
                }
                self.engine
                    .join_leaderboard(&mut self.learner, &mut self.leaderboard, "")
                    .into_message()
            }
            Intent::PathProgress { path } => path_progress(catalog, learner, path.as_deref()),
            Intent::PathDetails { path } => path_details(catalog, learner, path.as_deref()),
            Intent::StartPath { path: Some(path) } => {
                self.engine.start_learning_path(&mut self.learner, &path)
            }
            Intent::StartPath { path: None } => {
                let prompt = missing_path_prompt(catalog, learner);
                return self.ask(PendingAction::StartLearningPath, prompt);
            }
            Intent::ListPaths => list_paths(catalog, learner),
            Intent::CheckChapter { path } => {
                let mut messages =
                    self.engine
                        .evaluate_chapter_completion(&mut self.learner, path.as_deref(), true);
                messages.extend(self.engine.evaluate_path_completion(&mut self.learner));
                messages.join("\n\n")
            }
            Intent::CourseRating { course: Some(course) } => {
                course_rating(catalog, &self.ratings, &course)
            }
            Intent::CourseRating { course: None } => RATING_USAGE.to_string(),
            Intent::Profile => profile(catalog, learner, &self.leaderboard),
            Intent::Unrecognized => recommend(message).to_string(),
        };
        Reply::text(text)
    }
}
