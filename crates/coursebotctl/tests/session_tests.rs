//! Multi-turn chat flows through the public session API.

use chrono::NaiveDate;
use coursebot_common::config::RewardSettings;
use coursebot_common::{
    Catalog, CoursebotConfig, LeaderboardStore, ProgressionEngine, SharedLeaderboard,
    SharedRatings,
};
use coursebotctl::session::{rating_prompt, ChatSession, FAREWELL};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn quiet_config() -> CoursebotConfig {
    let mut config = CoursebotConfig::default();
    config.ratings.seed_demo_ratings = false;
    config.ratings.rng_seed = Some(42);
    config
}

fn session() -> ChatSession {
    ChatSession::from_config(quiet_config()).unwrap()
}

/// Two learners sharing one leaderboard and rating table
fn shared_pair() -> (ChatSession, ChatSession, SharedLeaderboard) {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let engine = ProgressionEngine::new(catalog, RewardSettings::default());
    let board = SharedLeaderboard::new();
    let ratings = SharedRatings::new();
    let a = ChatSession::new(
        engine.clone(),
        board.clone(),
        ratings.clone(),
        quiet_config(),
        StdRng::seed_from_u64(1),
    );
    let b = ChatSession::new(
        engine,
        board.clone(),
        ratings,
        quiet_config(),
        StdRng::seed_from_u64(2),
    );
    (a, b, board)
}

#[test]
fn join_prompt_rearms_on_taken_nickname() {
    let (mut neo, mut other, board) = shared_pair();
    let reply = neo.handle("join leaderboard Neo", date(1));
    assert!(reply.messages[0].contains("successfully joined the leaderboard as 'Neo'"));

    let reply = other.handle("join leaderboard", date(1));
    assert_eq!(reply.messages[0], "🤩 Absolutely! Can I please have your nickname?");

    let reply = other.handle("neo", date(1));
    assert_eq!(reply.messages[0], "Nickname is taken. Please choose another.");

    let reply = other.handle("Trinity", date(1));
    assert!(reply.messages[0].contains("'Trinity'"));
    // The updated board follows the confirmation
    assert!(reply.messages[1].starts_with("## 🏆 Leaderboard 🏆"));
    assert!(reply.messages[1].contains("Neo"));
    assert!(reply.messages[1].contains("Trinity"));
    assert_eq!(board.entries().len(), 2);
    assert_eq!(other.learner().nickname.as_deref(), Some("Trinity"));
}

#[test]
fn join_without_name_when_already_joined() {
    let mut s = session();
    s.handle("join leaderboard Ada", date(1));
    let reply = s.handle("join leaderboard", date(1));
    assert_eq!(reply.messages[0], "You are already on the leaderboard as 'Ada'.");
}

#[test]
fn leaderboard_follows_xp_after_settle() {
    let (mut neo, _, board) = shared_pair();
    neo.handle("join leaderboard Neo", date(1));
    neo.handle("completed course CIA Triad", date(1));
    // Checks wait for the rating step
    assert_eq!(board.find(neo.learner().id).unwrap().xp, 0);
    neo.skip_rating();
    assert_eq!(board.find(neo.learner().id).unwrap().xp, 50);

    let reply = neo.handle("leave leaderboard", date(1));
    assert!(reply.messages[0].contains("(Nickname was: Neo)"));
    assert!(board.entries().is_empty());
}

#[test]
fn missing_course_name_is_asked_for() {
    let mut s = session();
    let reply = s.handle("I finished a course", date(1));
    assert!(reply.messages[0].starts_with("It seems like you forgot to include the course name"));
    assert!(reply.rating_target.is_none());

    let reply = s.handle("CIA Triad", date(1));
    assert_eq!(reply.rating_target.as_deref(), Some("CIA Triad"));
    assert_eq!(reply.messages.last().unwrap(), &rating_prompt("CIA Triad"));
    assert_eq!(s.learner().xp, 50);
}

#[test]
fn quest_rewards_arrive_after_rating() {
    let mut s = session();
    s.handle("start quest Data Science Starter", date(1));
    s.handle("completed course Python for Everybody", date(1));
    s.skip_rating();
    s.handle("completed course Intro to Data Science", date(1));

    let reply = s.submit_rating("5");
    assert!(reply.messages[0].contains("'Intro to Data Science' 5/5 stars"));
    assert!(reply
        .messages
        .iter()
        .any(|m| m.contains("'Data Science Starter' Quest")));
    assert!(reply.messages.iter().any(|m| m.contains("0x2 [Explorer]")));
    assert!(s.learner().has_badge("Data Science Starter Badge"));
    assert_eq!(s.learner().xp, 210);
}

#[test]
fn daily_challenge_answer_flow() {
    let mut s = session();
    let reply = s.handle("daily challenge", date(3));
    assert!(reply.messages[0].starts_with("🧩 Today's Challenge:"));
    let challenge = s.learner().challenge.current.clone().unwrap();

    // A recognised command still works while the challenge is open
    let reply = s.handle("show xp", date(3));
    assert_eq!(reply.messages[0], "Your current XP ✨: 0");

    let reply = s.handle("definitely wrong", date(3));
    assert_eq!(reply.messages[0], "🤔 That doesn't seem right. Try again!");

    let reply = s.handle(&challenge.answer.to_uppercase(), date(3));
    assert!(reply.messages[0].starts_with("✅ Correct!"));
    assert_eq!(s.learner().xp, challenge.reward_xp);

    let reply = s.handle("daily challenge", date(3));
    assert_eq!(reply.messages[0], "You've already completed today's challenge!");
}

#[test]
fn streak_counts_distinct_days() {
    let mut s = session();
    s.handle("show xp", date(1));
    s.handle("show xp", date(1));
    s.handle("show xp", date(2));
    assert_eq!(s.learner().streak.current, 2);
    s.handle("show xp", date(5));
    assert_eq!(s.learner().streak.current, 1);
    assert_eq!(s.learner().streak.longest, 2);
}

#[test]
fn free_text_gets_recommendation() {
    let mut s = session();
    let reply = s.handle("I want to learn javascript", date(1));
    assert!(reply.messages[0].starts_with("Web development is a fantastic choice!"));
}

#[test]
fn exit_word_gets_farewell() {
    let mut s = session();
    assert_eq!(s.handle("goodbye", date(1)).messages, vec![FAREWELL]);
}

#[test]
fn missing_path_name_is_asked_for() {
    let mut s = session();
    s.handle("start learning path", date(1));
    let reply = s.handle("Web Fundamentals", date(1));
    assert!(reply.messages[0].contains("Web Fundamentals"));
    assert!(s.learner().paths.contains_key("Web Fundamentals"));
}

#[test]
fn config_file_rewards_reach_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[rewards]\ncourse_completion_xp = 75\n\n[ratings]\nseed_demo_ratings = false\nrng_seed = 9\n",
    )
    .unwrap();

    let config = CoursebotConfig::load(Some(path.as_path())).unwrap();
    let mut s = ChatSession::from_config(config).unwrap();
    let reply = s.handle("completed course CIA Triad", date(1));
    assert!(reply.messages[0].contains("You earned 75 XP."));
    assert_eq!(s.learner().xp, 75);
}
