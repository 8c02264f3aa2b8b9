//! Process-wide stores shared by every learner session.

pub mod leaderboard;
pub mod ratings;

pub use leaderboard::{
    nickname_key, InMemoryLeaderboard, LeaderboardEntry, LeaderboardStore, SharedLeaderboard,
};
pub use ratings::{
    average_rating_text, seed_demo_ratings, InMemoryRatings, RatingAggregate, RatingStore,
    SharedRatings,
};
