//! Daily activity streaks.

use crate::learner::LearnerState;
use chrono::NaiveDate;
use tracing::debug;

/// Record activity for `today`. Same-day calls are no-ops.
///
/// A next-day call extends the streak; any other date (a gap, or a date
/// before the last recorded one) restarts it at 1 without touching the
/// longest streak.
pub fn update_streak(learner: &mut LearnerState, today: NaiveDate) {
    let streak = &mut learner.streak;
    let Some(last) = streak.last_active else {
        streak.current = 1;
        streak.longest = streak.longest.max(1);
        streak.last_active = Some(today);
        return;
    };

    if last == today {
        return;
    }

    if today.signed_duration_since(last).num_days() == 1 {
        streak.current += 1;
        streak.longest = streak.longest.max(streak.current);
    } else {
        debug!(last = %last, today = %today, "streak reset");
        streak.current = 1;
    }
    streak.last_active = Some(today);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity() {
        let mut learner = LearnerState::new();
        update_streak(&mut learner, day(1));
        assert_eq!(learner.streak.current, 1);
        assert_eq!(learner.streak.longest, 1);
        assert_eq!(learner.streak.last_active, Some(day(1)));
    }

    #[test]
    fn test_consecutive_days() {
        let mut learner = LearnerState::new();
        for d in 1..=4 {
            update_streak(&mut learner, day(d));
        }
        assert_eq!(learner.streak.current, 4);
        assert_eq!(learner.streak.longest, 4);
    }

    #[test]
    fn test_same_day_noop() {
        let mut learner = LearnerState::new();
        update_streak(&mut learner, day(1));
        update_streak(&mut learner, day(2));
        let before = learner.streak.clone();
        update_streak(&mut learner, day(2));
        assert_eq!(learner.streak, before);
    }

    #[test]
    fn test_gap_resets() {
        let mut learner = LearnerState::new();
        update_streak(&mut learner, day(1));
        update_streak(&mut learner, day(2));
        update_streak(&mut learner, day(3));
        update_streak(&mut learner, day(6));
        assert_eq!(learner.streak.current, 1);
        assert_eq!(learner.streak.longest, 3);
        assert_eq!(learner.streak.last_active, Some(day(6)));
    }

    #[test]
    fn test_earlier_date_treated_as_gap() {
        let mut learner = LearnerState::new();
        update_streak(&mut learner, day(10));
        update_streak(&mut learner, day(11));
        update_streak(&mut learner, day(5));
        assert_eq!(learner.streak.current, 1);
        assert_eq!(learner.streak.longest, 2);
        assert_eq!(learner.streak.last_active, Some(day(5)));
    }
}
