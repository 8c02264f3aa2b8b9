//! Course rating store
//!
//! Per-course (sum, count) aggregates of 1-5 star ratings. Aggregates are
//! created lazily and never deleted.

use crate::catalog::{Catalog, CHALLENGING_COURSES, FOUNDATIONAL_COURSES, POPULAR_COURSES};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub sum: u64,
    pub count: u64,
}

impl RatingAggregate {
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

pub trait RatingStore {
    /// Add one rating to a course's aggregate
    fn record(&mut self, course: &str, stars: u8);

    /// Aggregate for a course, zeroed when never rated
    fn aggregate(&self, course: &str) -> RatingAggregate;

    /// Replace an aggregate wholesale (used by seeding)
    fn set(&mut self, course: &str, aggregate: RatingAggregate);

    /// Every rated course with its aggregate, sorted by course name
    fn all(&self) -> Vec<(String, RatingAggregate)>;

    fn average(&self, course: &str) -> Option<f64> {
        self.aggregate(course).average()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRatings {
    aggregates: BTreeMap<String, RatingAggregate>,
}

impl InMemoryRatings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingStore for InMemoryRatings {
    fn record(&mut self, course: &str, stars: u8) {
        let agg = self.aggregates.entry(course.to_string()).or_default();
        agg.sum += u64::from(stars);
        agg.count += 1;
    }

    fn aggregate(&self, course: &str) -> RatingAggregate {
        self.aggregates.get(course).copied().unwrap_or_default()
    }

    fn set(&mut self, course: &str, aggregate: RatingAggregate) {
        self.aggregates.insert(course.to_string(), aggregate);
    }

    fn all(&self) -> Vec<(String, RatingAggregate)> {
        self.aggregates
            .iter()
            .map(|(name, agg)| (name.clone(), *agg))
            .collect()
    }
}

/// Cloneable handle serialising access to one rating table across sessions
#[derive(Debug, Clone, Default)]
pub struct SharedRatings {
    inner: Arc<Mutex<InMemoryRatings>>,
}

impl SharedRatings {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryRatings> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RatingStore for SharedRatings {
    fn record(&mut self, course: &str, stars: u8) {
        self.lock().record(course, stars)
    }

    fn aggregate(&self, course: &str) -> RatingAggregate {
        self.lock().aggregate(course)
    }

    fn set(&mut self, course: &str, aggregate: RatingAggregate) {
        self.lock().set(course, aggregate)
    }

    fn all(&self) -> Vec<(String, RatingAggregate)> {
        self.lock().all()
    }
}

/// Skewed towards 1.0: max of `draws` uniform samples
fn skewed_unit<R: Rng + ?Sized>(rng: &mut R, draws: usize) -> f64 {
    (0..draws.max(1))
        .map(|_| rng.gen::<f64>())
        .fold(0.0, f64::max)
}

fn total_for(avg: f64, count: u64) -> u64 {
    (avg * count as f64).round() as u64
}

/// Fill the store with plausible demo ratings for every catalog course.
///
/// Every course gets 5-30 ratings averaging 3.2-5.0, popular courses get
/// 25-50, foundational courses 30-45 averaging 4.5-5.0, and challenging
/// courses are pinned to a 3.5 average.
pub fn seed_demo_ratings<S, R>(store: &mut S, catalog: &Catalog, rng: &mut R)
where
    S: RatingStore + ?Sized,
    R: Rng + ?Sized,
{
    for course in catalog.courses() {
        let name = course.name.as_str();
        let mut count: u64 = if POPULAR_COURSES.contains(&name) {
            rng.gen_range(25..=50)
        } else {
            rng.gen_range(5..=30)
        };
        let mut avg = 3.2 + 1.8 * skewed_unit(rng, 2);

        if FOUNDATIONAL_COURSES.contains(&name) {
            count = rng.gen_range(30..=45);
            avg = 4.5 + 0.5 * skewed_unit(rng, 3);
        }
        if CHALLENGING_COURSES.contains(&name) {
            avg = 3.5;
        }

        store.set(
            name,
            RatingAggregate {
                sum: total_for(avg, count),
                count,
            },
        );
    }
    debug!(courses = catalog.courses().len(), "demo ratings seeded");
}

/// `"4.2/5 (12 ratings)"`, or `"No ratings yet"`
pub fn average_rating_text<S: RatingStore + ?Sized>(store: &S, course: &str) -> String {
    let agg = store.aggregate(course);
    match agg.average() {
        Some(avg) => format!("{:.1}/5 ({} ratings)", avg, agg.count),
        None => "No ratings yet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_record_accumulates() {
        let mut store = InMemoryRatings::new();
        assert_eq!(store.aggregate("CIA Triad"), RatingAggregate::default());
        store.record("CIA Triad", 3);
        store.record("CIA Triad", 5);
        assert_eq!(store.aggregate("CIA Triad"), RatingAggregate { sum: 8, count: 2 });
        assert_eq!(store.average("CIA Triad"), Some(4.0));
        assert_eq!(store.average("Other"), None);
    }

    #[test]
    fn test_rating_text() {
        let mut store = InMemoryRatings::new();
        assert_eq!(average_rating_text(&store, "CIA Triad"), "No ratings yet");
        store.set("CIA Triad", RatingAggregate { sum: 50, count: 12 });
        assert_eq!(average_rating_text(&store, "CIA Triad"), "4.2/5 (12 ratings)");
    }

    #[test]
    fn test_seed_ranges() {
        let catalog = Catalog::builtin().unwrap();
        let mut store = InMemoryRatings::new();
        let mut rng = StdRng::seed_from_u64(42);
        seed_demo_ratings(&mut store, &catalog, &mut rng);

        assert_eq!(store.all().len(), catalog.courses().len());
        for course in catalog.courses() {
            let agg = store.aggregate(&course.name);
            assert!((5..=50).contains(&agg.count), "{} count {}", course.name, agg.count);
            let avg = agg.average().unwrap();
            assert!((3.0..=5.0).contains(&avg), "{} avg {}", course.name, avg);
        }
        for name in POPULAR_COURSES {
            assert!(store.aggregate(name).count >= 25);
        }
        for name in FOUNDATIONAL_COURSES {
            let agg = store.aggregate(name);
            assert!((30..=45).contains(&agg.count));
            assert!(agg.average().unwrap() >= 4.45);
        }
        for name in CHALLENGING_COURSES {
            let agg = store.aggregate(name);
            assert_eq!(agg.sum, (3.5 * agg.count as f64).round() as u64);
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let mut a = InMemoryRatings::new();
        let mut b = InMemoryRatings::new();
        seed_demo_ratings(&mut a, &catalog, &mut StdRng::seed_from_u64(9));
        seed_demo_ratings(&mut b, &catalog, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.all(), b.all());
    }

    #[test]
    fn test_shared_ratings() {
        let mut one = SharedRatings::new();
        let two = one.clone();
        one.record("Symmetric Encryption", 4);
        assert_eq!(two.aggregate("Symmetric Encryption").count, 1);
    }
}
