//! Clock and random implementations.

use std::sync::{Mutex, PoisonError};

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Seeded random - the same seed replays the same games.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scripted random for testing.
///
/// Replays `gen_range` values in order and falls back to `min` once the
/// script runs out. UUIDs are always nil.
#[cfg(test)]
pub struct ScriptedRandom(Mutex<std::collections::VecDeque<i32>>);

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self(Mutex::new(values.into_iter().collect()))
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn gen_range(&self, min: i32, _max: i32) -> i32 {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(min)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..1_000 {
            let value = random.gen_range(1, 100);
            assert!((1..=100).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        assert_eq!(SystemRandom::new().gen_range(7, 7), 7);
        assert_eq!(SeededRandom::new(1).gen_range(9, 3), 9);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let rolls_a: Vec<i32> = (0..20).map(|_| a.gen_range(1, 100)).collect();
        let rolls_b: Vec<i32> = (0..20).map(|_| b.gen_range(1, 100)).collect();

        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|v| (1..=100).contains(v)));
        assert_eq!(a.gen_uuid(), b.gen_uuid());
    }

    #[test]
    fn seeded_uuid_is_v4() {
        let uuid = SeededRandom::new(7).gen_uuid();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn scripted_random_replays_then_falls_back() {
        let random = ScriptedRandom::new([5, 6]);
        assert_eq!(random.gen_range(1, 100), 5);
        assert_eq!(random.gen_range(1, 100), 6);
        assert_eq!(random.gen_range(3, 100), 3);
        assert!(random.gen_uuid().is_nil());
    }
}
