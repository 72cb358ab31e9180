//! Timing source for the emission loop.

use std::time::Duration;

use rand::Rng;

const WARMUP: Duration = Duration::from_secs(10);
const INTERVAL_MIN_MS: u64 = 45_000;
const INTERVAL_MAX_MS: u64 = 90_000;

/// Decides when the hub emits. Injected so tests can substitute a
/// deterministic source instead of waiting on the wall clock.
pub trait Schedule: Send + Sync {
    /// Delay before the very first emission after `start()`.
    fn warmup(&self) -> Duration;

    /// Delay until the next periodic emission. Called again after every tick,
    /// so randomized implementations re-draw each time.
    fn next_interval(&self) -> Duration;
}

/// Production schedule: fixed 10 s warm-up, then a uniform 45–90 s interval
/// re-drawn after each emission.
#[derive(Debug, Default)]
pub struct RandomizedSchedule;

impl Schedule for RandomizedSchedule {
    fn warmup(&self) -> Duration {
        WARMUP
    }

    fn next_interval(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(INTERVAL_MIN_MS..=INTERVAL_MAX_MS);
        Duration::from_millis(ms)
    }
}

/// Fixed delays for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedSchedule {
    pub warmup: Duration,
    pub interval: Duration,
}

impl Schedule for FixedSchedule {
    fn warmup(&self) -> Duration {
        self.warmup
    }

    fn next_interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randomized_interval_stays_in_bounds() {
        let schedule = RandomizedSchedule;
        assert_eq!(schedule.warmup(), Duration::from_secs(10));
        for _ in 0..100 {
            let interval = schedule.next_interval();
            assert!(interval >= Duration::from_millis(INTERVAL_MIN_MS));
            assert!(interval <= Duration::from_millis(INTERVAL_MAX_MS));
        }
    }
}
