//! Dual-bar "Redis vs SQL" progress race.
//!
//! A cosmetic animation comparing two simulated query latencies. On start,
//! both lanes advance from 0 to 100 on independent 25ms deadlines, each
//! gaining a fixed base plus uniform jitter per tick, clamped at 100. A
//! lane's deadline self-cancels the instant it reaches the bound; once both
//! lanes are done a single trailing deadline clears the running flag so the
//! race can be triggered again.
//!
//! Clocked externally like the typewriter: `advance(now, rng)` processes all
//! due ticks. The per-lane displayed latency is derived from progress and
//! the lane's nominal duration, not tracked separately.

use std::time::{Duration, Instant};

use rand::Rng;

/// Per-lane tick period
pub const TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Delay between the slower lane finishing and the race settling
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Simulated SQL query duration at 100% progress
pub const SQL_NOMINAL_MS: f64 = 120.0;

/// Simulated Redis lookup duration at 100% progress
pub const REDIS_NOMINAL_MS: f64 = 15.0;

// Per-tick increments: base + uniform jitter in [0, jitter)
const SQL_BASE: f64 = 2.0;
const SQL_JITTER: f64 = 6.0;
const REDIS_BASE: f64 = 8.0;
const REDIS_JITTER: f64 = 15.0;

/// Race lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RacePhase {
    #[default]
    Idle,
    Running,
    Settled,
}

/// One progress lane with its own repeating deadline
struct Lane {
    base: f64,
    jitter: f64,
    progress: f64,
    next_due: Option<Instant>,
}

impl Lane {
    fn new(base: f64, jitter: f64) -> Self {
        Self {
            base,
            jitter,
            progress: 0.0,
            next_due: None,
        }
    }

    fn arm(&mut self, now: Instant) {
        self.progress = 0.0;
        self.next_due = Some(now + TICK_INTERVAL);
    }

    fn is_done(&self) -> bool {
        self.progress >= 100.0
    }

    /// Process due ticks; returns when the lane crossed the bound, if it did
    fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<Instant> {
        let mut finished_at = None;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            let gain = self.base + rng.random_range(0.0..self.jitter);
            self.progress = (self.progress + gain).min(100.0);
            if self.is_done() {
                self.next_due = None;
                finished_at = Some(due);
            } else {
                self.next_due = Some(due + TICK_INTERVAL);
            }
        }
        finished_at
    }
}

/// The race state machine
pub struct ProgressRace {
    sql: Lane,
    redis: Lane,
    phase: RacePhase,
    has_run: bool,
    settle_due: Option<Instant>,
}

impl ProgressRace {
    pub fn new() -> Self {
        Self {
            sql: Lane::new(SQL_BASE, SQL_JITTER),
            redis: Lane::new(REDIS_BASE, REDIS_JITTER),
            phase: RacePhase::Idle,
            has_run: false,
            settle_due: None,
        }
    }

    /// Trigger the race. No-op while already running, so a second trigger
    /// can never arm a second pair of lane deadlines.
    pub fn start(&mut self, now: Instant) {
        if self.phase == RacePhase::Running {
            return;
        }
        self.phase = RacePhase::Running;
        self.has_run = true;
        self.settle_due = None;
        self.sql.arm(now);
        self.redis.arm(now);
    }

    /// Process every lane tick and the settle deadline due by `now`
    pub fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        if self.phase != RacePhase::Running {
            return;
        }

        let sql_finish = self.sql.advance(now, rng);
        let redis_finish = self.redis.advance(now, rng);

        if self.settle_due.is_none() && self.sql.is_done() && self.redis.is_done() {
            // Anchor the trailing delay on the lane that finished last
            let anchor = match (sql_finish, redis_finish) {
                (Some(a), Some(b)) => a.max(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => now,
            };
            self.settle_due = Some(anchor + SETTLE_DELAY);
        }

        if let Some(due) = self.settle_due {
            if due <= now {
                self.settle_due = None;
                self.phase = RacePhase::Settled;
            }
        }
    }

    /// Cancel all outstanding deadlines (teardown)
    pub fn stop(&mut self) {
        self.sql.next_due = None;
        self.redis.next_due = None;
        self.settle_due = None;
        if self.phase == RacePhase::Running {
            self.phase = RacePhase::Idle;
        }
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RacePhase::Running
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    pub fn sql_progress(&self) -> f64 {
        self.sql.progress
    }

    pub fn redis_progress(&self) -> f64 {
        self.redis.progress
    }

    /// Displayed SQL latency: nominal duration scaled by progress
    pub fn sql_latency_ms(&self) -> f64 {
        SQL_NOMINAL_MS * self.sql.progress / 100.0
    }

    /// Displayed Redis latency: nominal duration scaled by progress
    pub fn redis_latency_ms(&self) -> f64 {
        REDIS_NOMINAL_MS * self.redis.progress / 100.0
    }
}

impl Default for ProgressRace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_start_marks_running_and_has_run() {
        let now = Instant::now();
        let mut race = ProgressRace::new();
        assert_eq!(race.phase(), RacePhase::Idle);
        assert!(!race.has_run());

        race.start(now);
        assert_eq!(race.phase(), RacePhase::Running);
        assert!(race.has_run());
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut race = ProgressRace::new();

        race.start(now);
        race.advance(now + Duration::from_millis(100), &mut rng);
        let sql = race.sql_progress();
        let redis = race.redis_progress();
        assert!(sql > 0.0);

        // A second trigger mid-run must not reset progress or re-arm lanes
        race.start(now + Duration::from_millis(100));
        assert_eq!(race.sql_progress(), sql);
        assert_eq!(race.redis_progress(), redis);
        assert_eq!(race.phase(), RacePhase::Running);
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(42);
        let mut race = ProgressRace::new();
        race.start(now);

        let (mut last_sql, mut last_redis) = (0.0f64, 0.0f64);
        for i in 1..400u64 {
            race.advance(now + Duration::from_millis(i * 25), &mut rng);
            assert!(race.sql_progress() >= last_sql);
            assert!(race.redis_progress() >= last_redis);
            assert!(race.sql_progress() <= 100.0);
            assert!(race.redis_progress() <= 100.0);
            last_sql = race.sql_progress();
            last_redis = race.redis_progress();
        }
        assert_eq!(last_sql, 100.0);
        assert_eq!(last_redis, 100.0);
    }

    #[test]
    fn test_settles_after_trailing_delay_then_restarts() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut race = ProgressRace::new();
        race.start(now);

        // Both lanes finish well within 10s; a single late advance
        // catches up through lane ticks and the settle deadline.
        race.advance(now + Duration::from_secs(10), &mut rng);
        assert_eq!(race.phase(), RacePhase::Settled);
        assert_eq!(race.sql_progress(), 100.0);
        assert_eq!(race.redis_progress(), 100.0);

        // Settled re-arms
        let later = now + Duration::from_secs(11);
        race.start(later);
        assert_eq!(race.phase(), RacePhase::Running);
        assert_eq!(race.sql_progress(), 0.0);
        assert_eq!(race.redis_progress(), 0.0);
    }

    #[test]
    fn test_running_until_both_lanes_done_plus_delay() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(9);
        let mut race = ProgressRace::new();
        race.start(now);

        // Drive tick by tick until both lanes are at 100
        let mut t = now;
        while !(race.sql_progress() >= 100.0 && race.redis_progress() >= 100.0) {
            t += TICK_INTERVAL;
            race.advance(t, &mut rng);
        }
        assert_eq!(race.phase(), RacePhase::Running);

        // Still running inside the trailing delay window
        race.advance(t + Duration::from_millis(500), &mut rng);
        assert_eq!(race.phase(), RacePhase::Running);

        race.advance(t + SETTLE_DELAY, &mut rng);
        assert_eq!(race.phase(), RacePhase::Settled);
    }

    #[test]
    fn test_stop_cancels_all_deadlines() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut race = ProgressRace::new();
        race.start(now);
        race.advance(now + Duration::from_millis(50), &mut rng);
        let sql = race.sql_progress();

        race.stop();
        assert_eq!(race.phase(), RacePhase::Idle);
        race.advance(now + Duration::from_secs(30), &mut rng);
        assert_eq!(race.sql_progress(), sql);
    }

    #[test]
    fn test_latency_labels_derive_from_progress() {
        let mut race = ProgressRace::new();
        assert_eq!(race.sql_latency_ms(), 0.0);

        race.sql.progress = 50.0;
        race.redis.progress = 100.0;
        assert_eq!(race.sql_latency_ms(), 60.0);
        assert_eq!(race.redis_latency_ms(), 15.0);
    }
}
