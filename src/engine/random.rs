//! Injectable randomness and time
//!
//! The only non-determinism in the engine is the per-decision event roll,
//! and the only wall-clock access is record timestamping. Both sit behind
//! traits so runs are reproducible and both event branches are forcible
//! in tests.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform samples consumed by the event roll.
pub trait RiskSource {
    /// One uniform sample in [0, 1).
    fn roll(&mut self) -> f64;
    /// Uniform index in [0, upper).
    fn pick(&mut self, upper: usize) -> usize;
}

/// Seeded production source backed by a `SmallRng`.
#[derive(Debug)]
pub struct SeededRisk {
    rng: SmallRng,
}

impl SeededRisk {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RiskSource for SeededRisk {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Forces the event branch: every roll fires, every pick takes the first
/// catalog template.
#[derive(Debug, Default)]
pub struct AlwaysFire;

impl RiskSource for AlwaysFire {
    fn roll(&mut self) -> f64 {
        0.0
    }

    fn pick(&mut self, _upper: usize) -> usize {
        0
    }
}

/// Suppresses the event branch: the roll is never below any risk value.
#[derive(Debug, Default)]
pub struct NeverFire;

impl RiskSource for NeverFire {
    fn roll(&mut self) -> f64 {
        1.0
    }

    fn pick(&mut self, _upper: usize) -> usize {
        0
    }
}

/// Source of record timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed timestamp, for deterministic records in tests.
#[derive(Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
