//! Seed providers for [`Lcg48::from_source`](crate::Lcg48::from_source).
//!
//! The generator never reads a clock on its own; whatever picks the seed is
//! passed in.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

pub trait SeedSource {
    fn next_seed(&mut self) -> u64;
}

/// Milliseconds since the Unix epoch, the usual default seed.
///
/// Low entropy: anyone who knows roughly when the generator was created can
/// enumerate the candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn next_seed(&mut self) -> u64 {
        // A clock set before the epoch yields 0.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Always the same seed. For replaying a known run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

impl SeedSource for OsRng {
    fn next_seed(&mut self) -> u64 {
        self.next_u64()
    }
}
