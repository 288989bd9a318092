//! Environment handed into every session entry point.
//!
//! The core holds no clock and no stateful RNG: the caller supplies the
//! current time and an [`RngOracle`] with each call, keeping the state
//! machine pure and replayable. The runtime wires in a wall clock; tests
//! pass fixed timestamps.
mod rng;

pub use rng::{PcgRng, RngOracle, mix_seed};

use crate::state::Millis;

/// Read-only environment for one entry-point call.
#[derive(Clone, Copy)]
pub struct SessionEnv<'a> {
    /// Current time in milliseconds since an arbitrary epoch. Only
    /// differences between values are ever interpreted.
    pub now: Millis,
    /// Deterministic randomness source for shuffles and decorations.
    pub rng: &'a dyn RngOracle,
}

impl<'a> SessionEnv<'a> {
    pub fn new(now: Millis, rng: &'a dyn RngOracle) -> Self {
        Self { now, rng }
    }
}
