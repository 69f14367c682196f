//! Deferred scheduling of the computer's move.
//!
//! The engine never sleeps. When the computer is to act it issues a
//! ticket carrying the current state generation and a cosmetic delay;
//! the presentation layer waits out the delay and hands the ticket
//! back. Any state transition in between bumps the generation, so a
//! held ticket goes stale instead of firing against a replaced board
//! or a finished round. At most one ticket is pending at a time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single pending computer move, stamped at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredMove {
    generation: u64,
    delay_ms: u64,
}

impl DeferredMove {
    pub(crate) fn new(generation: u64, delay: Duration) -> Self {
        Self {
            generation,
            delay_ms: delay.as_millis() as u64,
        }
    }

    /// The pacing delay the presentation layer should wait before
    /// handing the ticket back. Purely cosmetic, not a correctness
    /// requirement.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}
