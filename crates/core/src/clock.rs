//! Fall clock - the periodic gravity schedule.
//!
//! The engine holds `Some(FallClock)` exactly while ticking is scheduled.
//! Pausing, game over and reset drop the clock; starting, resuming and a
//! level change install a fresh one, so the next tick is a full period away.

use std::time::Duration;

/// Accumulates elapsed host time against a fixed fall interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl FallClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }

    /// Time accumulated toward the next tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Add elapsed time.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
    }

    /// Consume one period if it has fully elapsed.
    pub fn take_due(&mut self) -> bool {
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}
