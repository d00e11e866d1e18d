//! Tick counter shared by the frame loops.

use std::time::Duration;

/// Tick index, frame period and an optional tick budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    tick_index: u64,
    period: Duration,
    total_ticks: Option<u64>,
}

impl AnimationClock {
    /// `total_ticks` of `None` runs forever.
    pub fn new(period: Duration, total_ticks: Option<u64>) -> Self {
        Self {
            tick_index: 0,
            period,
            total_ticks,
        }
    }

    /// Budget of `loops` passes of `ticks_per_loop` ticks; negative loops
    /// mean unbounded.
    pub fn from_loops(period: Duration, loops: i64, ticks_per_loop: u64) -> Self {
        let total = u64::try_from(loops)
            .ok()
            .map(|loops| loops.saturating_mul(ticks_per_loop));
        Self::new(period, total)
    }

    pub fn tick(&self) -> u64 {
        self.tick_index
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn total_ticks(&self) -> Option<u64> {
        self.total_ticks
    }

    pub fn is_exhausted(&self) -> bool {
        self.total_ticks
            .map_or(false, |total| self.tick_index >= total)
    }

    pub fn advance(&mut self) {
        self.tick_index += 1;
    }
}
