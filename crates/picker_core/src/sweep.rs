//! Order-count sweep: the ordered sequence of order volumes a table is built for.

use serde::{Deserialize, Serialize};

const DEFAULT_START_ORDERS: u32 = 100;
const DEFAULT_END_ORDERS: u32 = 2000;
const DEFAULT_STEP: u32 = 50;

/// Closed interval `start..=end` walked in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRange {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl SweepRange {
    pub fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    /// True when the sweep yields no order counts (`end < start` or `step == 0`).
    pub fn is_empty(&self) -> bool {
        self.end < self.start || self.step == 0
    }

    /// Number of order counts the sweep yields.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.end - self.start) / self.step) as usize + 1
    }

    /// `start, start + step, ...` up to and including `end` when reachable.
    pub fn order_counts(&self) -> impl Iterator<Item = u32> {
        let (start, end) = if self.is_empty() {
            (1, 0)
        } else {
            (self.start, self.end)
        };
        (start..=end).step_by(self.step.max(1) as usize)
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self::new(DEFAULT_START_ORDERS, DEFAULT_END_ORDERS, DEFAULT_STEP)
    }
}
