// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Mutex, MutexGuard, PoisonError};

use deltastat_core::SummarySnapshot;

/// A running `{count, total, min, max}` aggregate shared between recording threads and an
/// exporter.
///
/// All four statistics live behind one lock, so [`Accumulator::record`] updates them as a
/// unit and [`Accumulator::snapshot_and_reset`] drains them as a unit. An observation recorded
/// concurrently with a reset ends up entirely in the returned snapshot or entirely in the new
/// window.
///
/// Amounts are expected to be non-negative and not `NaN`. The accumulator does not check this;
/// [`crate::ResettableSummary`] filters its input before recording.
#[derive(Debug)]
pub struct Accumulator {
    state: Mutex<State>,
}

#[derive(Clone, Copy, Debug)]
struct State {
    count: u64,
    total: f64,
    // +inf / -inf while count == 0
    min: f64,
    max: f64,
}

impl State {
    const EMPTY: Self = Self {
        count: 0,
        total: 0.0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn record(&mut self, amount: f64) {
        self.count += 1;
        self.total += amount;
        self.min = self.min.min(amount);
        self.max = self.max.max(amount);
    }

    fn snapshot(&self) -> SummarySnapshot {
        if self.count == 0 {
            SummarySnapshot::EMPTY
        } else {
            SummarySnapshot::new(self.min, self.max, self.total, self.count)
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State::EMPTY),
        }
    }

    // Every critical section is plain arithmetic on `State`, so a panic elsewhere
    // cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one observation.
    pub fn record(&self, amount: f64) {
        self.lock().record(amount);
    }

    /// Observations since the last reset
    pub fn count(&self) -> u64 {
        self.lock().count
    }

    /// Sum of the observations since the last reset
    pub fn total(&self) -> f64 {
        self.lock().total
    }

    /// Largest observation since the last reset, `0.0` if there is none
    pub fn max(&self) -> f64 {
        self.snapshot().max()
    }

    /// Smallest observation since the last reset, `0.0` if there is none
    pub fn min(&self) -> f64 {
        self.snapshot().min()
    }

    /// `true` if anything was recorded since the last reset
    pub fn has_values(&self) -> bool {
        self.count() > 0
    }

    /// Read all four statistics at one instant, without resetting.
    ///
    /// Prefer this over the individual getters when the values must agree with each other.
    pub fn snapshot(&self) -> SummarySnapshot {
        self.lock().snapshot()
    }

    /// Read all four statistics and reset them, as one atomic step.
    pub fn snapshot_and_reset(&self) -> SummarySnapshot {
        std::mem::replace(&mut *self.lock(), State::EMPTY).snapshot()
    }
}
