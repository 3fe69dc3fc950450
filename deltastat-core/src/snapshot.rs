// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Immutable point-in-time copies of a summary's statistics.

/// The `{min, max, total, count}` of one export window.
///
/// A snapshot is a plain value: once taken it does not change, no matter what happens to the
/// summary it came from. An empty window reports `0.0` for `min` and `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SummarySnapshot {
    min: f64,
    max: f64,
    total: f64,
    count: u64,
}

impl SummarySnapshot {
    /// A snapshot of a window without observations.
    pub const EMPTY: Self = Self {
        min: 0.0,
        max: 0.0,
        total: 0.0,
        count: 0,
    };

    /// Create a snapshot from already-aggregated values.
    pub const fn new(min: f64, max: f64, total: f64, count: u64) -> Self {
        Self {
            min,
            max,
            total,
            count,
        }
    }

    /// Smallest observation in the window
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation in the window
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sum of the observations in the window
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of observations in the window
    pub fn count(&self) -> u64 {
        self.count
    }

    /// `total / count`, or `0.0` for an empty window
    pub fn mean(&self) -> f64 {
        match self.count {
            0 => 0.0,
            count => self.total / count as f64,
        }
    }

    /// `true` if no observation is part of this snapshot
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A percentile and the value observed at it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAtPercentile {
    /// The percentile, in `[0, 1]`
    pub percentile: f64,
    /// The value at that percentile
    pub value: f64,
}

/// A histogram-shaped snapshot, as requested by registries that export percentiles.
///
/// Summaries that do not track a histogram return [`HistogramSnapshot::empty`], which carries
/// the summary statistics and no percentiles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistogramSnapshot {
    count: u64,
    total: f64,
    max: f64,
    percentile_values: Vec<ValueAtPercentile>,
}

impl HistogramSnapshot {
    /// Create a snapshot with percentile values
    pub fn new(
        count: u64,
        total: f64,
        max: f64,
        percentile_values: impl IntoIterator<Item = ValueAtPercentile>,
    ) -> Self {
        Self {
            count,
            total,
            max,
            percentile_values: percentile_values.into_iter().collect(),
        }
    }

    /// Create a snapshot without percentile values
    pub fn empty(count: u64, total: f64, max: f64) -> Self {
        Self::new(count, total, max, [])
    }

    /// Number of observations
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the observations
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `total / count`, or `0.0` without observations
    pub fn mean(&self) -> f64 {
        match self.count {
            0 => 0.0,
            count => self.total / count as f64,
        }
    }

    /// The tracked percentiles, possibly none
    pub fn percentile_values(&self) -> &[ValueAtPercentile] {
        &self.percentile_values
    }
}
