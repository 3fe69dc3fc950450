// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::config::{DistributionStatisticConfig, DistributionStatisticConfigBuilder};
pub use crate::notice::{Notice, NoticeLevel, NoticeSink, TracingNotices};
pub use crate::snapshot::{HistogramSnapshot, SummarySnapshot, ValueAtPercentile};
pub use crate::unit::TimeUnit;
pub use crate::validate::{ValidationError, ValidationErrorBuilder};

#[cfg(any(test, feature = "test-util"))]
pub use crate::notice::CapturedNotices;

pub mod config;
pub mod notice;
mod rate_limit;
pub mod snapshot;
pub mod unit;
mod validate;

/// A meter that tracks the distribution of a stream of non-negative observations.
///
/// This is the surface a meter registry expects from any distribution summary. Implementations
/// must accept concurrent calls from many threads.
pub trait DistributionSummary: Send + Sync {
    /// Record a single observation.
    ///
    /// Negative amounts are not meaningful for a distribution summary. Implementations drop
    /// them rather than failing, so recording stays infallible on the hot path.
    fn record(&self, amount: f64);

    /// The number of observations recorded.
    fn count(&self) -> u64;

    /// The sum of all recorded observations.
    fn total_amount(&self) -> f64;

    /// The largest recorded observation, or `0.0` when nothing was recorded.
    fn max(&self) -> f64;

    /// The arithmetic mean of the recorded observations, or `0.0` when nothing was recorded.
    fn mean(&self) -> f64 {
        match self.count() {
            0 => 0.0,
            count => self.total_amount() / count as f64,
        }
    }

    /// Take a histogram-shaped snapshot, including percentiles when the implementation
    /// tracks them.
    fn take_snapshot(&self) -> HistogramSnapshot;
}

/// Summaries that export `{min, max, total, count}` for delta-based export cycles.
pub trait SummarySnapshotSupport {
    /// `true` if at least one observation is part of the current window.
    fn has_values(&self) -> bool;

    /// Read the current window without resetting it.
    fn take_summary_snapshot(&self) -> SummarySnapshot;

    /// Same as [`SummarySnapshotSupport::take_summary_snapshot`]. Unit-less summaries
    /// ignore `unit`.
    fn take_summary_snapshot_with_unit(&self, unit: TimeUnit) -> SummarySnapshot;

    /// Read the current window and start a new, empty one in a single atomic step.
    ///
    /// Every observation is reported by exactly one call to this function.
    fn take_summary_snapshot_and_reset(&self) -> SummarySnapshot;

    /// Same as [`SummarySnapshotSupport::take_summary_snapshot_and_reset`]. Unit-less
    /// summaries ignore `unit`.
    fn take_summary_snapshot_and_reset_with_unit(&self, unit: TimeUnit) -> SummarySnapshot;
}
