// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, sync::Arc};

use deltastat_core::{
    DistributionStatisticConfig, DistributionSummary, HistogramSnapshot, Notice, NoticeSink,
    SummarySnapshot, SummarySnapshotSupport, TimeUnit, TracingNotices, ValidationError,
};

use crate::Accumulator;

/// A distribution summary whose statistics can be drained on every export tick.
///
/// Recording is cheap and safe from any number of threads. The exporter calls
/// [`SummarySnapshotSupport::take_summary_snapshot_and_reset`] once per tick to get the
/// statistics of the window that just ended.
///
/// Negative and `NaN` amounts are dropped without a notice. Other amounts are multiplied by the
/// configured [scale](ResettableSummaryBuilder::scale) before they are recorded.
///
/// This summary does not track percentiles. Histogram configuration and time units are
/// accepted for compatibility with registries and timers, and reported to the [`NoticeSink`]
/// as ignored.
pub struct ResettableSummary {
    accumulator: Accumulator,
    scale: f64,
    notices: Arc<dyn NoticeSink>,
}

impl fmt::Debug for ResettableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResettableSummary")
            .field("accumulator", &self.accumulator)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl Default for ResettableSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl ResettableSummary {
    /// Create a summary with scale `1.0` that reports notices through `tracing`.
    pub fn new() -> Self {
        Self {
            accumulator: Accumulator::new(),
            scale: 1.0,
            notices: Arc::new(TracingNotices),
        }
    }

    /// Configure a new summary
    pub fn builder() -> ResettableSummaryBuilder {
        ResettableSummaryBuilder::default()
    }

    /// Smallest observation in the current window, `0.0` if there is none
    pub fn min(&self) -> f64 {
        self.accumulator.min()
    }

    /// The factor applied to every recorded amount
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn ignore_unit(&self, unit: TimeUnit) {
        self.notices.notice(Notice::IgnoredTimeUnit { unit });
    }
}

impl DistributionSummary for ResettableSummary {
    fn record(&self, amount: f64) {
        // also rejects NaN
        if amount >= 0.0 {
            self.accumulator.record(self.scale * amount);
        }
    }

    fn count(&self) -> u64 {
        self.accumulator.count()
    }

    fn total_amount(&self) -> f64 {
        self.accumulator.total()
    }

    fn max(&self) -> f64 {
        self.accumulator.max()
    }

    fn mean(&self) -> f64 {
        self.accumulator.snapshot().mean()
    }

    fn take_snapshot(&self) -> HistogramSnapshot {
        self.notices.notice(Notice::PercentilesUnavailable);
        let snapshot = self.accumulator.snapshot();
        HistogramSnapshot::empty(snapshot.count(), snapshot.total(), snapshot.max())
    }
}

impl SummarySnapshotSupport for ResettableSummary {
    fn has_values(&self) -> bool {
        self.accumulator.has_values()
    }

    fn take_summary_snapshot(&self) -> SummarySnapshot {
        self.accumulator.snapshot()
    }

    fn take_summary_snapshot_with_unit(&self, unit: TimeUnit) -> SummarySnapshot {
        self.ignore_unit(unit);
        self.take_summary_snapshot()
    }

    fn take_summary_snapshot_and_reset(&self) -> SummarySnapshot {
        self.accumulator.snapshot_and_reset()
    }

    fn take_summary_snapshot_and_reset_with_unit(&self, unit: TimeUnit) -> SummarySnapshot {
        self.ignore_unit(unit);
        self.take_summary_snapshot_and_reset()
    }
}

/// Builder for [`ResettableSummary`].
pub struct ResettableSummaryBuilder {
    scale: f64,
    statistic_config: DistributionStatisticConfig,
    notices: Arc<dyn NoticeSink>,
}

impl Default for ResettableSummaryBuilder {
    fn default() -> Self {
        Self {
            scale: 1.0,
            statistic_config: DistributionStatisticConfig::none(),
            notices: Arc::new(TracingNotices),
        }
    }
}

impl fmt::Debug for ResettableSummaryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResettableSummaryBuilder")
            .field("scale", &self.scale)
            .field("statistic_config", &self.statistic_config)
            .finish_non_exhaustive()
    }
}

impl ResettableSummaryBuilder {
    /// Multiply every recorded amount by `scale`. Must be positive and finite.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// The histogram configuration requested by the registry.
    ///
    /// Anything other than [`DistributionStatisticConfig::none`] is ignored, with a
    /// [`Notice::IgnoredStatisticConfig`] when the summary is built.
    pub fn statistic_config(mut self, config: DistributionStatisticConfig) -> Self {
        self.statistic_config = config;
        self
    }

    /// Where notices about ignored requests go. Defaults to [`TracingNotices`].
    pub fn notices(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    /// Build the summary.
    ///
    /// Fails only for a scale that is not positive and finite.
    pub fn build(self) -> Result<ResettableSummary, ValidationError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ValidationError::invalid(format!(
                "{} is not a positive, finite value",
                self.scale
            ))
            .for_field("scale"));
        }
        if !self.statistic_config.is_none() {
            self.notices.notice(Notice::IgnoredStatisticConfig);
        }
        Ok(ResettableSummary {
            accumulator: Accumulator::new(),
            scale: self.scale,
            notices: self.notices,
        })
    }
}
