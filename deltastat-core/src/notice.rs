// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic notices for requests a summary accepts but cannot honor.
//!
//! None of these conditions are errors: the summary carries on and reports what it can. The
//! owning process decides where notices go by handing a [`NoticeSink`] to the summary. The
//! default, [`TracingNotices`], turns them into `tracing` events.

use std::{fmt, time::Duration};

use crate::{TimeUnit, rate_limit::rate_limited};

/// Something a summary ignored.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Notice {
    /// A histogram or percentile configuration was passed at construction time.
    IgnoredStatisticConfig,
    /// A time unit was passed to a snapshot call of a unit-less summary.
    IgnoredTimeUnit {
        /// The unit that was passed
        unit: TimeUnit,
    },
    /// A histogram snapshot was requested, but no percentiles are tracked.
    PercentilesUnavailable,
}

/// How loudly a [`Notice`] should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeLevel {
    /// Expected in normal operation
    Debug,
    /// Likely a misconfiguration
    Warn,
}

impl Notice {
    /// The level this notice is reported at
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::IgnoredTimeUnit { .. } => NoticeLevel::Debug,
            Notice::IgnoredStatisticConfig | Notice::PercentilesUnavailable => NoticeLevel::Warn,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::IgnoredStatisticConfig => {
                f.write_str("distribution statistic config is ignored by resettable summaries")
            }
            Notice::IgnoredTimeUnit { unit } => write!(
                f,
                "summary snapshot called with time unit `{unit}` on a distribution summary, ignoring the unit"
            ),
            Notice::PercentilesUnavailable => f.write_str(
                "histogram snapshot taken on a resettable summary, no percentiles will be exported",
            ),
        }
    }
}

/// Receives [`Notice`]s from summaries.
pub trait NoticeSink: Send + Sync {
    /// Report a notice. Must not block.
    fn notice(&self, notice: Notice);
}

/// Emits notices as `tracing` events at their [`NoticeLevel`].
///
/// Percentile warnings can be triggered on every export tick, so they are rate limited to one
/// event per minute.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn notice(&self, notice: Notice) {
        match (&notice, notice.level()) {
            (Notice::PercentilesUnavailable, _) => rate_limited!(
                Duration::from_secs(60),
                tracing::warn!(message = %notice)
            ),
            (_, NoticeLevel::Warn) => tracing::warn!(message = %notice),
            (_, NoticeLevel::Debug) => tracing::debug!(message = %notice),
        }
    }
}

/// A [`NoticeSink`] that keeps every notice for later inspection in tests.
///
/// Clones share the same storage, so keep one clone and hand the other to the summary.
#[cfg(any(test, feature = "test-util"))]
#[derive(Clone, Debug, Default)]
pub struct CapturedNotices(std::sync::Arc<std::sync::Mutex<Vec<Notice>>>);

#[cfg(any(test, feature = "test-util"))]
impl CapturedNotices {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, oldest first
    pub fn notices(&self) -> Vec<Notice> {
        self.0.lock().unwrap().clone()
    }

    /// Drop every notice received so far
    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

#[cfg(any(test, feature = "test-util"))]
impl NoticeSink for CapturedNotices {
    fn notice(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}
