// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::accumulator::Accumulator;
pub use crate::line::{LineError, SummaryLine};
pub use crate::summary::{ResettableSummary, ResettableSummaryBuilder};

pub use deltastat_core::{
    DistributionStatisticConfig, DistributionStatisticConfigBuilder, DistributionSummary,
    HistogramSnapshot, Notice, NoticeLevel, NoticeSink, SummarySnapshot, SummarySnapshotSupport,
    TimeUnit, TracingNotices, ValidationError, ValueAtPercentile,
};

#[cfg(feature = "test-util")]
pub use deltastat_core::CapturedNotices;

/// Canonical number text, see [`deltastat_format`]
pub use deltastat_format as format;

mod accumulator;
mod line;
mod summary;
