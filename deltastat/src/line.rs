// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The value part of a summary metric line: `gauge,min=<min>,max=<max>,sum=<sum>,count=<count>`.

use std::fmt;

use deltastat_core::SummarySnapshot;
use deltastat_format::{FormatMode, format_into};

/// Why a snapshot can't be written as a summary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineError {
    /// The snapshot holds no observations. Empty windows are skipped rather than exported.
    Empty,
    /// A statistic is `NaN` or infinite, which the line protocol has no token for.
    NonFinite {
        /// `min`, `max` or `sum`
        field: &'static str,
    },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Empty => f.write_str("summary snapshot has no observations"),
            LineError::NonFinite { field } => {
                write!(f, "summary snapshot has a non-finite `{field}`")
            }
        }
    }
}

impl std::error::Error for LineError {}

/// A summary snapshot rendered with canonical number text.
///
/// ```
/// use deltastat::{SummaryLine, SummarySnapshot};
///
/// let snapshot = SummarySnapshot::new(0.25, 4.6875392E7, 46875392.25, 2);
/// let line = SummaryLine::try_from_snapshot(&snapshot).unwrap();
/// assert_eq!(line.to_string(), "gauge,min=0.25,max=46875392,sum=46875392.25,count=2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine(String);

impl SummaryLine {
    /// Render `snapshot`, or explain why it can't be exported.
    pub fn try_from_snapshot(snapshot: &SummarySnapshot) -> Result<Self, LineError> {
        if snapshot.is_empty() {
            return Err(LineError::Empty);
        }
        let fields = [
            ("min", snapshot.min()),
            ("max", snapshot.max()),
            ("sum", snapshot.total()),
        ];
        let mut line = String::with_capacity(64);
        line.push_str("gauge");
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LineError::NonFinite { field });
            }
            line.push(',');
            line.push_str(field);
            line.push('=');
            format_into(&mut line, value, FormatMode::Plain);
        }
        line.push_str(",count=");
        line.push_str(itoa::Buffer::new().format(snapshot.count()));
        Ok(Self(line))
    }

    /// The rendered line
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
