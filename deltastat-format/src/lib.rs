// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fmt::{self, Write};

/// Maximum number of digits kept after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 6;

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

// 2^63: whole values below this magnitude fit an i64 exactly
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// How [`format`] renders a value.
///
/// Both modes produce the same text for every input. [`FormatMode::Plain`] sends whole
/// numbers through integer formatting, while [`FormatMode::FixedPrecision`] always goes
/// through fixed-point rounding and trims the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Whole numbers as integers, everything else at [`MAX_FRACTION_DIGITS`].
    #[default]
    Plain,
    /// Always rounded at [`MAX_FRACTION_DIGITS`], then trimmed.
    FixedPrecision,
}

/// Render `value` as canonical decimal text.
///
/// This never panics and never produces an exponent.
pub fn format(value: f64, mode: FormatMode) -> String {
    let mut buf = String::new();
    format_into(&mut buf, value, mode);
    buf
}

/// Append the canonical text of `value` to `buf`.
pub fn format_into(buf: &mut String, value: f64, mode: FormatMode) {
    if let Some(literal) = non_finite_literal(value) {
        buf.push_str(literal);
        return;
    }
    match mode {
        FormatMode::Plain if value.fract() == 0.0 => push_whole(buf, value),
        _ => push_fixed(buf, value),
    }
}

/// Shorthand for [`format`] with [`FormatMode::Plain`].
pub fn whole_or_decimal(value: f64) -> String {
    format(value, FormatMode::Plain)
}

/// Shorthand for [`format`] with [`FormatMode::FixedPrecision`].
pub fn decimal_or_nan(value: f64) -> String {
    format(value, FormatMode::FixedPrecision)
}

/// A [`fmt::Display`] adapter that writes a value in canonical form.
///
/// ```
/// use deltastat_format::Canonical;
///
/// assert_eq!(format!("sum={}", Canonical::new(0.5)), "sum=0.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canonical {
    value: f64,
    mode: FormatMode,
}

impl Canonical {
    /// Display `value` with [`FormatMode::Plain`]
    pub fn new(value: f64) -> Self {
        Self::with_mode(value, FormatMode::Plain)
    }

    /// Display `value` with the given mode
    pub fn with_mode(value: f64, mode: FormatMode) -> Self {
        Self { value, mode }
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(24);
        format_into(&mut buf, self.value, self.mode);
        f.write_str(&buf)
    }
}

fn non_finite_literal(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NAN)
    } else if value == f64::INFINITY {
        Some(INFINITY)
    } else if value == f64::NEG_INFINITY {
        Some(NEG_INFINITY)
    } else {
        None
    }
}

fn push_whole(buf: &mut String, value: f64) {
    if value.abs() < I64_BOUND {
        // exact, and maps -0.0 to 0
        buf.push_str(itoa::Buffer::new().format(value as i64));
    } else {
        // fixed-point `Display` prints every integer digit of the binary value
        let _ = write!(buf, "{value:.0}");
    }
}

fn push_fixed(buf: &mut String, value: f64) {
    let start = buf.len();
    // std rounds half-to-even on the exact binary value
    let _ = write!(buf, "{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    trim_fraction(buf, start);
}

fn trim_fraction(buf: &mut String, start: usize) {
    if buf[start..].contains('.') {
        let trimmed = buf.trim_end_matches('0').len();
        buf.truncate(trimmed);
        if buf.ends_with('.') {
            buf.pop();
        }
    }
    if &buf[start..] == "-0" {
        buf.truncate(start);
        buf.push('0');
    }
}
