// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Histogram and percentile settings a registry may pass when it creates a summary.
//!
//! Resettable summaries only track `{min, max, total, count}`, so they accept this
//! configuration for compatibility and ignore it. See
//! [`DistributionStatisticConfig::is_none`].

use std::time::Duration;

use crate::ValidationError;

/// Requested distribution statistics for a meter.
///
/// Build one with [`DistributionStatisticConfig::builder`], which validates the settings, or
/// deserialize one (with the `serde` feature) and call
/// [`DistributionStatisticConfig::validate`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DistributionStatisticConfig {
    percentiles: Vec<f64>,
    percentile_histogram: Option<bool>,
    percentile_precision: Option<u8>,
    service_level_objectives: Vec<f64>,
    minimum_expected_value: Option<f64>,
    maximum_expected_value: Option<f64>,
    expiry: Option<Duration>,
    buffer_length: Option<u32>,
}

impl DistributionStatisticConfig {
    /// A configuration that requests nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Start building a configuration
    pub fn builder() -> DistributionStatisticConfigBuilder {
        DistributionStatisticConfigBuilder::default()
    }

    /// `true` if no setting was made at all.
    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }

    /// Check every setting, reporting all failures at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::builder();
        for percentile in &self.percentiles {
            if !(0.0..=1.0).contains(percentile) {
                errors.extend_mut(
                    ValidationError::invalid(format!("{percentile} is not within [0, 1]"))
                        .for_field("percentiles"),
                );
            }
        }
        for slo in &self.service_level_objectives {
            if !(slo.is_finite() && *slo > 0.0) {
                errors.extend_mut(
                    ValidationError::invalid(format!("{slo} is not a positive, finite value"))
                        .for_field("service_level_objectives"),
                );
            }
        }
        if let (Some(min), Some(max)) = (self.minimum_expected_value, self.maximum_expected_value)
            && min > max
        {
            errors.extend_mut(
                ValidationError::invalid(format!("{min} is greater than the maximum {max}"))
                    .for_field("minimum_expected_value"),
            );
        }
        if self.buffer_length == Some(0) {
            errors.invalid_mut("`buffer_length`: must be at least 1");
        }
        errors.build()
    }

    /// Percentiles to publish, each in `[0, 1]`
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Whether a percentile histogram should be published
    pub fn percentile_histogram(&self) -> Option<bool> {
        self.percentile_histogram
    }

    /// Significant digits kept by a percentile histogram
    pub fn percentile_precision(&self) -> Option<u8> {
        self.percentile_precision
    }

    /// Bucket boundaries to publish counts for
    pub fn service_level_objectives(&self) -> &[f64] {
        &self.service_level_objectives
    }

    /// Lower bound of the expected value range
    pub fn minimum_expected_value(&self) -> Option<f64> {
        self.minimum_expected_value
    }

    /// Upper bound of the expected value range
    pub fn maximum_expected_value(&self) -> Option<f64> {
        self.maximum_expected_value
    }

    /// How long samples stay in a rotating histogram
    pub fn expiry(&self) -> Option<Duration> {
        self.expiry
    }

    /// Number of rotating histogram buffers
    pub fn buffer_length(&self) -> Option<u32> {
        self.buffer_length
    }
}

/// Builder for [`DistributionStatisticConfig`].
#[derive(Clone, Debug, Default)]
pub struct DistributionStatisticConfigBuilder {
    config: DistributionStatisticConfig,
}

impl DistributionStatisticConfigBuilder {
    /// Percentiles to publish, each in `[0, 1]`
    pub fn percentiles(mut self, percentiles: impl IntoIterator<Item = f64>) -> Self {
        self.config.percentiles = percentiles.into_iter().collect();
        self
    }

    /// Publish a percentile histogram
    pub fn percentile_histogram(mut self, enabled: bool) -> Self {
        self.config.percentile_histogram = Some(enabled);
        self
    }

    /// Significant digits kept by a percentile histogram
    pub fn percentile_precision(mut self, digits: u8) -> Self {
        self.config.percentile_precision = Some(digits);
        self
    }

    /// Bucket boundaries to publish counts for
    pub fn service_level_objectives(mut self, slos: impl IntoIterator<Item = f64>) -> Self {
        self.config.service_level_objectives = slos.into_iter().collect();
        self
    }

    /// Lower bound of the expected value range
    pub fn minimum_expected_value(mut self, value: f64) -> Self {
        self.config.minimum_expected_value = Some(value);
        self
    }

    /// Upper bound of the expected value range
    pub fn maximum_expected_value(mut self, value: f64) -> Self {
        self.config.maximum_expected_value = Some(value);
        self
    }

    /// How long samples stay in a rotating histogram
    pub fn expiry(mut self, expiry: Duration) -> Self {
        self.config.expiry = Some(expiry);
        self
    }

    /// Number of rotating histogram buffers
    pub fn buffer_length(mut self, length: u32) -> Self {
        self.config.buffer_length = Some(length);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<DistributionStatisticConfig, ValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::{check, let_assert};
    use rstest::rstest;

    use super::DistributionStatisticConfig;

    #[test]
    fn default_requests_nothing() {
        check!(DistributionStatisticConfig::none().is_none());
        check!(DistributionStatisticConfig::builder().build().unwrap().is_none());
    }

    #[rstest]
    #[case(DistributionStatisticConfig::builder().percentiles([0.5, 0.99]))]
    #[case(DistributionStatisticConfig::builder().percentile_histogram(true))]
    #[case(DistributionStatisticConfig::builder().percentile_histogram(false))]
    #[case(DistributionStatisticConfig::builder().service_level_objectives([100.0]))]
    #[case(DistributionStatisticConfig::builder().expiry(Duration::from_secs(120)))]
    #[case(DistributionStatisticConfig::builder().buffer_length(3))]
    fn any_setting_is_not_none(#[case] builder: super::DistributionStatisticConfigBuilder) {
        check!(!builder.build().unwrap().is_none());
    }

    #[test]
    fn reports_every_invalid_setting() {
        let_assert!(
            Err(error) = DistributionStatisticConfig::builder()
                .percentiles([0.5, 1.5, f64::NAN])
                .service_level_objectives([-1.0, 10.0])
                .minimum_expected_value(10.0)
                .maximum_expected_value(1.0)
                .buffer_length(0)
                .build()
        );
        check!(
            error.reasons().collect::<Vec<_>>()
                == [
                    "`percentiles`: 1.5 is not within [0, 1]",
                    "`percentiles`: NaN is not within [0, 1]",
                    "`service_level_objectives`: -1 is not a positive, finite value",
                    "`minimum_expected_value`: 10 is greater than the maximum 1",
                    "`buffer_length`: must be at least 1",
                ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: DistributionStatisticConfig =
            serde_json::from_str(r#"{"percentiles": [0.95], "percentileHistogram": true}"#)
                .unwrap();
        check!(config.percentiles() == [0.95]);
        check!(config.percentile_histogram() == Some(true));
        check!(config.service_level_objectives().is_empty());
        check!(config.validate().is_ok());

        let config: DistributionStatisticConfig = serde_json::from_str("{}").unwrap();
        check!(config.is_none());
    }
}
