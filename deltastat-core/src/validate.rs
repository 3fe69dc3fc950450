// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Describes why a configuration was rejected.
///
/// A single error can carry several failures, so a caller sees every problem with a
/// configuration at once instead of fixing them one build at a time.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidationError(Vec<String>);

impl ValidationError {
    /// Start collecting failures. [`ValidationErrorBuilder::build()`] returns [`Ok`] if none
    /// were recorded.
    pub fn builder() -> ValidationErrorBuilder {
        ValidationErrorBuilder::default()
    }

    /// A single failure with a reason string.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self(vec![reason.into()])
    }

    /// Prefix every failure with the name of the field it concerns.
    pub fn for_field(mut self, name: &str) -> Self {
        for reason in self.0.iter_mut() {
            *reason = format!("`{name}`: {reason}");
        }
        self
    }

    /// The individual failure reasons
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Collects failures into a single [`ValidationError`].
#[derive(Debug, Clone, Default)]
pub struct ValidationErrorBuilder(Vec<String>);

impl ValidationErrorBuilder {
    /// [`Ok`] if nothing was recorded, otherwise all recorded failures.
    pub fn build(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.0))
        }
    }

    /// Record a failure with a reason string.
    pub fn invalid_mut(&mut self, reason: impl Into<String>) -> &mut Self {
        self.0.push(reason.into());
        self
    }

    /// Record every failure carried by `error`.
    pub fn extend_mut(&mut self, error: ValidationError) -> &mut Self {
        self.0.extend(error.0);
        self
    }
}
