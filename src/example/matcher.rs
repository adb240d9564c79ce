//! Matching options and the example itself.

use serde::Deserialize;
use smol_str::SmolStr;

use crate::ast::ComparisonOperator;
use crate::error::UnsupportedExampleError;

/// How per-field conditions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every condition must hold (`AND`).
    #[default]
    All,
    /// At least one condition must hold (`OR`).
    Any,
}

/// Treatment of fields explicitly set to null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullHandling {
    /// No condition.
    #[default]
    Ignore,
    /// `IS NULL`.
    Include,
}

/// Comparison used for string-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringMatcher {
    #[default]
    Default,
    Exact,
    StartsWith,
    EndsWith,
    Contains,
    Regex,
}

impl StringMatcher {
    pub(crate) fn operator(self) -> ComparisonOperator {
        match self {
            StringMatcher::Default | StringMatcher::Exact => ComparisonOperator::Eq,
            StringMatcher::StartsWith => ComparisonOperator::StartsWith,
            StringMatcher::EndsWith => ComparisonOperator::EndsWith,
            StringMatcher::Contains => ComparisonOperator::Contains,
            StringMatcher::Regex => ComparisonOperator::Matches,
        }
    }
}

/// Options controlling how a probe becomes a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ExampleMatcher {
    pub mode: MatchMode,
    pub null_handling: NullHandling,
    pub string_matcher: StringMatcher,
    /// Not supported; setting it makes translation fail.
    pub ignore_case: bool,
    /// Not supported; a non-empty list makes translation fail.
    pub ignored_paths: Vec<SmolStr>,
}

impl ExampleMatcher {
    pub fn matching_all() -> Self {
        Self::default()
    }

    pub fn matching_any() -> Self {
        Self {
            mode: MatchMode::Any,
            ..Self::default()
        }
    }

    pub fn with_include_null_values(mut self) -> Self {
        self.null_handling = NullHandling::Include;
        self
    }

    pub fn with_string_matcher(mut self, string_matcher: StringMatcher) -> Self {
        self.string_matcher = string_matcher;
        self
    }

    pub fn with_ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_ignored_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.ignored_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Rejects options that cannot be expressed as a predicate.
    pub fn validate(&self) -> Result<(), UnsupportedExampleError> {
        if self.ignore_case {
            return Err(UnsupportedExampleError::IgnoreCase);
        }
        if !self.ignored_paths.is_empty() {
            return Err(UnsupportedExampleError::IgnoredPaths {
                paths: self.ignored_paths.clone(),
            });
        }
        Ok(())
    }
}

/// A probe together with its matcher.
#[derive(Debug, Clone)]
pub struct Example<P> {
    probe: P,
    matcher: ExampleMatcher,
}

impl<P> Example<P> {
    /// An example with the default matcher: all fields, nulls ignored,
    /// exact string matching.
    pub fn of(probe: P) -> Self {
        Self::with_matcher(probe, ExampleMatcher::default())
    }

    pub fn with_matcher(probe: P, matcher: ExampleMatcher) -> Self {
        Self { probe, matcher }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn matcher(&self) -> &ExampleMatcher {
        &self.matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_partial_config() {
        let matcher: ExampleMatcher =
            serde_json::from_str(r#"{"mode": "any", "string_matcher": "starts_with"}"#).unwrap();
        assert_eq!(matcher.mode, MatchMode::Any);
        assert_eq!(matcher.string_matcher, StringMatcher::StartsWith);
        assert_eq!(matcher.null_handling, NullHandling::Ignore);
    }

    #[test]
    fn unsupported_options_fail_validation() {
        assert_eq!(
            ExampleMatcher::default().with_ignore_case().validate(),
            Err(UnsupportedExampleError::IgnoreCase)
        );
        assert!(matches!(
            ExampleMatcher::default()
                .with_ignored_paths(["address.city"])
                .validate(),
            Err(UnsupportedExampleError::IgnoredPaths { paths }) if paths == ["address.city"]
        ));
        assert_eq!(ExampleMatcher::matching_any().validate(), Ok(()));
    }
}
