//! Field matchers
//!
//! A matcher is a pure predicate over a JSON object key. It never
//! inspects values; the masking engine consults it only for string
//! leaves, keyed by their immediate parent field name.

pub mod composite;
pub mod contains;
pub mod regex;

pub use composite::{CompositeMatcher, CompositeMode};
pub use contains::ContainsMatcher;
pub use self::regex::RegexMatcher;

use crate::error::ConfigError;

/// A predicate deciding whether a JSON object key is a masking target.
#[derive(Debug, Clone)]
pub enum FieldMatcher {
    /// Case-insensitive substring test.
    Contains(ContainsMatcher),
    /// Case-insensitive whole-name regex test.
    Regex(RegexMatcher),
    /// AND/OR combination of sub-matchers.
    Composite(CompositeMatcher),
}

impl FieldMatcher {
    /// Substring matcher for `keyword`, case-insensitive.
    pub fn contains(keyword: &str) -> Self {
        FieldMatcher::Contains(ContainsMatcher::new(keyword))
    }

    /// Whole-name regex matcher for `pattern`, case-insensitive.
    pub fn regex(pattern: &str) -> Result<Self, ConfigError> {
        Ok(FieldMatcher::Regex(RegexMatcher::new(pattern)?))
    }

    /// Matcher accepting names accepted by every sub-matcher.
    pub fn all_of(matchers: Vec<FieldMatcher>) -> Self {
        FieldMatcher::Composite(CompositeMatcher::new(matchers, CompositeMode::And))
    }

    /// Matcher accepting names accepted by at least one sub-matcher.
    pub fn any_of(matchers: Vec<FieldMatcher>) -> Self {
        FieldMatcher::Composite(CompositeMatcher::new(matchers, CompositeMode::Or))
    }

    /// True when this matcher accepts `field_name`.
    pub fn matches(&self, field_name: &str) -> bool {
        match self {
            FieldMatcher::Contains(matcher) => matcher.matches(field_name),
            FieldMatcher::Regex(matcher) => matcher.matches(field_name),
            FieldMatcher::Composite(matcher) => matcher.matches(field_name),
        }
    }
}
