use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// Full-match regex matcher.
///
/// The pattern is compiled once at construction, case-insensitively, and
/// must cover the entire field name: matching a substring is not enough.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        // Anchored so `is_match` has whole-name semantics.
        let compiled = RegexBuilder::new(&format!("^(?:{})$", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self { pattern: compiled })
    }

    pub fn matches(&self, field_name: &str) -> bool {
        self.pattern.is_match(field_name)
    }
}
