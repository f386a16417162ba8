use super::FieldMatcher;

/// How a composite combines its sub-matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Every sub-matcher must accept the field name.
    And,
    /// At least one sub-matcher must accept the field name.
    Or,
}

/// Combines an ordered list of sub-matchers under AND/OR semantics.
///
/// Evaluation short-circuits. An empty list matches everything under
/// `And` and nothing under `Or`.
#[derive(Debug, Clone)]
pub struct CompositeMatcher {
    matchers: Vec<FieldMatcher>,
    mode: CompositeMode,
}

impl CompositeMatcher {
    pub fn new(matchers: Vec<FieldMatcher>, mode: CompositeMode) -> Self {
        Self { matchers, mode }
    }

    pub fn matches(&self, field_name: &str) -> bool {
        match self.mode {
            CompositeMode::And => self.matchers.iter().all(|m| m.matches(field_name)),
            CompositeMode::Or => self.matchers.iter().any(|m| m.matches(field_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_requires_all() {
        let matcher = CompositeMatcher::new(
            vec![FieldMatcher::contains("user"), FieldMatcher::contains("name")],
            CompositeMode::And,
        );
        assert!(matcher.matches("user_name"));
        assert!(matcher.matches("username"));
        assert!(!matcher.matches("user_id"));
        assert!(!matcher.matches("nickname"));
    }

    #[test]
    fn test_or_requires_any() {
        let matcher = CompositeMatcher::new(
            vec![FieldMatcher::contains("ssn"), FieldMatcher::contains("tax")],
            CompositeMode::Or,
        );
        assert!(matcher.matches("ssn"));
        assert!(matcher.matches("tax_id"));
        assert!(!matcher.matches("email"));
    }

    #[test]
    fn test_empty_and_matches_everything() {
        let matcher = CompositeMatcher::new(Vec::new(), CompositeMode::And);
        assert!(matcher.matches("anything"));
        assert!(matcher.matches(""));
    }

    #[test]
    fn test_empty_or_matches_nothing() {
        let matcher = CompositeMatcher::new(Vec::new(), CompositeMode::Or);
        assert!(!matcher.matches("anything"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_nested_composites() {
        let inner = FieldMatcher::any_of(vec![
            FieldMatcher::contains("card"),
            FieldMatcher::contains("account"),
        ]);
        let outer = CompositeMatcher::new(
            vec![inner, FieldMatcher::contains("number")],
            CompositeMode::And,
        );
        assert!(outer.matches("card_number"));
        assert!(outer.matches("account_number"));
        assert!(!outer.matches("card_type"));
    }
}
