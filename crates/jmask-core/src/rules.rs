//! Masking rules and the ordered rule set
//!
//! A rule binds a strategy to the symbol it masks with. A rule set is an
//! ordered list of matcher/rule pairs; lookup returns the first rule whose
//! matcher accepts the field name, so earlier rules shadow later ones.

use crate::matcher::FieldMatcher;
use crate::strategy::MaskStrategy;

/// Symbol used when a rule does not configure one.
pub const DEFAULT_MASK_SYMBOL: &str = "*";

/// A masking strategy together with its mask symbol.
#[derive(Debug, Clone)]
pub struct MaskingRule {
    strategy: MaskStrategy,
    symbol: String,
}

impl MaskingRule {
    pub fn new(strategy: MaskStrategy, symbol: impl Into<String>) -> Self {
        MaskingRule {
            strategy,
            symbol: symbol.into(),
        }
    }

    /// Masks `value` with this rule's strategy and symbol.
    pub fn apply(&self, value: &str) -> String {
        self.strategy.mask(value, &self.symbol)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Ordered collection of matcher/rule pairs.
///
/// Order is significant: `resolve` scans front to back and stops at the
/// first matching entry.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(FieldMatcher, MaskingRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; later than every rule already present.
    pub fn push(&mut self, matcher: FieldMatcher, rule: MaskingRule) {
        self.rules.push((matcher, rule));
    }

    /// First rule whose matcher accepts `field_name`, if any.
    pub fn resolve(&self, field_name: &str) -> Option<&MaskingRule> {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(field_name))
            .map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
