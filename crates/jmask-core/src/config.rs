//! Rule configuration parsing
//!
//! Deserializes the JSON rule schema into raw structs, then resolves
//! matcher/strategy type names against the known variant set to build a
//! `RuleSet`. Type names compare case-insensitively; declaration order
//! is preserved because rule priority follows it.

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::matcher::FieldMatcher;
use crate::rules::{DEFAULT_MASK_SYMBOL, MaskingRule, RuleSet};
use crate::strategy::{FullMask, LengthAdaptiveMask, MaskStrategy, MiddleMask};

#[derive(Debug, Deserialize)]
struct RawConfig {
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(rename = "match")]
    matcher: RawMatcher,

    strategy: RawStrategy,
}

#[derive(Debug, Deserialize)]
struct RawMatcher {
    #[serde(rename = "type")]
    kind: String,

    value: String,
}

#[derive(Debug, Deserialize)]
struct RawStrategy {
    #[serde(rename = "type")]
    kind: String,

    #[serde(rename = "maskChar", default = "default_mask_symbol")]
    mask_char: String,

    #[serde(rename = "keepLeft")]
    keep_left: Option<i64>,

    #[serde(rename = "keepRight")]
    keep_right: Option<i64>,
}

fn default_mask_symbol() -> String {
    DEFAULT_MASK_SYMBOL.to_string()
}

impl RuleSet {
    /// Parses a JSON rule configuration into an ordered rule set.
    ///
    /// Fails when the document is not valid JSON, lacks a `rules` array,
    /// names an unknown matcher or strategy type, carries a non-integer
    /// keep parameter, or holds a regex pattern that does not compile.
    pub fn from_json(config: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(config)?;

        let mut rules = RuleSet::new();
        for rule in raw.rules {
            let matcher = build_matcher(&rule.matcher)?;
            let strategy = build_strategy(&rule.strategy)?;
            rules.push(matcher, MaskingRule::new(strategy, rule.strategy.mask_char));
        }

        debug!("Parsed masking configuration with {} rules", rules.len());
        Ok(rules)
    }
}

fn build_matcher(raw: &RawMatcher) -> Result<FieldMatcher, ConfigError> {
    match raw.kind.to_lowercase().as_str() {
        "contains" => Ok(FieldMatcher::contains(&raw.value)),
        "regex" => FieldMatcher::regex(&raw.value),
        _ => Err(ConfigError::UnknownMatcher(raw.kind.clone())),
    }
}

fn build_strategy(raw: &RawStrategy) -> Result<MaskStrategy, ConfigError> {
    match raw.kind.to_lowercase().as_str() {
        "full" => Ok(MaskStrategy::Full(FullMask)),
        "middle" => Ok(MaskStrategy::Middle(MiddleMask::new(
            clamp_keep(raw.keep_left),
            clamp_keep(raw.keep_right),
        ))),
        "length" => Ok(MaskStrategy::LengthAdaptive(LengthAdaptiveMask)),
        _ => Err(ConfigError::UnknownStrategy(raw.kind.clone())),
    }
}

/// Absent keep parameters default to 1; negative values clamp to 0.
fn clamp_keep(value: Option<i64>) -> usize {
    value.unwrap_or(1).max(0) as usize
}
