//! Recursive document masking
//!
//! Walks a parsed JSON tree in place and rewrites string leaves whose
//! parent field name matches a rule. Shape is preserved exactly: keys,
//! key order, array lengths, and every non-string leaf stay untouched.

use serde_json::Value;
use tracing::debug;

use crate::error::{DocumentError, Error};
use crate::rules::RuleSet;

/// Applies a rule set to JSON documents.
///
/// Holds no per-document state; one masker may be reused across any
/// number of documents.
#[derive(Debug, Clone)]
pub struct JsonMasker {
    rules: RuleSet,
}

impl JsonMasker {
    pub fn new(rules: RuleSet) -> Self {
        JsonMasker { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Parses `input`, masks matching string fields, and pretty-prints
    /// the result. Output is deterministic for identical input.
    pub fn mask_document(&self, input: &str) -> Result<String, DocumentError> {
        let mut value: Value = serde_json::from_str(input).map_err(DocumentError::Parse)?;
        self.mask_value(&mut value);
        serde_json::to_string_pretty(&value).map_err(DocumentError::Serialize)
    }

    /// Masks matching string fields of an already-parsed tree in place.
    pub fn mask_value(&self, value: &mut Value) {
        let replaced = self.mask_node(value);
        debug!("Masked {} string values in document tree", replaced);
    }

    fn mask_node(&self, value: &mut Value) -> usize {
        let mut replaced = 0;

        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    match child {
                        Value::String(text) => {
                            if let Some(rule) = self.rules.resolve(key) {
                                *text = rule.apply(text);
                                replaced += 1;
                            }
                        }
                        Value::Object(_) | Value::Array(_) => {
                            replaced += self.mask_node(child);
                        }
                        // Numbers, booleans, and nulls pass through even
                        // when their key matches a rule.
                        _ => {}
                    }
                }
            }
            Value::Array(items) => {
                // Array elements carry no field name; matching resumes
                // only inside nested objects.
                for item in items.iter_mut() {
                    replaced += self.mask_node(item);
                }
            }
            _ => {}
        }

        replaced
    }
}

/// Parses `config` into a rule set and masks `document` with it in one
/// call. Convenience for callers that do not reuse the rule set.
pub fn mask_document(document: &str, config: &str) -> Result<String, Error> {
    let rules = RuleSet::from_json(config)?;
    let masker = JsonMasker::new(rules);
    Ok(masker.mask_document(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::matcher::FieldMatcher;
    use crate::rules::MaskingRule;
    use crate::strategy::{FullMask, MaskStrategy};
    use serde_json::json;

    fn password_rules() -> RuleSet {
        let mut rules = RuleSet::new();
        rules.push(
            FieldMatcher::contains("password"),
            MaskingRule::new(MaskStrategy::Full(FullMask), "*"),
        );
        rules
    }

    #[test]
    fn test_masks_matching_string_field() {
        let masker = JsonMasker::new(password_rules());
        let mut value = json!({ "password": "hunter2", "user": "jon" });

        masker.mask_value(&mut value);

        assert_eq!(value["password"], "*******");
        assert_eq!(value["user"], "jon");
    }

    #[test]
    fn test_masks_nested_objects() {
        let masker = JsonMasker::new(password_rules());
        let mut value = json!({
            "account": { "password": "abc", "settings": { "password_hint": "pet" } }
        });

        masker.mask_value(&mut value);

        assert_eq!(value["account"]["password"], "***");
        assert_eq!(value["account"]["settings"]["password_hint"], "***");
    }

    #[test]
    fn test_masks_objects_inside_arrays() {
        let masker = JsonMasker::new(password_rules());
        let mut value = json!({
            "users": [
                { "password": "one" },
                { "password": "three" }
            ]
        });

        masker.mask_value(&mut value);

        assert_eq!(value["users"][0]["password"], "***");
        assert_eq!(value["users"][1]["password"], "*****");
    }

    #[test]
    fn test_leaves_array_strings_unmasked() {
        let masker = JsonMasker::new(password_rules());
        let mut value = json!({ "password": ["hunter2", "hunter3"] });

        masker.mask_value(&mut value);

        // The key matches but the strings sit inside an array, not
        // directly under the field.
        assert_eq!(value["password"][0], "hunter2");
        assert_eq!(value["password"][1], "hunter3");
    }

    #[test]
    fn test_leaves_non_string_values_unmasked() {
        let masker = JsonMasker::new(password_rules());
        let mut value = json!({ "password": 12345, "password_set": true, "password_old": null });

        masker.mask_value(&mut value);

        assert_eq!(value["password"], 12345);
        assert_eq!(value["password_set"], true);
        assert_eq!(value["password_old"], Value::Null);
    }

    #[test]
    fn test_null_root_is_noop() {
        let masker = JsonMasker::new(password_rules());
        let mut value = Value::Null;
        masker.mask_value(&mut value);
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_mask_document_rejects_malformed_input() {
        let masker = JsonMasker::new(password_rules());
        let err = masker.mask_document("{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn test_free_function_composes_config_and_masking() {
        let config = r#"{
            "rules": [
                { "match": { "type": "regex", "value": ".*password.*" },
                  "strategy": { "type": "full" } }
            ]
        }"#;

        let output = mask_document(r#"{"user_password": "x"}"#, config).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["user_password"], "*");
    }

    #[test]
    fn test_free_function_surfaces_config_errors() {
        let err = mask_document("{}", "{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
