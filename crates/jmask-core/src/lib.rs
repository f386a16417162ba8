//! Rule-driven JSON field masking
//!
//! This crate contains:
//! - Field matchers (substring, regex, composite)
//! - Masking strategies (full, middle, length-adaptive)
//! - Rule configuration parsing into an ordered rule set
//! - The recursive document masker
//!
//! ```
//! use jmask_core::mask_document;
//!
//! let config = r##"{
//!     "rules": [
//!         { "match": { "type": "contains", "value": "ssn" },
//!           "strategy": { "type": "full", "maskChar": "#" } }
//!     ]
//! }"##;
//!
//! let masked = mask_document(r#"{"ssn": "123-45-6789"}"#, config).unwrap();
//! assert!(masked.contains("###########"));
//! ```

mod config;

pub mod error;
pub mod masker;
pub mod matcher;
pub mod rules;
pub mod strategy;

pub use error::{ConfigError, DocumentError, Error, Result};
pub use masker::{JsonMasker, mask_document};
pub use matcher::{CompositeMatcher, CompositeMode, ContainsMatcher, FieldMatcher, RegexMatcher};
pub use rules::{DEFAULT_MASK_SYMBOL, MaskingRule, RuleSet};
pub use strategy::{FullMask, LengthAdaptiveMask, MaskStrategy, MiddleMask};
