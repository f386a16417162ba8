//! Error types for jmask-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure while turning a rule configuration into a rule set.
///
/// A configuration either yields a complete rule set or fails as a whole;
/// partially applied rule sets are never observable.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed rule configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown matcher type: {0}")]
    UnknownMatcher(String),

    #[error("Unknown strategy type: {0}")]
    UnknownStrategy(String),

    #[error("Invalid match pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure while parsing or re-serializing a document to be masked.
///
/// The masking walk itself is total over well-formed trees and raises no
/// errors of its own.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Malformed JSON document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize masked document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Umbrella error for operations composing configuration and masking.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
