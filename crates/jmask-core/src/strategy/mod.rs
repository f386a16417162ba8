//! Masking strategies
//!
//! A strategy rewrites a matched string value using a mask symbol. All
//! length decisions count Unicode scalar values rather than bytes, and a
//! symbol longer than one character is repeated as a unit.

pub mod full;
pub mod length;
pub mod middle;

pub use full::FullMask;
pub use length::LengthAdaptiveMask;
pub use middle::MiddleMask;

/// How a matched string value is rewritten.
#[derive(Debug, Clone)]
pub enum MaskStrategy {
    /// Replace every character with the mask symbol.
    Full(FullMask),
    /// Keep a fixed number of leading/trailing characters.
    Middle(MiddleMask),
    /// Derive keep counts from the value's length.
    LengthAdaptive(LengthAdaptiveMask),
}

impl MaskStrategy {
    /// Apply this strategy to `value` using `symbol` as the mask unit.
    pub fn mask(&self, value: &str, symbol: &str) -> String {
        match self {
            MaskStrategy::Full(strategy) => strategy.mask(value, symbol),
            MaskStrategy::Middle(strategy) => strategy.mask(value, symbol),
            MaskStrategy::LengthAdaptive(strategy) => strategy.mask(value, symbol),
        }
    }
}
