/// Replaces every character of the value with the mask symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullMask;

impl FullMask {
    /// Mask `value` completely, preserving its character count.
    ///
    /// An empty symbol degenerates to no masking: the value passes
    /// through unchanged.
    pub fn mask(&self, value: &str, symbol: &str) -> String {
        if symbol.is_empty() {
            return value.to_string();
        }

        symbol.repeat(value.chars().count())
    }
}
