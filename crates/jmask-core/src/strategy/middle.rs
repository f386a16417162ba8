/// Keeps a fixed number of leading and trailing characters visible and
/// masks the span between them.
///
/// Example with the default keeps (2/2):
/// `john.doe@example.com` becomes `jo****************om`.
#[derive(Debug, Clone, Copy)]
pub struct MiddleMask {
    keep_left: usize,
    keep_right: usize,
}

impl MiddleMask {
    /// Keep `keep_left` leading and `keep_right` trailing characters.
    pub fn new(keep_left: usize, keep_right: usize) -> Self {
        Self {
            keep_left,
            keep_right,
        }
    }

    pub fn mask(&self, value: &str, symbol: &str) -> String {
        // Blank values carry nothing worth masking.
        if value.trim().is_empty() {
            return value.to_string();
        }

        let len = value.chars().count();

        // Too short to keep anything: mask the whole value instead of
        // slicing past its ends.
        if len <= self.keep_left + self.keep_right {
            return symbol.repeat(len);
        }

        let left: String = value.chars().take(self.keep_left).collect();
        let right: String = value.chars().skip(len - self.keep_right).collect();
        let middle = symbol.repeat(len - self.keep_left - self.keep_right);

        format!("{}{}{}", left, middle, right)
    }
}

impl Default for MiddleMask {
    /// Keeps the first two and last two characters.
    fn default() -> Self {
        Self::new(2, 2)
    }
}
