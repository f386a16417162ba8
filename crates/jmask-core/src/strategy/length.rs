/// Selects keep counts from the value's own length.
///
/// Longer values keep more visible context: more than 15 characters keep
/// 5 on each side, 9 to 15 keep 3 on each side, 5 to 8 keep a 3-character
/// prefix only, and anything shorter collapses to a single mask symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthAdaptiveMask;

impl LengthAdaptiveMask {
    pub fn mask(&self, value: &str, symbol: &str) -> String {
        // Blank values carry nothing worth masking.
        if value.trim().is_empty() {
            return value.to_string();
        }

        let len = value.chars().count();
        let (keep_left, keep_right) = if len > 15 {
            (5, 5)
        } else if len >= 9 {
            (3, 3)
        } else if len > 4 {
            (3, 0)
        } else {
            // Too short to keep anything recognizable.
            return symbol.to_string();
        };

        mask_with_keep(value, len, keep_left, keep_right, symbol)
    }
}

/// Keep `keep_left`/`keep_right` characters and mask the span between.
/// When the keeps would consume the whole value, collapse to the bare
/// symbol instead.
fn mask_with_keep(
    value: &str,
    len: usize,
    keep_left: usize,
    keep_right: usize,
    symbol: &str,
) -> String {
    if keep_left + keep_right >= len {
        return symbol.to_string();
    }

    let left: String = value.chars().take(keep_left).collect();
    let right: String = value.chars().skip(len - keep_right).collect();
    let middle = symbol.repeat(len - keep_left - keep_right);

    format!("{}{}{}", left, middle, right)
}
