//! Display-width metric for grid-constrained output.
//!
//! The metric follows the monospaced-grid model: a grapheme cluster that is
//! a single ASCII byte occupies one column, anything else occupies two. This
//! intentionally differs from terminal `wcwidth` semantics; combining
//! sequences and surrogate-pair clusters count as one double-width cell.

use unicode_segmentation::UnicodeSegmentation;

/// Display width of a single grapheme cluster.
///
/// Returns `0` for the empty string, `1` for a single-byte (ASCII) cluster,
/// and `2` for everything else.
#[must_use]
pub fn unit_width(unit: &str) -> usize {
    match unit.len() {
        0 => 0,
        1 => 1,
        _ => 2,
    }
}

/// Display width of a string, summed over its grapheme clusters.
#[must_use]
pub fn str_width(s: &str) -> usize {
    s.graphemes(true).map(unit_width).sum()
}
