//! Japanese line-breaking prohibitions (kinsoku shori).
//!
//! Two fixed sets drive the correction pass: units that must never start a
//! line (closers, sentence punctuation, small kana, iteration marks) and
//! units that must never end one (openers). The sets are data, not code;
//! membership is a substring probe so that multi-scalar clusters such as
//! `ㇷ゚` match their spelled-out form in the table.

use super::line_buffer::LineBuffer;
use crate::segment::Units;

/// Units prohibited at the start of a line.
const LEADING_PROHIBITED: &str = "。.?!‼⁇⁈⁉,)）]｝、〕〉》」』】〙〗〟’”｠»ゝゞ\"ー\
                                  ァィゥェォッャュョヮヵヶぁぃぅぇぉっゃゅょゎゕゖ\
                                  ㇰㇱㇲㇳㇴㇵㇶㇷㇸㇹㇷ゚ㇺㇻㇼㇽㇾㇿ々〻";

/// Units prohibited at the end of a line.
const TRAILING_PROHIBITED: &str = "(（[｛〔〈《「『【〘〖〝‘“｟«\"";

/// `true` when `unit` must not begin a line.
pub(crate) fn starts_line_prohibited(unit: &str) -> bool {
    !unit.is_empty() && LEADING_PROHIBITED.contains(unit)
}

/// `true` when `unit` must not end a line.
pub(crate) fn ends_line_prohibited(unit: &str) -> bool {
    !unit.is_empty() && TRAILING_PROHIBITED.contains(unit)
}

/// Apply both correction passes to a completed wrap-point line.
///
/// Pull-forward first: leading-prohibited units at the cursor are appended
/// to the line even though this may exceed the effective width. Push-back
/// second: a trailing-prohibited unit at the end of the line is removed and
/// the cursor rewound so it opens the next line. The push-back is skipped
/// when the unit is the line's only content beyond the indent; rewinding
/// there would stall the outer loop.
///
/// Returns the corrected cursor position.
pub(crate) fn correct(line: &mut LineBuffer, units: &Units<'_>, mut index: usize) -> usize {
    while let Some(unit) = units.get(index) {
        if !starts_line_prohibited(unit) {
            break;
        }
        line.push_unit(unit);
        index += 1;
    }

    if line.content_units() > 1
        && line.last_unit().is_some_and(ends_line_prohibited)
        && line.pop_unit().is_some()
    {
        index -= 1;
    }

    index
}
