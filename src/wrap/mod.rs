//! Greedy display-width wrapping with kinsoku correction.
//!
//! One pass over the document's grapheme clusters fills each output line to
//! an effective width, breaking only where [`breakable`] permits, then hands
//! wrap-point lines to the kinsoku correction in [`kinsoku`]. Lines ended by
//! a source break keep their author-intended boundary untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    lazy_regex,
    segment::Units,
    width::{str_width, unit_width},
};

mod kinsoku;
mod line_buffer;

use line_buffer::LineBuffer;

/// Internal marker for a collapsed source line break.
const BREAK_UNIT: &str = "\n";

/// Open and close delimiters of an unsplittable bracket span.
const SPAN_OPEN: &str = "<";
const SPAN_CLOSE: &str = ">";

static LINE_BREAK_RE: LazyLock<Regex> = lazy_regex!(r"\r\n|\r|\n", "line break pattern");

/// Wrap `text` to `max_width` display columns, prefixing every line with
/// `indent`.
///
/// The indent's width counts toward each line's budget. Source line breaks
/// are preserved; consecutive breaks become blank output lines. Lines are
/// joined with `\n` and no separator follows the last line.
///
/// A `max_width` of `0` is clamped to `1`.
#[must_use]
pub fn wrap(text: &str, indent: &str, max_width: usize) -> String {
    let max_width = max_width.max(1);
    let normalized = LINE_BREAK_RE.replace_all(text, BREAK_UNIT);
    let content = normalized.trim_matches('\n');
    let units = Units::new(content);
    let effective = effective_width(str_width(indent), max_width);

    let mut out = String::new();
    let mut index = 0;
    while index < units.len() {
        if !out.is_empty() {
            out.push('\n');
        }

        let mut line = LineBuffer::new(indent);
        let newline_terminated = fill_line(&mut line, &units, &mut index, effective);
        if !newline_terminated {
            index = kinsoku::correct(&mut line, &units, index);
        }

        if !line.is_blank() {
            out.push_str(&line.take());
        }
    }
    out
}

/// Effective per-line width: never lets the content budget fall below half
/// of `max_width`, even under a wide indent.
fn effective_width(indent_width: usize, max_width: usize) -> usize {
    if indent_width > max_width - max_width / 2 {
        indent_width + max_width / 2
    } else {
        max_width
    }
}

/// Fill one line from the cursor, advancing it past consumed units.
///
/// Returns `true` when the line was terminated by a source break unit, in
/// which case no kinsoku correction applies.
fn fill_line(line: &mut LineBuffer, units: &Units<'_>, index: &mut usize, effective: usize) -> bool {
    while let Some(current) = units.get(*index) {
        if current == BREAK_UNIT {
            *index += 1;
            return true;
        }

        line.push_unit(current);
        *index += 1;

        if current == SPAN_OPEN {
            // Append the whole span through its close in one step; the
            // break test below never sees the inside of the span.
            if let Some(close) = units.find_from(*index, SPAN_CLOSE) {
                line.push_units(units.slice(*index, close - *index + 1));
                *index = close + 1;
            }
        }

        let next = units.get(*index);
        if next == Some(BREAK_UNIT) {
            *index += 1;
            return true;
        }

        if (line.width() >= effective || *index >= units.len()) && breakable(current, next) {
            break;
        }
    }
    false
}

/// Decide whether a line may legally break between `prev` (last unit placed)
/// and `next` (unit that would start the next line).
///
/// Two adjacent single-width units are the only unbreakable adjacency: runs
/// of Latin letters and URL characters stay whole, while double-width text
/// breaks anywhere.
fn breakable(prev: &str, next: Option<&str>) -> bool {
    let Some(next) = next else {
        // End of input trivially permits a break.
        return true;
    };
    if unit_width(next) == 1 && next.chars().all(char::is_whitespace) {
        // A plain space is not needed at the head of the next line.
        return true;
    }
    if prev == BREAK_UNIT {
        return true;
    }
    if unit_width(prev) == 1 {
        return unit_width(next) != 1;
    }
    true
}

#[cfg(test)]
mod tests;
