//! Line buffer for the greedy fill loop.
//!
//! This module encapsulates the mutable state accumulated while one output
//! line is filled: the line text (indent included) and its running display
//! width, kept in lockstep so the fill loop never re-measures the line.

use unicode_segmentation::UnicodeSegmentation;

use crate::width::{str_width, unit_width};

pub(crate) struct LineBuffer {
    text: String,
    width: usize,
    indent_len: usize,
}

impl LineBuffer {
    /// Start a line seeded with the indent.
    pub(crate) fn new(indent: &str) -> Self {
        Self {
            text: indent.to_string(),
            width: str_width(indent),
            indent_len: indent.len(),
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Append a single unit.
    pub(crate) fn push_unit(&mut self, unit: &str) {
        self.text.push_str(unit);
        self.width += unit_width(unit);
    }

    /// Append a run of units as one block (bracket spans).
    pub(crate) fn push_units(&mut self, units: &[&str]) {
        for unit in units {
            self.push_unit(unit);
        }
    }

    /// Number of units beyond the indent.
    pub(crate) fn content_units(&self) -> usize {
        self.text[self.indent_len..].graphemes(true).count()
    }

    /// Remove and return the last unit, if any content beyond the indent
    /// remains. The indent itself is never popped.
    pub(crate) fn pop_unit(&mut self) -> Option<String> {
        let content = &self.text[self.indent_len..];
        let (offset, last) = content.grapheme_indices(true).last()?;
        let removed = last.to_string();
        self.width -= unit_width(last);
        self.text.truncate(self.indent_len + offset);
        Some(removed)
    }

    /// Last unit currently in the buffer, indent included.
    pub(crate) fn last_unit(&self) -> Option<&str> {
        self.text.graphemes(true).next_back()
    }

    /// `true` when the line holds nothing but whitespace (indent included).
    pub(crate) fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Consume the buffer, yielding the finished line.
    pub(crate) fn take(self) -> String {
        self.text
    }
}
