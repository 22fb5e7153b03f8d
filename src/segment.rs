//! Grapheme-cluster view over a normalized document.
//!
//! All wrapping decisions index the document in grapheme-cluster positions,
//! never byte offsets, so surrogate pairs and combining sequences stay intact
//! under counting and slicing. Out-of-range access is clamped by
//! construction: `get` returns `None` and `slice` returns the longest
//! available range instead of panicking.

use unicode_segmentation::UnicodeSegmentation;

/// Ordered sequence of atomic character units for one document.
#[derive(Debug)]
pub struct Units<'a> {
    units: Vec<&'a str>,
}

impl<'a> Units<'a> {
    /// Segment `text` into extended grapheme clusters.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            units: text.graphemes(true).collect(),
        }
    }

    /// Number of units in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when the document has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.units.get(index).copied()
    }

    /// Units in `[start, start + len)`, clamped to the available range.
    ///
    /// A `start` beyond the end yields an empty slice; a `len` overrunning
    /// the end yields the longest available prefix.
    #[must_use]
    pub fn slice(&self, start: usize, len: usize) -> &[&'a str] {
        let begin = start.min(self.units.len());
        let end = start.saturating_add(len).min(self.units.len());
        &self.units[begin..end]
    }

    /// Position of the first occurrence of `unit` at or after `start`.
    #[must_use]
    pub fn find_from(&self, start: usize, unit: &str) -> Option<usize> {
        self.units
            .iter()
            .skip(start)
            .position(|u| *u == unit)
            .map(|offset| start + offset)
    }
}
