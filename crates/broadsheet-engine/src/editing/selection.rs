use std::collections::HashMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection start {start} is after end {end}")]
    Inverted { start: usize, end: usize },
    #[error("selection {start}..{end} exceeds paragraph length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("selection offset {offset} falls inside a surrogate pair")]
    SplitsCharacter { offset: usize },
}

/// A cursor or selection inside one paragraph.
///
/// Offsets count UTF-16 code units, the unit host text fields report
/// selections in. A `•` occupies one position and an emoji outside the BMP
/// occupies two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range and checks that it fits inside `text`.
    pub fn within(text: &str, start: usize, end: usize) -> Result<Self, SelectionError> {
        let range = Self::new(start, end)?;
        let len = utf16_len(text);
        if end > len {
            return Err(SelectionError::OutOfBounds { start, end, len });
        }
        for offset in [start, end] {
            if utf16_to_byte(text, offset).is_none() {
                return Err(SelectionError::SplitsCharacter { offset });
            }
        }
        Ok(range)
    }

    /// A collapsed range (plain cursor) at `at`.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Maps this UTF-16 range onto byte offsets of `text`.
    ///
    /// Returns `None` when the range does not fit the text or either end
    /// splits a surrogate pair.
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        if self.start > self.end {
            return None;
        }
        let start = utf16_to_byte(text, self.start)?;
        let end = start + utf16_to_byte(&text[start..], self.end - self.start)?;
        Some(start..end)
    }

    /// Whether this range still fits inside `text`.
    pub fn fits(&self, text: &str) -> bool {
        self.byte_range(text).is_some()
    }
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

fn utf16_to_byte(text: &str, units: usize) -> Option<usize> {
    let mut seen = 0;
    for (byte, ch) in text.char_indices() {
        if seen >= units {
            return (seen == units).then_some(byte);
        }
        seen += ch.len_utf16();
    }
    (seen == units).then_some(text.len())
}

/// Last observed selection per paragraph slot.
///
/// Keys are paragraph indices in insertion order. The tracker never renumbers
/// them: whoever inserts or removes paragraphs must clear or re-key entries.
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    ranges: HashMap<usize, SelectionRange>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `range` for `paragraph`, replacing whatever was there.
    pub fn record(&mut self, paragraph: usize, range: SelectionRange) {
        self.ranges.insert(paragraph, range);
    }

    pub fn get(&self, paragraph: usize) -> Option<SelectionRange> {
        self.ranges.get(&paragraph).copied()
    }

    /// Drops the entry for one paragraph, returning it.
    pub fn forget(&mut self, paragraph: usize) -> Option<SelectionRange> {
        self.ranges.remove(&paragraph)
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            SelectionRange::new(5, 2),
            Err(SelectionError::Inverted { start: 5, end: 2 })
        );
    }

    #[test]
    fn within_checks_length() {
        assert!(SelectionRange::within("• ab", 0, 4).is_ok());
        assert_eq!(
            SelectionRange::within("• ab", 0, 5),
            Err(SelectionError::OutOfBounds {
                start: 0,
                end: 5,
                len: 4
            })
        );
    }

    #[test]
    fn byte_range_skips_multibyte_bullet() {
        let text = "• item";
        let range = SelectionRange { start: 2, end: 6 };
        let bytes = range.byte_range(text).unwrap();
        assert_eq!(&text[bytes], "item");
    }

    #[test]
    fn offsets_count_utf16_units() {
        let text = "😀 hi";
        assert_eq!(utf16_len(text), 5);
        let bytes = SelectionRange { start: 3, end: 5 }.byte_range(text).unwrap();
        assert_eq!(&text[bytes], "hi");
        assert!(SelectionRange::within(text, 0, 5).is_ok());
    }

    #[test]
    fn offset_inside_surrogate_pair_is_rejected() {
        assert_eq!(SelectionRange::caret(1).byte_range("😀 hi"), None);
        assert_eq!(SelectionRange { start: 0, end: 1 }.byte_range("x😀"), Some(0..1));
        assert_eq!(SelectionRange { start: 0, end: 2 }.byte_range("x😀"), None);
        assert_eq!(
            SelectionRange::within("😀 hi", 1, 4),
            Err(SelectionError::SplitsCharacter { offset: 1 })
        );
    }

    #[test]
    fn byte_range_at_end_of_text() {
        let range = SelectionRange::caret(3);
        assert_eq!(range.byte_range("héé"), Some(5..5));
    }

    #[test]
    fn byte_range_out_of_bounds() {
        assert_eq!(SelectionRange { start: 1, end: 9 }.byte_range("abc"), None);
        assert_eq!(SelectionRange::caret(4).byte_range("abc"), None);
    }

    #[test]
    fn byte_range_of_empty_text() {
        assert_eq!(SelectionRange::caret(0).byte_range(""), Some(0..0));
    }

    #[test]
    fn tracker_last_write_wins() {
        let mut tracker = SelectionTracker::new();
        tracker.record(0, SelectionRange::caret(1));
        tracker.record(0, SelectionRange { start: 2, end: 4 });
        assert_eq!(tracker.get(0), Some(SelectionRange { start: 2, end: 4 }));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn tracker_slots_are_independent() {
        let mut tracker = SelectionTracker::new();
        tracker.record(0, SelectionRange::caret(1));
        tracker.record(3, SelectionRange::caret(7));
        assert_eq!(tracker.get(1), None);
        assert_eq!(tracker.forget(0), Some(SelectionRange::caret(1)));
        assert_eq!(tracker.get(0), None);
        assert_eq!(tracker.get(3), Some(SelectionRange::caret(7)));
    }

    #[test]
    fn tracker_clear() {
        let mut tracker = SelectionTracker::new();
        tracker.record(2, SelectionRange::caret(0));
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
