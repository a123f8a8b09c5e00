//! Char offset indexing shared by every detector and provider
//!
//! The `regex` crate reports byte offsets while spans and provider results are
//! expressed in chars. All conversions between the two go through [`TextIndex`].

use std::ops::Range;

/// Byte position of every char boundary in a document
#[derive(Debug, Clone)]
pub struct TextIndex<'a> {
    text: &'a str,
    /// `boundaries[i]` is the byte offset of char `i`; the last entry is `text.len()`
    boundaries: Vec<usize>,
}

impl<'a> TextIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// Underlying text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length in chars
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Char offset of a byte offset, `None` when it is not a char boundary
    pub fn byte_to_char(&self, byte: usize) -> Option<usize> {
        self.boundaries.binary_search(&byte).ok()
    }

    /// Byte offset of a char offset, `None` past the end of the text
    pub fn char_to_byte(&self, ch: usize) -> Option<usize> {
        self.boundaries.get(ch).copied()
    }

    /// Convert a byte range into a char range
    pub fn char_range(&self, bytes: Range<usize>) -> Option<Range<usize>> {
        Some(self.byte_to_char(bytes.start)?..self.byte_to_char(bytes.end)?)
    }

    /// Substring for a char range, `None` when out of bounds or reversed
    pub fn slice(&self, chars: Range<usize>) -> Option<&'a str> {
        if chars.start > chars.end {
            return None;
        }
        let start = self.char_to_byte(chars.start)?;
        let end = self.char_to_byte(chars.end)?;
        self.text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identical() {
        let index = TextIndex::new("hello");
        assert_eq!(index.char_len(), 5);
        assert_eq!(index.byte_to_char(3), Some(3));
        assert_eq!(index.char_to_byte(5), Some(5));
        assert_eq!(index.char_to_byte(6), None);
    }

    #[test]
    fn test_multibyte_offsets() {
        // 'é' is two bytes
        let index = TextIndex::new("né le 3");
        assert_eq!(index.char_len(), 7);
        assert_eq!(index.byte_to_char(3), Some(2));
        assert_eq!(index.byte_to_char(2), None);
        assert_eq!(index.char_range(4..8), Some(3..7));
        assert_eq!(index.slice(0..2), Some("né"));
    }

    #[test]
    fn test_empty_text() {
        let index = TextIndex::new("");
        assert_eq!(index.char_len(), 0);
        assert_eq!(index.slice(0..0), Some(""));
        assert_eq!(index.slice(0..1), None);
    }

    #[test]
    fn test_reversed_slice() {
        let index = TextIndex::new("abc");
        assert_eq!(index.slice(2..1), None);
    }
}
