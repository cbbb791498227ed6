// Word span type produced by the word-boundary scanner

/// A word located inside a text buffer, as a byte range.
///
/// Spans never own text; use [`WordSpan::slice`] to borrow the word back out
/// of the buffer it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSpan {
    /// Byte offset of the first codepoint of the word.
    pub start: usize,
    /// Length of the word in bytes.
    pub len: usize,
}

impl WordSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last byte of the word.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Borrow the word from the text it was found in.
    ///
    /// Returns `None` if the span does not lie on codepoint boundaries of
    /// `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_borrows_word() {
        let text = "some example";
        let span = WordSpan::new(5, 7);
        assert_eq!(span.end(), 12);
        assert_eq!(span.slice(text), Some("example"));
    }

    #[test]
    fn slice_outside_text_is_none() {
        assert_eq!(WordSpan::new(3, 10).slice("abc"), None);
        // Splits the two-byte 'č'.
        assert_eq!(WordSpan::new(1, 1).slice("\u{010D}a"), None);
    }
}
