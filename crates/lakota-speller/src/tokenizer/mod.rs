// Word-boundary scanner: locate words in free text
//
// A four-state automaton walks the text either forward from an offset
// (`next_word`) or backward from an offset (`word_start`). Letters always
// belong to a word; glottal-stop marks (`ʼ`, `'`, `` ` ``) belong to it only
// between two letters. Leading and trailing marks are punctuation.
//
// All offsets and spans are byte positions into the scanned text.

use lakota_core::WordSpan;
use lakota_core::character::{is_glottal_stop, is_letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SkippingNonWord,
    InsideWord,
    AfterInternalQuote,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Letter,
    Quote,
    Other,
}

fn char_kind(c: char) -> CharKind {
    if is_letter(c) {
        CharKind::Letter
    } else if is_glottal_stop(c) {
        CharKind::Quote
    } else {
        CharKind::Other
    }
}

/// Find the first word starting at or after byte `offset`.
///
/// An offset inside a multi-byte codepoint moves forward to the next
/// codepoint. Returns `None` if no letter follows.
pub fn next_word(text: &str, offset: usize) -> Option<WordSpan> {
    if offset > text.len() {
        return None;
    }
    let mut from = offset;
    while !text.is_char_boundary(from) {
        from += 1;
    }

    let mut state = ScanState::SkippingNonWord;
    let mut start = from;
    let mut end = text.len();
    let mut quote_at = from;

    for (i, c) in text[from..].char_indices() {
        let pos = from + i;
        state = match (state, char_kind(c)) {
            (ScanState::SkippingNonWord, CharKind::Letter) => {
                start = pos;
                ScanState::InsideWord
            }
            (ScanState::SkippingNonWord, _) => ScanState::SkippingNonWord,
            (ScanState::InsideWord, CharKind::Letter) => ScanState::InsideWord,
            (ScanState::InsideWord, CharKind::Quote) => {
                quote_at = pos;
                ScanState::AfterInternalQuote
            }
            (ScanState::InsideWord, CharKind::Other) => {
                end = pos;
                ScanState::Done
            }
            (ScanState::AfterInternalQuote, CharKind::Letter) => ScanState::InsideWord,
            (ScanState::AfterInternalQuote, _) => {
                end = quote_at;
                ScanState::Done
            }
            (ScanState::Done, _) => ScanState::Done,
        };
        if state == ScanState::Done {
            break;
        }
    }

    match state {
        ScanState::SkippingNonWord => None,
        ScanState::AfterInternalQuote => Some(WordSpan::new(start, quote_at - start)),
        ScanState::InsideWord | ScanState::Done => Some(WordSpan::new(start, end - start)),
    }
}

/// Find the start of the word at or before byte `offset`.
///
/// The codepoint at `offset` is examined first (the last codepoint when
/// `offset` equals the text length); an offset inside a codepoint moves back
/// to its first byte. Non-letters are skipped backward until a word is
/// found. Returns `None` for an offset past the end of the text or when only
/// non-letters precede it.
pub fn word_start(text: &str, offset: usize) -> Option<usize> {
    if offset > text.len() {
        return None;
    }
    let upto = if offset == text.len() {
        offset
    } else {
        let mut at = offset;
        while !text.is_char_boundary(at) {
            at -= 1;
        }
        at + text[at..].chars().next().map_or(0, char::len_utf8)
    };

    let mut state = ScanState::SkippingNonWord;
    let mut start = 0;
    for (pos, c) in text[..upto].char_indices().rev() {
        state = match (state, char_kind(c)) {
            (ScanState::SkippingNonWord, CharKind::Letter)
            | (ScanState::InsideWord, CharKind::Letter)
            | (ScanState::AfterInternalQuote, CharKind::Letter) => {
                start = pos;
                ScanState::InsideWord
            }
            (ScanState::SkippingNonWord, _) => ScanState::SkippingNonWord,
            (ScanState::InsideWord, CharKind::Quote) => ScanState::AfterInternalQuote,
            (ScanState::InsideWord, CharKind::Other)
            | (ScanState::AfterInternalQuote, _)
            | (ScanState::Done, _) => ScanState::Done,
        };
        if state == ScanState::Done {
            break;
        }
    }

    (state != ScanState::SkippingNonWord).then_some(start)
}

/// The whole word around byte `offset`: `word_start` followed by a forward
/// scan from that start.
pub fn word_at(text: &str, offset: usize) -> Option<WordSpan> {
    word_start(text, offset).and_then(|start| next_word(text, start))
}

/// Iterate over every word of `text`, in order.
pub fn words(text: &str) -> Words<'_> {
    Words { text, offset: 0 }
}

/// Iterator returned by [`words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    offset: usize,
}

impl Iterator for Words<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        let span = next_word(self.text, self.offset)?;
        self.offset = span.end();
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURE: &str = "some example string";
    const QUOTED: &str = "'some' ex'ample s`tri'ng";
    const UTF: &str = "\u{010D}\u{00ED}k\u{02BC}ala m\u{00E1}ki\u{014B}"; // číkʼala mákiŋ

    fn span(start: usize, len: usize) -> Option<WordSpan> {
        Some(WordSpan::new(start, len))
    }

    #[test]
    fn forward_plain_text() {
        assert_eq!(next_word(PURE, 0), span(0, 4));
        assert_eq!(next_word(PURE, 4), span(5, 7));
        assert_eq!(next_word(PURE, 12), span(13, 6));
        assert_eq!(next_word(PURE, 19), None);
        assert_eq!(next_word(PURE, 40), None);
    }

    #[test]
    fn forward_excludes_outer_quotes() {
        assert_eq!(next_word(QUOTED, 0), span(1, 4));
        assert_eq!(next_word(QUOTED, 5), span(7, 8));
        assert_eq!(next_word(QUOTED, 15), span(16, 8));
        assert_eq!(next_word(QUOTED, 24), None);
    }

    #[test]
    fn forward_multibyte() {
        assert_eq!(next_word(UTF, 0), span(0, 10));
        // Offset 1 is inside 'č'.
        assert_eq!(next_word(UTF, 1), span(2, 8));
        assert_eq!(next_word(UTF, 10), span(11, 7));
    }

    #[test]
    fn forward_stops_at_double_quote() {
        assert_eq!(next_word("ab''cd", 0), span(0, 2));
        assert_eq!(next_word("ab''cd", 2), span(4, 2));
        assert_eq!(next_word("ab'", 0), span(0, 2));
    }

    #[test]
    fn backward_plain_text() {
        assert_eq!(word_start(PURE, 30), None);
        for pos in [0, 2, 3, 4] {
            assert_eq!(word_start(PURE, pos), Some(0), "pos {pos}");
        }
        assert_eq!(word_start(PURE, 5), Some(5));
        assert_eq!(word_start(PURE, 19), Some(13));
    }

    #[test]
    fn backward_quoted_text() {
        assert_eq!(word_start(QUOTED, 0), None);
        for pos in [3, 4, 5, 6] {
            assert_eq!(word_start(QUOTED, pos), Some(1), "pos {pos}");
        }
        assert_eq!(word_start(QUOTED, 10), Some(7));
        assert_eq!(word_start(QUOTED, 23), Some(16));
    }

    #[test]
    fn backward_multibyte() {
        for pos in [0, 2, 3, 4, 6, 8] {
            assert_eq!(word_start(UTF, pos), Some(0), "pos {pos}");
        }
        assert_eq!(word_start(UTF, 12), Some(11));
        assert_eq!(word_start(UTF, 15), Some(11));
    }

    #[test]
    fn forward_and_backward_agree_inside_words() {
        for text in [PURE, QUOTED, UTF, "ab''cd x'", "k'a`b\u{02BC}c"] {
            for span in words(text) {
                for pos in span.start..span.end() {
                    if !text.is_char_boundary(pos) {
                        continue;
                    }
                    assert_eq!(word_at(text, pos), Some(span), "{text:?} at {pos}");
                }
            }
        }
    }

    #[test]
    fn words_iterates_in_order() {
        let found: Vec<&str> = words(QUOTED).filter_map(|s| s.slice(QUOTED)).collect();
        assert_eq!(found, ["some", "ex'ample", "s`tri'ng"]);
        assert_eq!(words("... ' `").count(), 0);
    }
}
