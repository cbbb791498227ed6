// LakotaHandle: top-level integration point for Lakota spell checking.
//
// Owns the loaded dictionary and the suggestion options, and provides a
// single API for spell checking, suggestion generation and word
// extraction. Lookups take `&self`, so a loaded handle can be shared
// between threads for read-only use.

use std::path::Path;

use lakota_core::{Result, WordSpan};
use log::info;

use crate::dictionary::{Dictionary, SENTENCE_FINAL};
use crate::lexicon::{LexiconReader, LineReader};
use crate::suggestion::{SuggestOptions, SuggestionResult, suggest};
use crate::tokenizer;

/// A word of checked text that is not correct in its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// Byte range of the word in the checked text.
    pub span: WordSpan,
    /// The word as it appears in the text.
    pub word: String,
    /// `NotFound`, an error, or the suggestions for the word.
    pub result: SuggestionResult,
}

/// Top-level handle that owns a loaded Lakota dictionary.
#[derive(Debug, Clone, Default)]
pub struct LakotaHandle {
    dictionary: Dictionary,
    options: SuggestOptions,
}

impl LakotaHandle {
    /// Wrap an already built dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            options: SuggestOptions::default(),
        }
    }

    /// Load every article `reader` yields.
    pub fn from_reader<L: LineReader + ?Sized>(reader: &mut L) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let stats = dictionary.load(reader)?;
        info!(
            "handle ready: {} articles, {} entries",
            stats.articles,
            dictionary.len()
        );
        Ok(Self::from_dictionary(dictionary))
    }

    /// Load the lexicon file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(&mut LexiconReader::open(path)?)
    }

    /// Load the lexicon named by the `LK_DICTIONARY` environment variable.
    pub fn from_default_path() -> Result<Self> {
        Self::from_reader(&mut LexiconReader::open_default()?)
    }

    /// Load lexicon text held in memory.
    pub fn from_text(text: &str) -> Result<Self> {
        Dictionary::from_text(text).map(Self::from_dictionary)
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Check whether a word, taken on its own, is correctly spelled.
    pub fn spell(&self, word: &str) -> bool {
        self.suggest(word, None).is_correct()
    }

    /// Check `word` and suggest replacements.
    ///
    /// `next_word` is the word that follows it in the text; pass `Some("")`
    /// at the end of a sentence and `None` to skip ablaut checking.
    pub fn suggest(&self, word: &str, next_word: Option<&str>) -> SuggestionResult {
        suggest(&self.dictionary, word, next_word, &self.options)
    }

    /// Words of `text`, in order.
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenizer::words(text)
            .filter_map(|span| span.slice(text))
            .collect()
    }

    /// Check every word of `text` in its context and return the ones that
    /// are not correct.
    ///
    /// A word followed by sentence-final punctuation, or by nothing, is
    /// checked as the end of a sentence.
    pub fn check_text(&self, text: &str) -> Vec<Misspelling> {
        let spans: Vec<WordSpan> = tokenizer::words(text).collect();
        let mut found = Vec::new();
        for (i, span) in spans.iter().enumerate() {
            let Some(word) = span.slice(text) else {
                continue;
            };
            let gap_end = spans.get(i + 1).map_or(text.len(), |next| next.start);
            let gap = text.get(span.end()..gap_end).unwrap_or("");
            let next = if gap.contains(SENTENCE_FINAL) {
                ""
            } else {
                spans
                    .get(i + 1)
                    .and_then(|next| next.slice(text))
                    .unwrap_or("")
            };
            let result = self.suggest(word, Some(next));
            if !result.is_correct() {
                found.push(Misspelling {
                    span: *span,
                    word: word.to_string(),
                    result,
                });
            }
        }
        found
    }

    /// Number of dictionary entries, ablaut variants included.
    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Cap the plain suggestions returned (`None` for no limit). Ablaut
    /// corrections are never dropped.
    pub fn set_max_suggestions(&mut self, value: Option<usize>) {
        self.options.max_suggestions = value;
    }

    pub fn options(&self) -> SuggestOptions {
        self.options
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakota_core::ErrorKind;

    const LEXICON: &str = "\
# test lexicon
S s\u{00E1}pA
-:n ktA
- ki\u{014B}
N wi\u{010D}h\u{00E1}\u{0161}a
";

    fn handle() -> LakotaHandle {
        LakotaHandle::from_text(LEXICON).unwrap()
    }

    #[test]
    fn spell_single_words() {
        let h = handle();
        assert!(h.spell("ki\u{014B}"));
        assert!(h.spell("s\u{00E1}pa"));
        assert!(!h.spell("Ki\u{014B}"));
        assert!(!h.spell("K\u{00ED}\u{014B}"));
        assert!(!h.spell("xyzzy"));
        assert!(!h.spell(""));
    }

    #[test]
    fn suggest_with_context() {
        let h = handle();
        assert_eq!(
            h.suggest("s\u{00E1}pa", Some(".")).suggestions(),
            ["s\u{00E1}pa", "-", "s\u{00E1}pe"]
        );
        assert!(h.suggest("s\u{00E1}pi\u{014B}", Some("kte")).is_correct());
    }

    #[test]
    fn max_suggestions_option() {
        let mut h = LakotaHandle::from_text("s k\u{00F3}la\ns kol\u{00E1}\n").unwrap();
        assert_eq!(h.suggest("kola", None).suggestions().len(), 2);
        h.set_max_suggestions(Some(1));
        assert_eq!(h.options().max_suggestions, Some(1));
        assert_eq!(h.suggest("kola", None).suggestions(), ["k\u{00F3}la"]);
    }

    #[test]
    fn words_of_text() {
        let h = handle();
        assert_eq!(
            h.words("He s\u{00E1}pa k'\u{00E1}, kiŋ."),
            ["He", "s\u{00E1}pa", "k'\u{00E1}", "kiŋ"]
        );
    }

    #[test]
    fn check_text_uses_following_word() {
        let h = handle();
        let found = h.check_text("s\u{00E1}pa kte. ki\u{014B} s\u{00E1}pe");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "s\u{00E1}pa");
        assert_eq!(found[0].span, WordSpan::new(0, 5));
        assert_eq!(
            found[0].result.suggestions(),
            ["s\u{00E1}pa", "-", "s\u{00E1}pi\u{014B}"]
        );
    }

    #[test]
    fn check_text_sentence_end() {
        let h = handle();
        let found = h.check_text("ki\u{014B} s\u{00E1}pa. s\u{00E1}pe");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].result.suggestions()[2], "s\u{00E1}pe");
    }

    #[test]
    fn word_count_includes_variants() {
        // sápA + 3 variants, ktA + 3 variants, kiŋ, wičháša
        assert_eq!(handle().word_count(), 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = LakotaHandle::from_path("/nonexistent/lexicon.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFile);
    }

    #[test]
    fn version_is_set() {
        assert!(!LakotaHandle::get_version().is_empty());
    }
}
