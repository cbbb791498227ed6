// Lookup and suggestion engine
//
// Query contract:
// 1. exact lookup of the case-folded word
// 2. on a miss, retry with stress marks removed; the word keeps its case
// 3. with a following word, work out the ablaut grade it demands
// 4. assemble suggestions, with ablaut corrections in a second section

pub mod status;

use std::borrow::Cow;

use lakota_core::transform::{
    ablaut_form, count_stressed_vowels, destress, ends_with_grade, fold_case, has_ablaut_marker,
    strip_stress,
};
use lakota_core::{AblautGrade, ErrorKind, LkError, Result};
use log::trace;

use crate::dictionary::{Dictionary, EntryId};
pub use status::{ABLAUT_SEPARATOR, SuggestionStatus};

/// Outcome of a spell-check query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionResult {
    /// The word is spelled correctly and fits its context.
    Correct,
    /// No spelling of the word is known.
    NotFound,
    /// The query could not be answered.
    Error(ErrorKind),
    /// Replacement candidates, best first. Ablaut corrections follow an
    /// [`ABLAUT_SEPARATOR`] entry.
    Suggestions(Vec<String>),
}

impl SuggestionResult {
    /// Integer form of the result: 0 for `Correct`, the number of
    /// suggestions for `Suggestions`, a negated error code otherwise.
    pub fn code(&self) -> i32 {
        match self {
            SuggestionResult::Correct => 0,
            SuggestionResult::NotFound => -ErrorKind::WordNotFound.code(),
            SuggestionResult::Error(kind) => -kind.code(),
            SuggestionResult::Suggestions(list) => i32::try_from(list.len()).unwrap_or(i32::MAX),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, SuggestionResult::Correct)
    }

    /// The suggestions, empty for every other variant.
    pub fn suggestions(&self) -> &[String] {
        match self {
            SuggestionResult::Suggestions(list) => list,
            _ => &[],
        }
    }
}

/// Options for [`suggest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Cap on plain suggestions. Ablaut corrections are never dropped.
    pub max_suggestions: Option<usize>,
}

/// Check `word`, optionally in front of `next_word`, and suggest
/// replacements when it is not correct.
///
/// `next_word` is the word that follows in the text; `Some("")` or
/// sentence-final punctuation means the word ends a sentence. `None`
/// disables ablaut checking.
pub fn suggest(
    dict: &Dictionary,
    word: &str,
    next_word: Option<&str>,
    options: &SuggestOptions,
) -> SuggestionResult {
    match lookup(dict, word, next_word, options) {
        Ok(result) => result,
        Err(e) => {
            trace!("lookup of `{word}` failed: {e}");
            SuggestionResult::Error(e.kind())
        }
    }
}

fn lookup(
    dict: &Dictionary,
    word: &str,
    next_word: Option<&str>,
    options: &SuggestOptions,
) -> Result<SuggestionResult> {
    if word.is_empty() {
        return Err(LkError::InvalidArgument("empty word".to_string()));
    }

    let mut word = Cow::Borrowed(word);
    let owners = match dict.find(&word)? {
        Some(owners) => owners,
        None => {
            let folded = fold_case(&word)?;
            if count_stressed_vowels(&folded) == 0 {
                return Ok(SuggestionResult::NotFound);
            }
            let destressed = destress(&folded)?;
            trace!("`{word}` not found, retrying as `{destressed}`");
            let Some(owners) = dict.search(&destressed) else {
                return Ok(SuggestionResult::NotFound);
            };
            word = Cow::Owned(strip_stress(&word)?);
            owners
        }
    };

    let demanded = match next_word {
        Some(next) => dict.demanded_grade(next)?,
        None => None,
    };
    let corrections = match demanded {
        Some(grade) if !ends_with_grade(&fold_case(&word)?, grade) => {
            ablaut_corrections(dict, owners, grade)?
        }
        _ => Vec::new(),
    };

    let exact = owners
        .iter()
        .any(|&id| dict.entry(id).is_some_and(|e| e.text() == &*word));
    if exact && corrections.is_empty() {
        return Ok(SuggestionResult::Correct);
    }

    let mut status = SuggestionStatus::new(options.max_suggestions);
    for text in owners.iter().filter_map(|&id| dict.entry(id)).map(|e| e.text()) {
        if !has_ablaut_marker(text) {
            status.add_suggestion(text);
        }
    }
    for correction in &corrections {
        status.add_correction(correction);
    }

    if status.is_empty() {
        return Ok(SuggestionResult::NotFound);
    }
    Ok(SuggestionResult::Suggestions(status.into_suggestions()))
}

/// Grade-correct spellings of the ablauting roots behind `owners`.
fn ablaut_corrections(
    dict: &Dictionary,
    owners: &[EntryId],
    grade: AblautGrade,
) -> Result<Vec<String>> {
    let mut corrections: Vec<String> = Vec::new();
    for &id in owners {
        let Some(root) = dict.entry(dict.root_of(id)) else {
            continue;
        };
        if let Some(form) = ablaut_form(root.text(), grade)? {
            if !corrections.contains(&form) {
                corrections.push(form);
            }
        }
    }
    Ok(corrections)
}
