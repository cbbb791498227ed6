// Dictionary store: entry arena, ablaut registry and spelling index
//
// Entries are only ever appended. An entry's `base` always points at an
// entry created before it, and an ablaut variant never points at another
// variant, so every base chain is finite and short.

pub mod article;
pub mod entry;
pub mod generator;

use hashbrown::HashMap;
use lakota_core::transform::fold_case;
use lakota_core::{AblautGrade, LkError, Result};
use lakota_trie::Trie;
use log::trace;

pub use article::ArticleOutcome;
pub use entry::{AblautRecord, EntryId, EntryKind, WordEntry};

/// Punctuation that ends a sentence. A sentence-final position demands the
/// e-grade of the preceding word.
pub const SENTENCE_FINAL: &[char] = &['.', '!', '?', ';'];

/// All entries of a lexicon together with the index of their spellings.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
    ablaut: Vec<AblautRecord>,
    grades: HashMap<EntryId, AblautGrade>,
    index: Trie<EntryId>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct indexed spellings.
    pub fn spelling_count(&self) -> usize {
        self.index.len()
    }

    pub fn entry(&self, id: EntryId) -> Option<&WordEntry> {
        self.entries.get(id.index())
    }

    /// Every entry with its identity, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &WordEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (EntryId(i as u32), e))
    }

    /// Every ablaut record, in insertion order.
    pub fn ablaut_records(&self) -> &[AblautRecord] {
        &self.ablaut
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Owners of an already normalized spelling.
    pub fn search(&self, spelling: &str) -> Option<&[EntryId]> {
        self.index.search(spelling)
    }

    /// Case-fold `word` and look up its owners.
    pub fn find(&self, word: &str) -> Result<Option<&[EntryId]>> {
        let folded = fold_case(word)?;
        Ok(self.index.search(&folded))
    }

    /// Follow `id`'s base chain to the article entry it started from.
    pub fn root_of(&self, id: EntryId) -> EntryId {
        let mut current = id;
        while let Some(base) = self.entry(current).and_then(WordEntry::base) {
            current = base;
        }
        current
    }

    /// Ablaut grade recorded for `id`, or for the nearest entry on its base
    /// chain that has one.
    pub fn grade_of(&self, id: EntryId) -> Option<AblautGrade> {
        let mut current = Some(id);
        while let Some(id) = current {
            if let Some(&grade) = self.grades.get(&id) {
                return Some(grade);
            }
            current = self.entry(id).and_then(WordEntry::base);
        }
        None
    }

    /// Ablaut grade of the entry whose stored text is exactly `word`.
    pub fn check_ablaut(&self, word: &str) -> Result<Option<AblautGrade>> {
        let Some(owners) = self.find(word)? else {
            return Ok(None);
        };
        Ok(owners
            .iter()
            .find(|&&id| self.entry(id).is_some_and(|e| e.text == word))
            .and_then(|&id| self.grade_of(id)))
    }

    /// Grade that `next_word` demands of the word before it.
    ///
    /// A missing next word (empty, or starting with sentence-final
    /// punctuation) demands the e-grade. Otherwise the grades recorded for
    /// the next word's owners decide: a single agreed grade is demanded;
    /// conflicting grades, or no recorded grade, demand nothing. Owners
    /// without a grade do not take part in the vote.
    pub fn demanded_grade(&self, next_word: &str) -> Result<Option<AblautGrade>> {
        if next_word.is_empty() || next_word.starts_with(SENTENCE_FINAL) {
            return Ok(Some(AblautGrade::E));
        }
        let Some(owners) = self.find(next_word)? else {
            return Ok(None);
        };
        let mut demanded = None;
        for grade in owners.iter().filter_map(|&id| self.grade_of(id)) {
            match demanded {
                None => demanded = Some(grade),
                Some(previous) if previous != grade => {
                    trace!("conflicting ablaut grades for `{next_word}`");
                    return Ok(None);
                }
                Some(_) => {}
            }
        }
        Ok(demanded)
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Append an entry and return its identity.
    ///
    /// The base reference must name an existing entry, and ablaut variants
    /// may not be derived from other variants.
    pub(crate) fn push_entry(&mut self, entry: WordEntry) -> Result<EntryId> {
        if let Some(base) = entry.base {
            let Some(base_entry) = self.entry(base) else {
                return Err(LkError::InvalidArgument(format!(
                    "base entry {} does not exist",
                    base.index()
                )));
            };
            if entry.kind == EntryKind::AblautVariant
                && base_entry.kind == EntryKind::AblautVariant
            {
                return Err(LkError::InvalidArgument(format!(
                    "`{}` cannot be derived from the ablaut variant `{}`",
                    entry.text, base_entry.text
                )));
            }
        }
        let id = u32::try_from(self.entries.len())
            .map(EntryId)
            .map_err(|_| LkError::OutOfMemory("numbering dictionary entries"))?;
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(id)
    }

    /// Record that `id` demands `grade` of the preceding word.
    pub(crate) fn record_ablaut(&mut self, id: EntryId, grade: AblautGrade) -> Result<()> {
        if self.grades.contains_key(&id) {
            return Ok(());
        }
        self.ablaut.try_reserve(1)?;
        self.ablaut.push(AblautRecord { entry: id, grade });
        self.grades.insert(id, grade);
        Ok(())
    }

    /// Index one spelling for `id`.
    pub(crate) fn index_spelling(&mut self, spelling: &str, id: EntryId) -> Result<()> {
        if self.index.insert(spelling, id)? {
            trace!("indexed `{spelling}` for entry {}", id.index());
        }
        Ok(())
    }
}
