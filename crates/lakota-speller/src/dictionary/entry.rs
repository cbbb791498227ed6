// Dictionary entries and ablaut records

use lakota_core::{AblautGrade, WordType};

/// Identity of a dictionary entry: its index in the entry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) u32);

impl EntryId {
    /// Position of the entry in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How an entry came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// The base form of a lexicon article.
    Base,
    /// An extra form listed in the article.
    Listed,
    /// One of the three grade forms synthesized from an ablaut-marked entry.
    AblautVariant,
}

/// One concrete surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub(crate) text: String,
    pub(crate) word_type: WordType,
    pub(crate) contracted: Option<String>,
    pub(crate) base: Option<EntryId>,
    pub(crate) kind: EntryKind,
}

impl WordEntry {
    /// The stored spelling, exactly as written in (or generated from) the
    /// lexicon.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    /// Contracted spelling of a verb's base entry.
    pub fn contracted(&self) -> Option<&str> {
        self.contracted.as_deref()
    }

    /// The entry this one was derived from. `None` for article base entries.
    pub fn base(&self) -> Option<EntryId> {
        self.base
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Association of an entry with the ablaut grade it demands of the
/// preceding word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AblautRecord {
    pub entry: EntryId,
    pub grade: AblautGrade,
}
