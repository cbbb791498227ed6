//! Morphology-aware spell checking for Lakota.
//!
//! A lexicon of one-line articles is expanded into every inflected and
//! normalized spelling it licenses, and each spelling is indexed in a
//! codepoint trie. Lookups answer with a verdict or a ranked suggestion
//! list that also corrects the ablaut grade a following word demands.
//!
//! # Architecture
//!
//! - [`dictionary`] -- entry store, article parser and form generator
//! - [`lexicon`] -- line reader and lexicon loader
//! - [`suggestion`] -- lookup and suggestion engine
//! - [`tokenizer`] -- word-boundary scanner (feature `tokenize`)
//! - [`handle`] -- one-stop [`LakotaHandle`](handle::LakotaHandle) (feature `handle`)

pub mod dictionary;
pub mod lexicon;
pub mod suggestion;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;

pub use dictionary::{Dictionary, EntryId, EntryKind, WordEntry};
pub use lexicon::{LexiconReader, LineReader, LoadStats};
pub use suggestion::{SuggestOptions, SuggestionResult, suggest};
