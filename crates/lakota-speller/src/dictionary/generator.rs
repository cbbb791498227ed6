// Form generator: indexed spellings and ablaut variants of an entry

use lakota_core::transform::{
    ablaut_form, count_stressed_vowels, destress, fold_case, has_ablaut_marker, has_glottal_stop,
    remove_glottal_stop, to_ascii,
};
use lakota_core::{AblautGrade, Result};
use log::trace;

use super::{Dictionary, EntryId, EntryKind, WordEntry};

/// Ordered list of distinct spellings.
#[derive(Debug, Default)]
struct Spellings(Vec<String>);

impl Spellings {
    fn push(&mut self, spelling: String) {
        if !self.0.contains(&spelling) {
            self.0.push(spelling);
        }
    }

    /// Push `spelling`, followed by its glottal-stop-free form when the source
    /// word has a glottal stop.
    fn push_with_glottal(&mut self, spelling: String, glottal: bool) -> Result<()> {
        let without = if glottal {
            Some(remove_glottal_stop(&spelling)?)
        } else {
            None
        };
        self.push(spelling);
        if let Some(without) = without {
            self.push(without);
        }
        Ok(())
    }
}

/// Every spelling under which `text` is indexed, in insertion order:
///
/// 1. the text itself
/// 2. its case-folded form
/// 3. (2) without glottal stops
/// 4. the destressed form of (2), and of (3)
/// 5. the ASCII form of the destressed result, with and without glottal stops
/// 6. the ASCII form with `` ` `` and with `ʼ` in place of `'`
///
/// Duplicates are dropped. Pure-ASCII text without glottal stops stops
/// after step 2.
pub fn spellings(text: &str) -> Result<Vec<String>> {
    let mut out = Spellings::default();
    out.push(text.to_string());

    let glottal = has_glottal_stop(text);
    let folded = fold_case(text)?;
    out.push_with_glottal(folded.clone(), glottal)?;
    if text.is_ascii() && !glottal {
        return Ok(out.0);
    }

    let destressed = if count_stressed_vowels(&folded) > 0 {
        let destressed = destress(&folded)?;
        out.push_with_glottal(destressed.clone(), glottal)?;
        destressed
    } else {
        folded
    };

    let ascii = to_ascii(&destressed)?;
    out.push_with_glottal(ascii.clone(), glottal)?;
    if ascii.contains('\'') {
        out.push(ascii.replace('\'', "`"));
        out.push(fold_case(&ascii)?);
    }
    Ok(out.0)
}

impl Dictionary {
    /// Index the entry's text, and its contraction if it has one.
    pub(crate) fn index_entry(&mut self, id: EntryId) -> Result<()> {
        let Some(entry) = self.entry(id) else {
            return Ok(());
        };
        let mut forms = spellings(&entry.text)?;
        if let Some(contracted) = &entry.contracted {
            forms.extend(spellings(contracted)?);
        }
        for form in &forms {
            self.index_spelling(form, id)?;
        }
        Ok(())
    }

    /// Append and index the three grade variants of `source` when it carries
    /// an ablaut marker. Each variant's base is `origin`.
    ///
    /// Returns the number of entries created.
    pub(crate) fn add_ablaut_variants(&mut self, origin: EntryId, source: &str) -> Result<usize> {
        if !has_ablaut_marker(source) {
            return Ok(0);
        }
        let Some(word_type) = self.entry(origin).map(WordEntry::word_type) else {
            return Ok(0);
        };

        let mut created = 0;
        for grade in AblautGrade::ALL {
            let Some(text) = ablaut_form(source, grade)? else {
                break;
            };
            trace!("ablaut variant `{text}` of `{source}`");
            let id = self.push_entry(WordEntry {
                text,
                word_type,
                contracted: None,
                base: Some(origin),
                kind: EntryKind::AblautVariant,
            })?;
            self.index_entry(id)?;
            created += 1;
        }
        Ok(created)
    }
}
