// Lexicon article parsing
//
// One article per line:
//
//   <type>[:<grade-or-contraction>] <base> [<extra> ...]
//
// `#` starts a comment line. Extra forms may contain one placeholder:
// `~` (base text), `@` (base text destressed, whole form re-stressed at the
// default position) or `%` (the previous form).

use lakota_core::transform::{check_len, destress, put_stress};
use lakota_core::{AblautGrade, LkError, Result, WordType};
use log::debug;

use super::{Dictionary, EntryId, EntryKind, WordEntry};

/// What parsing one lexicon line produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOutcome {
    /// The article was indexed. `entries` counts every entry it created,
    /// ablaut variants included.
    Indexed { base: EntryId, entries: usize },
    /// A comment or blank line; nothing was added.
    Comment,
}

/// Header of an article: everything before the base form.
#[derive(Debug, PartialEq, Eq)]
struct Header<'a> {
    word_type: WordType,
    grade: Option<AblautGrade>,
    contraction: Option<&'a str>,
    /// The rest of the line, starting at the base form.
    rest: &'a str,
}

fn parse_header(line: &str) -> Result<Header<'_>> {
    let mut chars = line.chars();
    let type_char = chars.next().unwrap_or(' ');
    let word_type = WordType::from_char(type_char).ok_or_else(|| {
        LkError::InvalidString(format!("unknown word type `{type_char}` in `{line}`"))
    })?;
    let after_type = chars.as_str();

    let Some(info) = after_type.strip_prefix(':') else {
        return Ok(Header {
            word_type,
            grade: None,
            contraction: None,
            rest: after_type,
        });
    };

    if word_type.is_verb() {
        let (contraction, rest) = info
            .split_once(' ')
            .ok_or_else(|| LkError::IncompleteVerb(line.to_string()))?;
        return Ok(Header {
            word_type,
            grade: None,
            contraction: (!contraction.is_empty()).then_some(contraction),
            rest,
        });
    }

    let (token, rest) = info.split_once(' ').unwrap_or((info, ""));
    let mut letters = token.chars();
    let grade = match (letters.next(), letters.next()) {
        (None, _) => None,
        (Some(c), None) => Some(AblautGrade::from_char(c).ok_or(LkError::InvalidConjugation(c))?),
        (Some(c), Some(_)) => return Err(LkError::InvalidConjugation(c)),
    };
    Ok(Header {
        word_type,
        grade,
        contraction: None,
        rest,
    })
}

/// Resolve the placeholder of an extra form, if it has one.
///
/// Only the first placeholder is expanded, looked up in the order `~`, `@`,
/// `%`.
pub fn expand_placeholder(token: &str, base: &str, previous: &str) -> Result<String> {
    let found = ['~', '@', '%']
        .iter()
        .find_map(|&marker| token.find(marker).map(|at| (at, marker)));
    let Some((at, marker)) = found else {
        return check_len(token.to_string());
    };
    let prefix = &token[..at];
    let suffix = &token[at + 1..];
    let form = match marker {
        '~' => format!("{prefix}{base}{suffix}"),
        '@' => put_stress(&format!("{prefix}{}{suffix}", destress(base)?), None)?,
        _ => format!("{prefix}{previous}{suffix}"),
    };
    check_len(form)
}

impl Dictionary {
    /// Parse one lexicon line and add everything it describes.
    ///
    /// On error the entries and spellings already added for this line stay
    /// in the dictionary.
    pub fn parse_article(&mut self, line: &str) -> Result<ArticleOutcome> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.starts_with('#') || line.trim().is_empty() {
            debug!("skipping comment line `{line}`");
            return Ok(ArticleOutcome::Comment);
        }

        let header = parse_header(line)?;
        let mut fields = header.rest.split(' ').filter(|f| !f.is_empty());
        let base_text = fields
            .next()
            .ok_or_else(|| LkError::InvalidString(format!("article has no base form: `{line}`")))
            .and_then(|base| check_len(base.to_string()))?;
        let contraction = header
            .contraction
            .map(|c| check_len(c.to_string()))
            .transpose()?;

        let base = self.push_entry(WordEntry {
            text: base_text.clone(),
            word_type: header.word_type,
            contracted: contraction.clone(),
            base: None,
            kind: EntryKind::Base,
        })?;
        let mut created = 1;
        if let Some(grade) = header.grade {
            self.record_ablaut(base, grade)?;
        }
        self.index_entry(base)?;
        created += self.add_ablaut_variants(base, &base_text)?;
        if let Some(contraction) = &contraction {
            created += self.add_ablaut_variants(base, contraction)?;
        }

        let mut previous = base_text.clone();
        for token in fields {
            let text = expand_placeholder(token, &base_text, &previous)?;
            let id = self.push_entry(WordEntry {
                text: text.clone(),
                word_type: header.word_type,
                contracted: None,
                base: Some(base),
                kind: EntryKind::Listed,
            })?;
            created += 1;
            if let Some(grade) = header.grade {
                self.record_ablaut(id, grade)?;
            }
            self.index_entry(id)?;
            created += self.add_ablaut_variants(id, &text)?;
            previous = text;
        }

        debug!("article `{base_text}` added {created} entries");
        Ok(ArticleOutcome::Indexed {
            base,
            entries: created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakota_core::ErrorKind;

    #[test]
    fn header_plain() {
        let h = parse_header("S lapa milapa").unwrap();
        assert_eq!(h.word_type, WordType::StaticVerb);
        assert_eq!(h.grade, None);
        assert_eq!(h.contraction, None);
        assert_eq!(h.rest, " lapa milapa");
    }

    #[test]
    fn header_verb_contraction() {
        let h = parse_header("s:sab sapA").unwrap();
        assert_eq!(h.word_type, WordType::StaticVerb);
        assert_eq!(h.contraction, Some("sab"));
        assert_eq!(h.rest, "sapA");
    }

    #[test]
    fn header_particle_grade() {
        let h = parse_header("-:n ktA").unwrap();
        assert_eq!(h.word_type, WordType::Particle);
        assert_eq!(h.grade, Some(AblautGrade::N));
        assert_eq!(h.rest, "ktA");
    }

    #[test]
    fn header_errors() {
        assert_eq!(parse_header("S:sab").unwrap_err().kind(), ErrorKind::IncompleteVerb);
        assert_eq!(parse_header("-:x he").unwrap_err().kind(), ErrorKind::InvalidConjugation);
        assert_eq!(parse_header("-:ae he").unwrap_err().kind(), ErrorKind::InvalidConjugation);
        assert_eq!(parse_header("Q lapa").unwrap_err().kind(), ErrorKind::InvalidString);
    }

    #[test]
    fn placeholders() {
        assert_eq!(expand_placeholder("wa~", "zeden", "zeden").unwrap(), "wazeden");
        assert_eq!(expand_placeholder("~pi", "zeden", "wazeden").unwrap(), "zedenpi");
        assert_eq!(
            expand_placeholder("wa@pi", "z\u{00E9}d\u{00FA}n", "").unwrap(),
            "waz\u{00E9}dunpi"
        );
        assert_eq!(
            expand_placeholder("@s", "z\u{00E9}d\u{00FA}n", "").unwrap(),
            "zed\u{00FA}ns"
        );
        assert_eq!(expand_placeholder("%pi", "uya", "wauya").unwrap(), "wauyapi");
        assert_eq!(expand_placeholder("milapa", "lapa", "lapa").unwrap(), "milapa");
    }

    #[test]
    fn placeholder_expansion_is_bounded() {
        assert!(expand_placeholder("x~", &"b".repeat(254), "").is_ok());
        let err = expand_placeholder("x~", &"b".repeat(255), "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    }

    #[test]
    fn comment_and_blank_lines() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.parse_article("#S kin").unwrap(), ArticleOutcome::Comment);
        assert_eq!(dict.parse_article("").unwrap(), ArticleOutcome::Comment);
        assert_eq!(dict.parse_article("   \r\n").unwrap(), ArticleOutcome::Comment);
        assert!(dict.is_empty());
    }

    #[test]
    fn article_without_base_is_invalid() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.parse_article("S ").unwrap_err().kind(), ErrorKind::InvalidString);
        assert_eq!(dict.parse_article("-:a").unwrap_err().kind(), ErrorKind::InvalidString);
    }

    #[test]
    fn listed_forms_point_at_base() {
        let mut dict = Dictionary::new();
        let outcome = dict.parse_article("S lapa milapa nilapa").unwrap();
        let ArticleOutcome::Indexed { base, entries } = outcome else {
            panic!("expected an indexed article");
        };
        assert_eq!(entries, 3);
        let listed: Vec<_> = dict.entries().filter(|(id, _)| *id != base).collect();
        assert_eq!(listed.len(), 2);
        for (_, e) in listed {
            assert_eq!(e.base(), Some(base));
            assert_eq!(e.kind(), EntryKind::Listed);
            assert_eq!(e.word_type(), WordType::StaticVerb);
        }
    }

    #[test]
    fn contraction_is_indexed_for_base() {
        let mut dict = Dictionary::new();
        dict.parse_article("S:sab sapA").unwrap();
        let owners = dict.find("sab").unwrap().unwrap();
        assert_eq!(owners.len(), 1);
        let base = dict.entry(owners[0]).unwrap();
        assert_eq!(base.text(), "sapA");
        assert_eq!(base.contracted(), Some("sab"));
    }

    #[test]
    fn marked_contraction_gets_variants() {
        let mut dict = Dictionary::new();
        let outcome = dict.parse_article("S:kA k\u{00E1}rA\u{014B}").unwrap();
        let ArticleOutcome::Indexed { base, entries } = outcome else {
            panic!("expected an indexed article, got {outcome:?}");
        };
        // base + 3 variants + 3 variants of the contraction
        assert_eq!(entries, 7);
        assert_eq!(dict.len(), 7);
        for form in ["ke", "ki\u{014B}"] {
            let owners = dict.find(form).unwrap().unwrap();
            assert_eq!(owners.len(), 1, "{form}");
            assert_eq!(dict.entry(owners[0]).unwrap().base(), Some(base), "{form}");
        }
        // "ka" is also the folded contraction of the base itself.
        let owners = dict.find("ka").unwrap().unwrap();
        assert!(owners.iter().all(|&id| dict.root_of(id) == base));
    }

    #[test]
    fn grade_recorded_for_base_and_listed_forms_only() {
        let mut dict = Dictionary::new();
        dict.parse_article("-:e ktA kte~").unwrap();
        // base + 3 variants + listed form + 3 variants
        assert_eq!(dict.len(), 8);
        let recorded: Vec<&str> = dict
            .ablaut_records()
            .iter()
            .filter_map(|r| dict.entry(r.entry).map(WordEntry::text))
            .collect();
        assert_eq!(recorded, ["ktA", "ktektA"]);
    }

    #[test]
    fn partial_article_is_not_rolled_back() {
        let mut dict = Dictionary::new();
        let long = "x~".to_string() + &"y".repeat(300);
        let err = dict.parse_article(&format!("- kiŋ {long}")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
        assert_eq!(dict.len(), 1);
        assert!(dict.find("ki\u{014B}").unwrap().is_some());
    }
}
