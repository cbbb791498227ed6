// Word-level text transforms and predicates
//
// Every transform returns a freshly allocated `String` and rejects results
// that would reach `MAX_WORD_LEN` bytes instead of truncating them.

use crate::character::{
    ascii_char, fold_char, is_glottal_stop, is_stressed_vowel, is_vowel, is_word_char, stressed,
    strip_stress_char, unstressed,
};
use crate::enums::{AblautGrade, DEFAULT_STRESS_POSITION, MAX_WORD_LEN};
use crate::error::{LkError, Result};

/// Suffixes marking an ablauting citation form: A, Aŋ, Iŋ, Á, Áŋ, Íŋ.
pub const ABLAUT_MARKERS: &[&str] = &[
    "A",
    "A\u{014B}",
    "I\u{014B}",
    "\u{00C1}",
    "\u{00C1}\u{014B}",
    "\u{00CD}\u{014B}",
];

/// The subset of `ABLAUT_MARKERS` whose grade endings carry stress.
pub const STRESSED_ABLAUT_MARKERS: &[&str] = &["\u{00C1}", "\u{00C1}\u{014B}", "\u{00CD}\u{014B}"];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject `form` if it does not fit in `MAX_WORD_LEN`.
pub fn check_len(form: String) -> Result<String> {
    if form.len() >= MAX_WORD_LEN {
        return Err(LkError::BufferTooSmall {
            form,
            limit: MAX_WORD_LEN,
        });
    }
    Ok(form)
}

/// Decode raw bytes as UTF-8, reporting malformed input as `InvalidString`.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

fn map_word(word: &str, f: impl FnMut(char) -> Option<char>) -> Result<String> {
    check_len(word.chars().filter_map(f).collect())
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Lowercase `word` and canonicalize `'` and `` ` `` to `ʼ`.
pub fn fold_case(word: &str) -> Result<String> {
    map_word(word, |c| Some(fold_char(c)))
}

/// Strip diacritics from lowercase letters and map glottal stops to `'`.
pub fn to_ascii(word: &str) -> Result<String> {
    map_word(word, |c| Some(ascii_char(c)))
}

/// Replace every lowercase stressed vowel with its unstressed counterpart.
pub fn destress(word: &str) -> Result<String> {
    map_word(word, |c| Some(unstressed(c).unwrap_or(c)))
}

/// Remove stress marks from vowels of either case without touching the case
/// of the word, so `KÍŊ` becomes `KIŊ`.
pub fn strip_stress(word: &str) -> Result<String> {
    map_word(word, |c| Some(strip_stress_char(c)))
}

/// Put a stress mark on the `position`-th vowel (0-indexed).
///
/// `None` selects `DEFAULT_STRESS_POSITION`; a position past the last vowel
/// stresses the last vowel. Existing stress marks are kept. Fails with
/// `InvalidArgument` when the word has no vowel.
pub fn put_stress(word: &str, position: Option<usize>) -> Result<String> {
    let vowels = count_vowels(word);
    if vowels == 0 {
        return Err(LkError::InvalidArgument(format!(
            "`{word}` has no vowel to stress"
        )));
    }
    let target = position.unwrap_or(DEFAULT_STRESS_POSITION).min(vowels - 1);
    let mut index = 0;
    map_word(word, |c| {
        if !is_vowel(c) {
            return Some(c);
        }
        let hit = index == target;
        index += 1;
        if hit { Some(stressed(c).unwrap_or(c)) } else { Some(c) }
    })
}

/// Drop every glottal stop (`ʼ`, `'`, `` ` ``).
pub fn remove_glottal_stop(word: &str) -> Result<String> {
    map_word(word, |c| (!is_glottal_stop(c)).then_some(c))
}

/// Replace a marked citation form's ablaut marker with the ending of `grade`.
/// Returns `None` when `word` carries no marker.
pub fn ablaut_form(word: &str, grade: AblautGrade) -> Result<Option<String>> {
    let Some(stem) = strip_ablaut_marker(word) else {
        return Ok(None);
    };
    let ending = grade.ending(is_ablaut_marker_stressed(word));
    check_len(format!("{stem}{ending}")).map(Some)
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

pub fn has_glottal_stop(word: &str) -> bool {
    word.chars().any(is_glottal_stop)
}

pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

pub fn count_stressed_vowels(word: &str) -> usize {
    word.chars().filter(|&c| is_stressed_vowel(c)).count()
}

/// 1-based index (among vowels) of the first stressed vowel, 0 when none.
pub fn first_stressed_vowel(word: &str) -> usize {
    word.chars()
        .filter(|&c| is_vowel(c))
        .position(is_stressed_vowel)
        .map_or(0, |i| i + 1)
}

/// A normalized dictionary word: non-empty and built only from `-`, `ʼ` and
/// lowercase letters of the orthography.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_word_char)
}

pub fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

pub fn has_ablaut_marker(word: &str) -> bool {
    ends_with_any(word, ABLAUT_MARKERS)
}

pub fn is_ablaut_marker_stressed(word: &str) -> bool {
    ends_with_any(word, STRESSED_ABLAUT_MARKERS)
}

/// The stem left after removing the ablaut marker, if there is one.
pub fn strip_ablaut_marker(word: &str) -> Option<&str> {
    ABLAUT_MARKERS.iter().find_map(|m| word.strip_suffix(m))
}

/// Whether `word` already ends in the (stressed or unstressed) ending of `grade`.
pub fn ends_with_grade(word: &str, grade: AblautGrade) -> bool {
    word.ends_with(grade.ending(false)) || word.ends_with(grade.ending(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn fold_case_lowercases_and_canonicalizes_quotes() {
        assert_eq!(fold_case("tESt`a'b").unwrap(), "test\u{02BC}a\u{02BC}b");
        assert_eq!(
            fold_case("vow - '\u{0424}\u{043B}\u{00C1}i\u{00CD}bc\u{00FA}\u{00DA}\u{00C9}eo\u{00F3}\u{00D3}\u{00ED}\u{00CD}`")
                .unwrap(),
            "vow - \u{02BC}\u{0444}\u{043B}\u{00E1}i\u{00ED}bc\u{00FA}\u{00FA}\u{00E9}eo\u{00F3}\u{00F3}\u{00ED}\u{00ED}\u{02BC}"
        );
    }

    #[test]
    fn fold_case_rejects_overlong_result() {
        // 200 backticks grow to 400 bytes once canonicalized.
        let word = "`".repeat(200);
        let err = fold_case(&word).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    }

    #[test]
    fn to_ascii_keeps_uppercase_diacritics() {
        assert_eq!(to_ascii("hH - \u{021F}\u{021E}").unwrap(), "hH - h\u{021E}");
        assert_eq!(
            to_ascii("con - n\u{014B}\u{014B}\u{010D}a\u{010D}\u{0161}hg\u{017E}\u{017E}\u{010D}\u{0161}")
                .unwrap(),
            "con - nnncacshgzzcs"
        );
        assert_eq!(to_ascii("\u{010D}ik\u{02BC}ala").unwrap(), "cik'ala");
        assert_eq!(to_ascii("k`a").unwrap(), "k'a");
    }

    #[test]
    fn destress_only_touches_stressed_vowels() {
        assert_eq!(destress("sa\u{010D}me\u{00E1}").unwrap(), "sa\u{010D}mea");
        assert_eq!(destress("\u{00C1}\u{00E9}").unwrap(), "\u{00C1}e");
    }

    #[test]
    fn strip_stress_keeps_case() {
        assert_eq!(strip_stress("K\u{00CD}\u{014A}").unwrap(), "KI\u{014A}");
        assert_eq!(strip_stress("s\u{00C1}p\u{00E1}").unwrap(), "sApa");
        assert_eq!(strip_stress("ki\u{014B}").unwrap(), "ki\u{014B}");
    }

    #[test]
    fn put_stress_positions() {
        let w = "ao\u{00ED}u\u{00E9}\u{014B}"; // aoíuéŋ
        assert_eq!(put_stress(w, Some(1)).unwrap(), "a\u{00F3}\u{00ED}u\u{00E9}\u{014B}");
        assert_eq!(put_stress(w, Some(0)).unwrap(), "\u{00E1}o\u{00ED}u\u{00E9}\u{014B}");
        assert_eq!(put_stress(w, Some(2)).unwrap(), w);
        assert_eq!(put_stress(w, Some(4)).unwrap(), w);
    }

    #[test]
    fn put_stress_clamps_to_last_vowel() {
        assert_eq!(put_stress("ca\u{014B}ug", Some(1)).unwrap(), "ca\u{014B}\u{00FA}g");
        assert_eq!(put_stress("ca\u{014B}ug", Some(2)).unwrap(), "ca\u{014B}\u{00FA}g");
        assert_eq!(put_stress("\u{010D}a\u{014B}i", Some(1)).unwrap(), "\u{010D}a\u{014B}\u{00ED}");
        assert_eq!(put_stress("a", Some(1)).unwrap(), "\u{00E1}");
    }

    #[test]
    fn put_stress_default_position() {
        assert_eq!(put_stress("wazedunpi", None).unwrap(), "waz\u{00E9}dunpi");
        assert_eq!(put_stress("a", None).unwrap(), "\u{00E1}");
    }

    #[test]
    fn put_stress_without_vowels_is_invalid() {
        let err = put_stress("v", Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn put_stress_then_destress_keeps_vowels() {
        for word in ["lapa", "kunisapa", "wauyapi", "\u{010D}ik\u{02BC}ala"] {
            for pos in 0..4 {
                let stressed = put_stress(word, Some(pos)).unwrap();
                assert_eq!(destress(&stressed).unwrap(), word);
            }
        }
    }

    #[test]
    fn remove_glottal_stop_drops_all_notations() {
        assert_eq!(remove_glottal_stop("a\u{02BC}b'c`d").unwrap(), "abcd");
        assert!(has_glottal_stop("k'a"));
        assert!(has_glottal_stop("k\u{02BC}a"));
        assert!(!has_glottal_stop("ka"));
    }

    #[test]
    fn counting() {
        assert_eq!(count_stressed_vowels("c\u{00E1}\u{014B}\u{00FA}g"), 2);
        assert_eq!(count_stressed_vowels("\u{00E1}\u{00F3}\u{00ED}\u{00FA}\u{00E9}\u{014B}"), 5);
        assert_eq!(count_vowels("\u{00E1}\u{00F3}\u{00ED}\u{00FA}\u{00E9}\u{014B}are"), 7);
        assert_eq!(count_vowels("nothing"), 2);
    }

    #[test]
    fn first_stressed_vowel_is_one_based() {
        assert_eq!(first_stressed_vowel("\u{010D}an\u{00ED}"), 2);
        assert_eq!(first_stressed_vowel("ao\u{00ED}u\u{00E9}\u{014B}"), 3);
        assert_eq!(first_stressed_vowel("aoiu\u{00E9}\u{014B}"), 5);
        assert_eq!(first_stressed_vowel("c\u{00E1}\u{014B}ug"), 1);
        assert_eq!(first_stressed_vowel("lapa"), 0);
    }

    #[test]
    fn valid_words() {
        assert!(is_valid_word("sa\u{010D}me\u{00E1}"));
        assert!(is_valid_word("anc-ha\u{014B}"));
        assert!(is_valid_word("\u{010D}ik\u{02BC}\u{00E1}la"));
        assert!(is_valid_word("test\u{014B}"));
        assert!(!is_valid_word("t\u{0449}t`a'b"));
        assert!(!is_valid_word("Abla\u{00FA}t"));
        assert!(!is_valid_word("te12st\u{014B}"));
        assert!(!is_valid_word(""));
    }

    #[test]
    fn ablaut_markers() {
        assert!(has_ablaut_marker("sapA"));
        assert!(has_ablaut_marker("k\u{00E1}rA\u{014B}"));
        assert!(has_ablaut_marker("dit\u{00CD}\u{014B}"));
        assert!(!has_ablaut_marker("\u{00E1}"));
        assert!(!has_ablaut_marker("can"));
        assert!(!has_ablaut_marker("ca\u{014B}"));
        assert!(!has_ablaut_marker("\u{010D}ik'al\u{00C1}\u{014A}"));
        assert!(!has_ablaut_marker("\u{010D}ik'alA\u{014A}"));

        assert!(is_ablaut_marker_stressed("makol\u{00C1}"));
        assert!(is_ablaut_marker_stressed("dit\u{00CD}\u{014B}"));
        assert!(!is_ablaut_marker_stressed("k\u{00E1}rA\u{014B}"));
    }

    #[test]
    fn ablaut_forms() {
        assert_eq!(ablaut_form("ktA", AblautGrade::N).unwrap().as_deref(), Some("kti\u{014B}"));
        assert_eq!(
            ablaut_form("k\u{00E1}rA\u{014B}", AblautGrade::E).unwrap().as_deref(),
            Some("k\u{00E1}re")
        );
        assert_eq!(
            ablaut_form("makol\u{00C1}", AblautGrade::N).unwrap().as_deref(),
            Some("makol\u{00ED}\u{014B}")
        );
        assert_eq!(ablaut_form("lapa", AblautGrade::A).unwrap(), None);
    }

    #[test]
    fn grade_endings_detected() {
        assert!(ends_with_grade("s\u{00E1}pe", AblautGrade::E));
        assert!(ends_with_grade("kti\u{014B}", AblautGrade::N));
        assert!(ends_with_grade("makol\u{00E1}", AblautGrade::A));
        assert!(!ends_with_grade("s\u{00E1}pa", AblautGrade::E));
    }

    #[test]
    fn decode_rejects_malformed_bytes() {
        assert_eq!(decode(b"lapa").unwrap(), "lapa");
        assert_eq!(decode(&[0xC3]).unwrap_err().kind(), ErrorKind::InvalidString);
    }
}
