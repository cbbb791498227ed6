// Codepoint classification and single-character transforms

// ---------------------------------------------------------------------------
// Lakota letter tables
// ---------------------------------------------------------------------------

/// Canonical glottal stop: MODIFIER LETTER APOSTROPHE (U+02BC).
pub const GLOTTAL_STOP: char = '\u{02BC}';

/// Plain-text stand-ins for the glottal stop.
pub const ASCII_GLOTTAL_STOPS: &[char] = &['\'', '`'];

/// Unstressed vowels (lowercase): a e i o u
const UNSTRESSED_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Stressed vowels (lowercase): á é í ó ú, parallel to `UNSTRESSED_VOWELS`.
const STRESSED_VOWELS: &[char] = &['\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}'];

/// Diacritic letters of the orthography as (lowercase, uppercase, ASCII base).
const DIACRITIC_LETTERS: &[(char, char, char)] = &[
    ('\u{00E1}', '\u{00C1}', 'a'), // á Á
    ('\u{00E9}', '\u{00C9}', 'e'), // é É
    ('\u{00ED}', '\u{00CD}', 'i'), // í Í
    ('\u{00F3}', '\u{00D3}', 'o'), // ó Ó
    ('\u{00FA}', '\u{00DA}', 'u'), // ú Ú
    ('\u{014B}', '\u{014A}', 'n'), // ŋ Ŋ
    ('\u{010D}', '\u{010C}', 'c'), // č Č
    ('\u{017E}', '\u{017D}', 'z'), // ž Ž
    ('\u{021F}', '\u{021E}', 'h'), // ȟ Ȟ
    ('\u{01E7}', '\u{01E6}', 'g'), // ǧ Ǧ
    ('\u{0161}', '\u{0160}', 's'), // š Š
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Phonological class of a single codepoint.
///
/// Vowel classes are only assigned to lowercase codepoints: uppercase vowels
/// in lexicon articles are ablaut markers, not vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    UnstressedVowel,
    StressedVowel,
    /// `ʼ`, `'` or `` ` ``.
    GlottalStop,
    /// Any other letter of the orthography, in either case.
    Letter,
    Other,
}

/// Classify a codepoint.
pub fn classify(c: char) -> CharClass {
    if UNSTRESSED_VOWELS.contains(&c) {
        CharClass::UnstressedVowel
    } else if STRESSED_VOWELS.contains(&c) {
        CharClass::StressedVowel
    } else if is_glottal_stop(c) {
        CharClass::GlottalStop
    } else if is_letter(c) {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

/// Check whether a codepoint is a (lowercase) vowel, stressed or not.
pub fn is_vowel(c: char) -> bool {
    matches!(
        classify(c),
        CharClass::UnstressedVowel | CharClass::StressedVowel
    )
}

/// Check whether a codepoint is a lowercase stressed vowel.
pub fn is_stressed_vowel(c: char) -> bool {
    STRESSED_VOWELS.contains(&c)
}

/// Check whether a codepoint is the glottal stop or one of its ASCII stand-ins.
pub fn is_glottal_stop(c: char) -> bool {
    c == GLOTTAL_STOP || ASCII_GLOTTAL_STOPS.contains(&c)
}

/// Check whether a codepoint is a letter of the orthography: an ASCII letter
/// or one of the diacritic letters, in either case. Glottal stops are not
/// letters here; the scanner treats them as word-internal punctuation.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || DIACRITIC_LETTERS
            .iter()
            .any(|&(lower, upper, _)| c == lower || c == upper)
}

/// Check whether a codepoint may appear in a normalized dictionary word:
/// `-`, `ʼ`, a lowercase ASCII letter or a lowercase diacritic letter.
pub fn is_word_char(c: char) -> bool {
    c == '-'
        || c == GLOTTAL_STOP
        || c.is_ascii_lowercase()
        || DIACRITIC_LETTERS.iter().any(|&(lower, _, _)| c == lower)
}

// ---------------------------------------------------------------------------
// Single-character transforms
// ---------------------------------------------------------------------------

/// Case-fold one codepoint: ASCII glottal stand-ins become `ʼ`, everything
/// else takes its simple (one-to-one) lowercase mapping.
pub fn fold_char(c: char) -> char {
    if ASCII_GLOTTAL_STOPS.contains(&c) {
        return GLOTTAL_STOP;
    }
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Map one codepoint to plain ASCII. Lowercase diacritic letters lose their
/// diacritic, `ʼ` and `` ` `` become `'`; everything else (including the
/// uppercase diacritic letters) is returned unchanged.
pub fn ascii_char(c: char) -> char {
    if c == GLOTTAL_STOP || c == '`' {
        return '\'';
    }
    DIACRITIC_LETTERS
        .iter()
        .find(|&&(lower, _, _)| lower == c)
        .map_or(c, |&(_, _, base)| base)
}

/// Stressed counterpart of an unstressed vowel, `None` for anything else.
pub fn stressed(c: char) -> Option<char> {
    UNSTRESSED_VOWELS
        .iter()
        .position(|&v| v == c)
        .map(|i| STRESSED_VOWELS[i])
}

/// Unstressed counterpart of a stressed vowel, `None` for anything else.
pub fn unstressed(c: char) -> Option<char> {
    STRESSED_VOWELS
        .iter()
        .position(|&v| v == c)
        .map(|i| UNSTRESSED_VOWELS[i])
}

/// Drop the stress mark from a vowel of either case, keeping its case.
/// Anything that is not a stressed vowel is returned unchanged.
pub fn strip_stress_char(c: char) -> char {
    if let Some(plain) = unstressed(c) {
        return plain;
    }
    let lower = fold_char(c);
    match unstressed(lower) {
        Some(plain) if lower != c => plain.to_ascii_uppercase(),
        _ => c,
    }
}
