// Shared enums: WordType, AblautGrade, and limits

/// Maximum encoded length (bytes) of any generated or transformed form.
/// A form of this length or longer is rejected with `BufferTooSmall`.
pub const MAX_WORD_LEN: usize = 256;

/// Default bound (bytes) on a single lexicon line.
pub const MAX_LINE_LEN: usize = 4096;

/// Vowel index stressed by `put_stress` when no position is given.
pub const DEFAULT_STRESS_POSITION: usize = 1;

/// Part of speech of a lexicon article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    /// `S`
    StaticVerb,
    /// `T`
    TransitiveVerb,
    /// `I`
    IntransitiveVerb,
    /// `N`
    Noun,
    /// `-`
    Particle,
    /// `A`
    Adverb,
}

impl WordType {
    /// Parse the type character of a lexicon article (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(WordType::StaticVerb),
            'T' => Some(WordType::TransitiveVerb),
            'I' => Some(WordType::IntransitiveVerb),
            'N' => Some(WordType::Noun),
            '-' => Some(WordType::Particle),
            'A' => Some(WordType::Adverb),
            _ => None,
        }
    }

    /// The canonical (uppercase) type character.
    pub fn as_char(self) -> char {
        match self {
            WordType::StaticVerb => 'S',
            WordType::TransitiveVerb => 'T',
            WordType::IntransitiveVerb => 'I',
            WordType::Noun => 'N',
            WordType::Particle => '-',
            WordType::Adverb => 'A',
        }
    }

    /// Verbs read the token after `:` as a contraction, other types as an
    /// ablaut grade.
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            WordType::StaticVerb | WordType::TransitiveVerb | WordType::IntransitiveVerb
        )
    }
}

/// Ablaut grade: the final vowel a word takes in a given syntactic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AblautGrade {
    A,
    E,
    N,
}

impl AblautGrade {
    /// Every grade, in generation order.
    pub const ALL: [AblautGrade; 3] = [AblautGrade::A, AblautGrade::E, AblautGrade::N];

    /// Parse a grade letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(AblautGrade::A),
            'e' => Some(AblautGrade::E),
            'n' => Some(AblautGrade::N),
            _ => None,
        }
    }

    /// Ending that replaces an ablaut marker for this grade.
    pub fn ending(self, stressed: bool) -> &'static str {
        match (self, stressed) {
            (AblautGrade::A, false) => "a",
            (AblautGrade::A, true) => "\u{00E1}",        // á
            (AblautGrade::E, false) => "e",
            (AblautGrade::E, true) => "\u{00E9}",        // é
            (AblautGrade::N, false) => "i\u{014B}",      // iŋ
            (AblautGrade::N, true) => "\u{00ED}\u{014B}", // íŋ
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_type_parse_is_case_insensitive() {
        assert_eq!(WordType::from_char('s'), Some(WordType::StaticVerb));
        assert_eq!(WordType::from_char('T'), Some(WordType::TransitiveVerb));
        assert_eq!(WordType::from_char('-'), Some(WordType::Particle));
        assert_eq!(WordType::from_char('x'), None);
    }

    #[test]
    fn word_type_char_round_trip() {
        for c in ['S', 'T', 'I', 'N', '-', 'A'] {
            assert_eq!(WordType::from_char(c).map(WordType::as_char), Some(c));
        }
    }

    #[test]
    fn only_verbs_take_contractions() {
        assert!(WordType::StaticVerb.is_verb());
        assert!(WordType::IntransitiveVerb.is_verb());
        assert!(!WordType::Noun.is_verb());
        assert!(!WordType::Particle.is_verb());
    }

    #[test]
    fn grade_parse() {
        assert_eq!(AblautGrade::from_char('a'), Some(AblautGrade::A));
        assert_eq!(AblautGrade::from_char('N'), Some(AblautGrade::N));
        assert_eq!(AblautGrade::from_char('o'), None);
    }

    #[test]
    fn grade_endings() {
        assert_eq!(AblautGrade::E.ending(false), "e");
        assert_eq!(AblautGrade::E.ending(true), "\u{00E9}");
        assert_eq!(AblautGrade::N.ending(false), "i\u{014B}");
    }
}
