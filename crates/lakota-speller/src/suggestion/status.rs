// Suggestion list assembly: ordering, deduplication and the ablaut section

use hashbrown::HashSet;

/// Entry separating plain suggestions from ablaut corrections.
pub const ABLAUT_SEPARATOR: &str = "-";

/// Collects suggestions in order, dropping duplicates.
///
/// The list has up to two sections. The first holds plain suggestions and
/// may be capped; the second, opened with [`ABLAUT_SEPARATOR`], holds
/// ablaut corrections.
#[derive(Debug, Default)]
pub struct SuggestionStatus {
    suggestions: Vec<String>,
    seen: HashSet<String>,
    max_plain: Option<usize>,
    plain: usize,
    separated: bool,
}

impl SuggestionStatus {
    /// Create an empty list whose first section holds at most `max_plain`
    /// suggestions (`None` for no limit).
    pub fn new(max_plain: Option<usize>) -> Self {
        Self {
            max_plain,
            ..Self::default()
        }
    }

    /// Add a plain suggestion. Duplicates and suggestions past the cap are
    /// ignored.
    pub fn add_suggestion(&mut self, suggestion: &str) {
        if self.separated || self.max_plain.is_some_and(|max| self.plain >= max) {
            return;
        }
        if self.seen.insert(suggestion.to_string()) {
            self.suggestions.push(suggestion.to_string());
            self.plain += 1;
        }
    }

    /// Add an ablaut correction, opening the second section on first use.
    /// Corrections already present anywhere in the list are ignored.
    pub fn add_correction(&mut self, correction: &str) {
        if self.seen.contains(correction) {
            return;
        }
        if !self.separated {
            self.suggestions.push(ABLAUT_SEPARATOR.to_string());
            self.separated = true;
        }
        self.seen.insert(correction.to_string());
        self.suggestions.push(correction.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Consume the status and return the assembled list.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped() {
        let mut status = SuggestionStatus::new(None);
        status.add_suggestion("kola");
        status.add_suggestion("kola");
        status.add_suggestion("kol\u{00E1}");
        assert_eq!(status.into_suggestions(), ["kola", "kol\u{00E1}"]);
    }

    #[test]
    fn separator_precedes_corrections_once() {
        let mut status = SuggestionStatus::new(None);
        status.add_suggestion("s\u{00E1}pa");
        status.add_correction("s\u{00E1}pe");
        status.add_correction("s\u{00E1}pe");
        status.add_correction("s\u{00E1}pa");
        assert_eq!(status.len(), 3);
        assert_eq!(status.into_suggestions(), ["s\u{00E1}pa", "-", "s\u{00E1}pe"]);
    }

    #[test]
    fn cap_applies_to_plain_section_only() {
        let mut status = SuggestionStatus::new(Some(1));
        status.add_suggestion("a");
        status.add_suggestion("b");
        status.add_correction("c");
        status.add_correction("d");
        assert_eq!(status.into_suggestions(), ["a", "-", "c", "d"]);
    }

    #[test]
    fn empty_until_something_is_added() {
        let status = SuggestionStatus::new(Some(0));
        assert!(status.is_empty());
        assert!(status.into_suggestions().is_empty());
    }
}
