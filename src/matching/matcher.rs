//! Skill detection over extracted text

use crate::error::{CareerHarmonyError, Result};
use crate::matching::vocabulary::SkillVocabulary;
use aho_corasick::{AhoCorasick, MatchKind};
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Distinct vocabulary terms found in a text. Ordered for stable output.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A term matches only when it equals a whole token, a maximal run of
    /// ASCII letters, '+' and '#'. Multi-word terms never match here.
    Token,
    /// A term matches as a literal phrase with token boundaries on both
    /// sides.
    Phrase,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Token => write!(f, "token"),
            MatchMode::Phrase => write!(f, "phrase"),
        }
    }
}

pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
    mode: MatchMode,
    token_pattern: Regex,
    phrase_matcher: Option<AhoCorasick>,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary, mode: MatchMode) -> Result<Self> {
        // Runs of letters, '+' and '#', so "C++" and "C#" stay whole tokens.
        let token_pattern = Regex::new(r"[A-Za-z+#]+")
            .map_err(|e| CareerHarmonyError::Matcher(format!("Invalid token pattern: {}", e)))?;

        let phrase_matcher = match mode {
            MatchMode::Phrase => {
                // Overlapping search needs standard match semantics. Each
                // term occurrence is then boundary-checked on its own,
                // including terms nested inside longer ones.
                let matcher = AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .build(vocabulary.terms())
                    .map_err(|e| {
                        CareerHarmonyError::Matcher(format!("Failed to build phrase matcher: {}", e))
                    })?;
                Some(matcher)
            }
            MatchMode::Token => {
                let unreachable_terms = vocabulary.multi_word_terms();
                if !unreachable_terms.is_empty() {
                    warn!(
                        "Vocabulary terms {:?} contain spaces and cannot match in token mode; enable matching.phrase_matching to find them",
                        unreachable_terms
                    );
                }
                None
            }
        };

        Ok(Self {
            vocabulary,
            mode,
            token_pattern,
            phrase_matcher,
        })
    }

    /// Distinct vocabulary terms present in the text. Total over any input;
    /// text with no recognizable terms yields an empty set.
    pub fn find_skills(&self, text: &str) -> SkillSet {
        match &self.phrase_matcher {
            Some(matcher) => self.find_phrases(matcher, text),
            None => self.find_tokens(text),
        }
    }

    fn find_tokens(&self, text: &str) -> SkillSet {
        let mut found = SkillSet::new();
        for token in self.token_pattern.find_iter(text) {
            let token = token.as_str();
            if self.vocabulary.contains(token) {
                found.insert(token.to_string());
            }
        }
        found
    }

    fn find_phrases(&self, matcher: &AhoCorasick, text: &str) -> SkillSet {
        let mut found = SkillSet::new();
        for mat in matcher.find_overlapping_iter(text) {
            let before_ok = text[..mat.start()]
                .chars()
                .next_back()
                .map_or(true, |c| !is_token_char(c));
            let after_ok = text[mat.end()..]
                .chars()
                .next()
                .map_or(true, |c| !is_token_char(c));

            if before_ok && after_ok {
                found.insert(self.vocabulary.terms()[mat.pattern().as_usize()].clone());
            }
        }
        found
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '+' || c == '#'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_matcher(terms: &[&str]) -> SkillMatcher {
        SkillMatcher::new(SkillVocabulary::from_terms(terms.iter().copied()), MatchMode::Token).unwrap()
    }

    fn phrase_matcher(terms: &[&str]) -> SkillMatcher {
        SkillMatcher::new(SkillVocabulary::from_terms(terms.iter().copied()), MatchMode::Phrase).unwrap()
    }

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_token_mode_finds_exact_tokens() {
        let matcher = token_matcher(&["Python", "SQL", "Excel"]);
        let found = matcher.find_skills("Experienced in Python and Excel");
        assert_eq!(found, set(&["Python", "Excel"]));
    }

    #[test]
    fn test_token_mode_is_case_sensitive() {
        let matcher = token_matcher(&["Python", "SQL"]);
        let found = matcher.find_skills("worked with python and sql daily");
        assert!(found.is_empty());
    }

    #[test]
    fn test_tokens_split_on_punctuation() {
        let matcher = token_matcher(&["Python", "SQL", "Excel"]);
        let found = matcher.find_skills("Requires Python, SQL, Excel.");
        assert_eq!(found, set(&["Python", "SQL", "Excel"]));
    }

    #[test]
    fn test_plus_and_hash_stay_in_tokens() {
        let matcher = token_matcher(&["C++", "C#", "C"]);
        let found = matcher.find_skills("C++ and C# development");
        assert_eq!(found, set(&["C++", "C#"]));
    }

    #[test]
    fn test_single_letter_term_not_found_inside_words() {
        let matcher = token_matcher(&["R"]);
        assert!(matcher.find_skills("Rust and Ruby").is_empty());
        assert_eq!(matcher.find_skills("R, Rust and Ruby"), set(&["R"]));
    }

    #[test]
    fn test_multi_word_terms_unreachable_in_token_mode() {
        let matcher = token_matcher(&["Machine Learning", "Python"]);
        let found = matcher.find_skills("Machine Learning with Python");
        assert_eq!(found, set(&["Python"]));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let matcher = token_matcher(&["Python"]);
        assert!(matcher.find_skills("").is_empty());
        assert!(matcher.find_skills("   \n\t  ").is_empty());
    }

    #[test]
    fn test_find_skills_is_idempotent() {
        let matcher = token_matcher(&["Python", "SQL", "R"]);
        let text = "Python, R, Python, and more Python";
        assert_eq!(matcher.find_skills(text), matcher.find_skills(text));
        assert_eq!(matcher.find_skills(text), set(&["Python", "R"]));
    }

    #[test]
    fn test_found_skills_are_subset_of_vocabulary() {
        let matcher = token_matcher(&["Python", "SQL"]);
        let found = matcher.find_skills("Python Rust Go SQL Java C");
        for skill in &found {
            assert!(matcher.vocabulary().contains(skill));
        }
        assert_eq!(found, set(&["Python", "SQL"]));
    }

    #[test]
    fn test_phrase_mode_finds_multi_word_terms() {
        let matcher = phrase_matcher(&["Machine Learning", "Power BI", "Python"]);
        let found = matcher.find_skills("Machine Learning pipelines and Power BI dashboards in Python");
        assert_eq!(found, set(&["Machine Learning", "Power BI", "Python"]));
    }

    #[test]
    fn test_phrase_mode_is_case_sensitive() {
        let matcher = phrase_matcher(&["Machine Learning"]);
        assert!(matcher.find_skills("machine learning pipelines").is_empty());
    }

    #[test]
    fn test_phrase_mode_respects_token_boundaries() {
        let matcher = phrase_matcher(&["R", "Power BI"]);
        assert!(matcher.find_skills("Rust").is_empty());
        assert!(matcher.find_skills("Power BIG").is_empty());
        assert_eq!(matcher.find_skills("R&D with Power BI"), set(&["R", "Power BI"]));
    }

    #[test]
    fn test_phrase_mode_finds_nested_terms_independently() {
        let matcher = phrase_matcher(&["Data", "Data Analysis"]);
        let found = matcher.find_skills("Data Analysis projects");
        assert_eq!(found, set(&["Data", "Data Analysis"]));
    }

    #[test]
    fn test_phrase_mode_finds_shorter_term_when_longer_is_unbounded() {
        let matcher = phrase_matcher(&["Data", "Data Analysis"]);
        assert_eq!(matcher.find_skills("Data Analysisx"), set(&["Data"]));
        assert_eq!(matcher.find_skills("Data Analysis x"), set(&["Data", "Data Analysis"]));
    }
}
