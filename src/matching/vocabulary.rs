//! Skill vocabulary shared by all matching calls

use std::collections::HashSet;

/// Skill list of the default coaching profile.
pub const DEFAULT_TERMS: [&str; 10] = [
    "Python",
    "SQL",
    "Tableau",
    "Machine Learning",
    "Excel",
    "Communication",
    "Power BI",
    "R",
    "Data Analysis",
    "Statistics",
];

/// Ordered, deduplicated collection of recognized skill strings.
///
/// Terms keep their configured order for display; membership checks go
/// through a hash lookup. Matching against terms is case-sensitive.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
    lookup: HashSet<String>,
}

impl SkillVocabulary {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();

        for term in terms {
            let term = term.into().trim().to_string();
            if term.is_empty() {
                continue;
            }
            if lookup.insert(term.clone()) {
                ordered.push(term);
            }
        }

        Self { terms: ordered, lookup }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms containing whitespace. These can never equal a single token and
    /// are only findable in phrase mode.
    pub fn multi_word_terms(&self) -> Vec<&str> {
        self.terms
            .iter()
            .filter(|term| term.contains(char::is_whitespace))
            .map(|term| term.as_str())
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_TERMS)
    }
}
