// Substitution engine - replaces dictionary terms in text
// Uses case-sensitive, whole-word matching with regex, longest term first

use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::dictionary::TranslationDictionary;

/// How the engine applies its terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionMode {
    /// One replace pass per term, longest term first, each pass working on
    /// the previous pass's output. A translation inserted by a longer term
    /// can be rewritten by a later, shorter term, so the transform is not
    /// idempotent.
    #[default]
    Sequential,
    /// One pass over a combined pattern. At each position the longest term
    /// wins and inserted translations are never rewritten.
    SinglePass,
}

impl FromStr for SubstitutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "single-pass" | "single_pass" | "singlepass" => Ok(Self::SinglePass),
            other => Err(format!(
                "unknown substitution mode '{}' (expected 'sequential' or 'single-pass')",
                other
            )),
        }
    }
}

impl fmt::Display for SubstitutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::SinglePass => f.write_str("single-pass"),
        }
    }
}

/// Compiled pattern for a single dictionary term
struct CompiledPattern {
    regex: Regex,
    translation: String,
}

enum Strategy {
    Sequential(Vec<CompiledPattern>),
    SinglePass {
        regex: Option<Regex>,
        translations: HashMap<String, String>,
    },
}

/// Engine that applies dictionary substitutions to text.
///
/// Patterns are compiled once at construction and reused for every call.
pub struct SubstitutionEngine {
    mode: SubstitutionMode,
    strategy: Strategy,
}

/// Whole-word pattern body for a term; both ends must sit on a word boundary
fn whole_word(term: &str) -> String {
    format!(r"\b{}\b", regex::escape(term))
}

/// Terms that can take part in substitution, longest first.
///
/// An empty term would match at every word boundary, so it is dropped.
fn usable_terms(dictionary: &TranslationDictionary) -> Vec<(&str, &str)> {
    dictionary
        .terms_longest_first()
        .into_iter()
        .filter(|(term, _)| {
            if term.is_empty() {
                crate::warn!("Skipping empty dictionary term");
                false
            } else {
                true
            }
        })
        .collect()
}

impl SubstitutionEngine {
    /// Create an engine for the given dictionary and mode
    pub fn new(dictionary: &TranslationDictionary, mode: SubstitutionMode) -> Self {
        let terms = usable_terms(dictionary);
        let strategy = match mode {
            SubstitutionMode::Sequential => Strategy::Sequential(compile_each(&terms)),
            SubstitutionMode::SinglePass => compile_combined(&terms),
        };
        crate::debug!(
            "Built {} substitution engine for {} terms",
            mode,
            terms.len()
        );
        Self { mode, strategy }
    }

    /// Create an engine with no terms; substitution is the identity
    pub fn empty(mode: SubstitutionMode) -> Self {
        Self::new(&TranslationDictionary::new(), mode)
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    /// Apply all substitutions to the input text
    pub fn substitute(&self, text: &str) -> String {
        match &self.strategy {
            Strategy::Sequential(patterns) => {
                let mut result = text.to_string();
                for pattern in patterns {
                    if pattern.regex.is_match(&result) {
                        result = pattern
                            .regex
                            .replace_all(&result, NoExpand(&pattern.translation))
                            .into_owned();
                    }
                }
                result
            }
            Strategy::SinglePass {
                regex: Some(regex),
                translations,
            } => regex
                .replace_all(text, |caps: &Captures| {
                    let matched = &caps[0];
                    translations
                        .get(matched)
                        .cloned()
                        .unwrap_or_else(|| matched.to_string())
                })
                .into_owned(),
            Strategy::SinglePass { regex: None, .. } => text.to_string(),
        }
    }
}

fn compile_each(terms: &[(&str, &str)]) -> Vec<CompiledPattern> {
    terms
        .iter()
        .filter_map(|(term, translation)| match Regex::new(&whole_word(term)) {
            Ok(regex) => Some(CompiledPattern {
                regex,
                translation: translation.to_string(),
            }),
            Err(e) => {
                crate::warn!("Failed to compile regex for term '{}': {}", term, e);
                None
            }
        })
        .collect()
}

fn compile_combined(terms: &[(&str, &str)]) -> Strategy {
    let translations: HashMap<String, String> = terms
        .iter()
        .map(|(term, translation)| (term.to_string(), translation.to_string()))
        .collect();

    if terms.is_empty() {
        return Strategy::SinglePass {
            regex: None,
            translations,
        };
    }

    // Alternation is leftmost-first, so longest-first order makes the longest term win
    let alternatives: Vec<String> = terms.iter().map(|(term, _)| regex::escape(term)).collect();
    let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));

    let regex = match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            crate::warn!("Failed to compile combined substitution pattern: {}", e);
            None
        }
    };

    Strategy::SinglePass {
        regex,
        translations,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
