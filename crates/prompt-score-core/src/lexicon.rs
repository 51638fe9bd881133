//! Keyword lexicons used by the scoring engine.
//!
//! A [`Lexicon`] holds three term sets: titration context keywords, objective
//! verbs/interrogatives, and measurement units. Every term is stored lowercase
//! and matched as a plain substring of the lowercased prompt, so `"ph"` also
//! matches inside `"phenol"`. Each distinct term counts once, however often it
//! appears.

use std::collections::HashSet;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Built-in context keywords for acid–base titration prompts.
pub const CONTEXT_KEYWORDS: &[&str] = &[
    "valoración",
    "titulación",
    "ácido",
    "base",
    "hcl",
    "naoh",
    "h2so4",
    "koh",
    "indicador",
    "fenolftaleína",
    "naranja de metilo",
    "bureta",
    "erlenmeyer",
    "pipeta",
    "ph",
    "neutralización",
];

/// Built-in verbs and interrogatives that signal a stated objective.
pub const OBJECTIVE_VERBS: &[&str] = &[
    "calcular",
    "determinar",
    "explicar",
    "entender",
    "verificar",
    "analizar",
    "interpretar",
    "ayuda",
    "necesito",
    "cómo",
    "qué",
    "por qué",
    "cuál",
    "dónde",
];

/// Built-in measurement units.
pub const UNITS: &[&str] = &["ml", "l", "m", "mol", "g", "mg", "ph", "poh"];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_terms(CONTEXT_KEYWORDS, OBJECTIVE_VERBS, UNITS)
        .expect("built-in lexicon is valid")
});

/// Extra lexicon entries supplied through configuration.
///
/// Entries extend the built-in lists; they never replace them.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Additional context keywords.
    pub context_keywords: Vec<String>,
    /// Additional objective verbs or interrogatives.
    pub objective_verbs: Vec<String>,
    /// Additional measurement units.
    pub units: Vec<String>,
}

impl LexiconConfig {
    /// Returns `true` when no extra entries are configured.
    pub fn is_empty(&self) -> bool {
        self.context_keywords.is_empty() && self.objective_verbs.is_empty() && self.units.is_empty()
    }
}

/// A deduplicated, lowercase set of terms with a compiled substring matcher.
#[derive(Debug, Clone)]
pub struct TermSet {
    terms: Vec<String>,
    matcher: AhoCorasick,
}

impl TermSet {
    fn new<I, S>(terms: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        let matcher = AhoCorasick::new(&terms).map_err(ConfigError::Lexicon)?;
        Ok(Self { terms, matcher })
    }

    /// The terms in this set, lowercase and in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms in the set.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Count how many distinct terms occur in `lowered`.
    ///
    /// `lowered` must already be lowercase.
    pub fn count_in(&self, lowered: &str) -> usize {
        self.found_in(lowered).len()
    }

    /// Return the distinct terms that occur in `lowered`, in lexicon order.
    pub fn found_in(&self, lowered: &str) -> Vec<&str> {
        let mut hit = vec![false; self.terms.len()];
        // Overlapping search so "mg" still reports "m" and "g".
        for m in self.matcher.find_overlapping_iter(lowered) {
            hit[m.pattern().as_usize()] = true;
        }
        self.terms
            .iter()
            .zip(hit)
            .filter_map(|(term, found)| found.then_some(term.as_str()))
            .collect()
    }
}

/// The three term sets consulted by the scoring engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    context_keywords: TermSet,
    objective_verbs: TermSet,
    units: TermSet,
}

impl Lexicon {
    /// Build a lexicon from explicit term lists.
    pub fn from_terms<S: AsRef<str>>(
        context_keywords: &[S],
        objective_verbs: &[S],
        units: &[S],
    ) -> ConfigResult<Self> {
        Ok(Self {
            context_keywords: TermSet::new(context_keywords)?,
            objective_verbs: TermSet::new(objective_verbs)?,
            units: TermSet::new(units)?,
        })
    }

    /// The shared built-in lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build the built-in lexicon extended with configured entries.
    #[tracing::instrument(skip_all)]
    pub fn extended(extra: &LexiconConfig) -> ConfigResult<Self> {
        if extra.is_empty() {
            return Ok(Self::builtin().clone());
        }
        tracing::debug!(
            context_keywords = extra.context_keywords.len(),
            objective_verbs = extra.objective_verbs.len(),
            units = extra.units.len(),
            "extending built-in lexicon"
        );
        let chain = |builtin: &[&str], more: &[String]| -> Vec<String> {
            builtin
                .iter()
                .map(|s| (*s).to_string())
                .chain(more.iter().cloned())
                .collect()
        };
        Ok(Self {
            context_keywords: TermSet::new(chain(CONTEXT_KEYWORDS, &extra.context_keywords))?,
            objective_verbs: TermSet::new(chain(OBJECTIVE_VERBS, &extra.objective_verbs))?,
            units: TermSet::new(chain(UNITS, &extra.units))?,
        })
    }

    /// Context keywords.
    pub const fn context_keywords(&self) -> &TermSet {
        &self.context_keywords
    }

    /// Objective verbs and interrogatives.
    pub const fn objective_verbs(&self) -> &TermSet {
        &self.objective_verbs
    }

    /// Measurement units.
    pub const fn units(&self) -> &TermSet {
        &self.units
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sizes() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.context_keywords().len(), 16);
        assert_eq!(lex.objective_verbs().len(), 14);
        assert_eq!(lex.units().len(), 8);
    }

    #[test]
    fn builtin_terms_are_lowercase() {
        let lex = Lexicon::builtin();
        for set in [lex.context_keywords(), lex.objective_verbs(), lex.units()] {
            for term in set.terms() {
                assert_eq!(term, &term.to_lowercase());
            }
        }
    }

    #[test]
    fn repeated_term_counts_once() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.context_keywords().count_in("hcl hcl hcl"), 1);
    }

    #[test]
    fn substring_match_without_word_boundary() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.context_keywords().found_in("phola"), vec!["ph"]);
    }

    #[test]
    fn overlapping_units_all_reported() {
        let lex = Lexicon::builtin();
        let found = lex.units().found_in("5 mg");
        assert_eq!(found, vec!["m", "g", "mg"]);
    }

    #[test]
    fn multi_word_terms_match() {
        let lex = Lexicon::builtin();
        assert_eq!(
            lex.context_keywords().found_in("usé naranja de metilo"),
            vec!["naranja de metilo"]
        );
        assert!(lex.objective_verbs().found_in("no sé por qué").contains(&"por qué"));
    }

    #[test]
    fn extended_adds_and_normalizes_entries() {
        let extra = LexiconConfig {
            context_keywords: vec!["  Matraz ".to_string(), "HCl".to_string()],
            objective_verbs: vec![],
            units: vec!["mmol".to_string()],
        };
        let lex = Lexicon::extended(&extra).unwrap();
        // "hcl" is already built in and must not be duplicated
        assert_eq!(lex.context_keywords().len(), 17);
        assert!(lex.context_keywords().terms().iter().any(|t| t == "matraz"));
        assert_eq!(lex.units().len(), 9);
        assert_eq!(lex.objective_verbs().len(), 14);
    }

    #[test]
    fn empty_entries_are_dropped() {
        let extra = LexiconConfig {
            context_keywords: vec![String::new(), "   ".to_string()],
            ..LexiconConfig::default()
        };
        let lex = Lexicon::extended(&extra).unwrap();
        assert_eq!(lex.context_keywords().len(), 16);
        assert_eq!(lex.context_keywords().count_in("nothing here"), 0);
    }

    #[test]
    fn empty_config_is_builtin() {
        assert!(LexiconConfig::default().is_empty());
        let lex = Lexicon::extended(&LexiconConfig::default()).unwrap();
        assert_eq!(lex.units().terms(), Lexicon::builtin().units().terms());
    }
}
