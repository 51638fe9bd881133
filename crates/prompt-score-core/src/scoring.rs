//! Heuristic prompt scoring.
//!
//! Five sub-scores, each in `0..=100`, are combined into a weighted total:
//!
//! | Criterion      | Weight |
//! |----------------|--------|
//! | context        | 25%    |
//! | specificity    | 25%    |
//! | clarity        | 20%    |
//! | objective      | 20%    |
//! | completeness   | 10%    |
//!
//! Every evaluator is a pure function of the text and the lexicon. No input
//! is rejected here: empty text scores zero everywhere except clarity.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Regex for a numeric token (`25`, `0.1`, `23.5`).
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid regex"));

/// Engine over the built-in lexicon.
static BUILTIN_ENGINE: LazyLock<ScoringEngine> =
    LazyLock::new(|| ScoringEngine::new(Lexicon::builtin().clone()));

/// Sentences longer than this many words are penalized.
const LONG_SENTENCE_WORDS: usize = 30;

/// One of the five scored dimensions of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Domain context: how many titration keywords the prompt mentions.
    Context,
    /// Concrete data: numbers and measurement units.
    Specificity,
    /// Sentence structure and punctuation.
    Clarity,
    /// Whether the prompt states what the writer wants.
    Objective,
    /// Overall length and shape of the question.
    Completeness,
}

impl Criterion {
    /// All criteria in priority order.
    pub const ALL: [Self; 5] = [
        Self::Context,
        Self::Specificity,
        Self::Clarity,
        Self::Objective,
        Self::Completeness,
    ];

    /// Returns the criterion name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Specificity => "specificity",
            Self::Clarity => "clarity",
            Self::Objective => "objective",
            Self::Completeness => "completeness",
        }
    }

    /// Weight in the total, in percent.
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Context | Self::Specificity => 25,
            Self::Clarity | Self::Objective => 20,
            Self::Completeness => 10,
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    /// Domain context score.
    pub context: u8,
    /// Specificity score.
    pub specificity: u8,
    /// Clarity score.
    pub clarity: u8,
    /// Objective score.
    pub objective: u8,
    /// Completeness score.
    pub completeness: u8,
    /// Weighted total (see [`aggregate`]).
    pub total: u8,
}

impl ScoreReport {
    /// Build a report from sub-scores, deriving the total.
    ///
    /// Sub-scores above 100 are clamped.
    pub fn from_scores(
        context: u8,
        specificity: u8,
        clarity: u8,
        objective: u8,
        completeness: u8,
    ) -> Self {
        let mut report = Self {
            context: context.min(100),
            specificity: specificity.min(100),
            clarity: clarity.min(100),
            objective: objective.min(100),
            completeness: completeness.min(100),
            total: 0,
        };
        report.total = aggregate(&report);
        report
    }

    /// Sub-score for one criterion.
    pub const fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Context => self.context,
            Criterion::Specificity => self.specificity,
            Criterion::Clarity => self.clarity,
            Criterion::Objective => self.objective,
            Criterion::Completeness => self.completeness,
        }
    }

    /// Iterate `(criterion, sub-score)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Weighted total of a report's sub-scores, rounded half-up.
///
/// `round(0.25·context + 0.25·specificity + 0.20·clarity + 0.20·objective + 0.10·completeness)`,
/// computed in integer hundredths so ties never drift through float error.
pub fn aggregate(report: &ScoreReport) -> u8 {
    let hundredths: u32 = report
        .iter()
        .map(|(c, score)| c.weight() * u32::from(score))
        .sum();
    // Weights sum to 100 and every score is at most 100.
    ((hundredths + 50) / 100).min(100) as u8
}

/// Deterministic scorer bound to a lexicon.
///
/// Holds no mutable state; a single engine can serve any number of callers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    lexicon: Lexicon,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl ScoringEngine {
    /// Create an engine over the given lexicon.
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The shared engine over the built-in lexicon.
    pub fn builtin() -> &'static Self {
        &BUILTIN_ENGINE
    }

    /// The lexicon this engine matches against.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a prompt on all five criteria.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> ScoreReport {
        let lowered = text.to_lowercase();
        let context = self.context_score(&lowered);
        let objective = self.objective_score(text, &lowered);
        let report = ScoreReport::from_scores(
            context,
            self.specificity_score(text, &lowered),
            evaluate_clarity(text),
            objective,
            completeness_score(text, context > 0 && objective > 0),
        );
        tracing::debug!(total = report.total, "prompt scored");
        report
    }

    /// Context score from the number of distinct keywords present.
    ///
    /// `0 → 0`, `1 → 20`, `2 → 40`, `3 → 60`, `4 → 80`, `5+ → 100`.
    pub fn evaluate_context(&self, text: &str) -> u8 {
        self.context_score(&text.to_lowercase())
    }

    /// Specificity score: 40 for any number, plus 20 per distinct unit up to 60.
    pub fn evaluate_specificity(&self, text: &str) -> u8 {
        self.specificity_score(text, &text.to_lowercase())
    }

    /// Objective score: 30 per distinct objective verb, plus 20 for a question
    /// mark, capped at 100 after every step.
    pub fn evaluate_objective(&self, text: &str) -> u8 {
        self.objective_score(text, &text.to_lowercase())
    }

    /// Completeness score from length, a question mark, and whether the prompt
    /// has both context and an objective.
    pub fn evaluate_completeness(&self, text: &str) -> u8 {
        let has_both = self.evaluate_context(text) > 0 && self.evaluate_objective(text) > 0;
        completeness_score(text, has_both)
    }

    fn context_score(&self, lowered: &str) -> u8 {
        match self.lexicon.context_keywords().count_in(lowered) {
            0 => 0,
            1 => 20,
            2 => 40,
            3 => 60,
            4 => 80,
            _ => 100,
        }
    }

    fn specificity_score(&self, text: &str, lowered: &str) -> u8 {
        let mut score = 0u8;
        if NUMBER_PATTERN.is_match(text) {
            score += 40;
        }
        score += match self.lexicon.units().count_in(lowered) {
            0 => 0,
            1 => 20,
            2 => 40,
            _ => 60,
        };
        score.min(100)
    }

    fn objective_score(&self, text: &str, lowered: &str) -> u8 {
        let mut score = 0u8;
        for _ in 0..self.lexicon.objective_verbs().count_in(lowered) {
            score = (score + 30).min(100);
        }
        if text.contains('?') {
            score = (score + 20).min(100);
        }
        score
    }
}

/// Score a prompt with the built-in lexicon.
pub fn analyze(text: &str) -> ScoreReport {
    ScoringEngine::builtin().analyze(text)
}

/// Clarity score: starts at 100, −20 per sentence over 30 words, −20 without
/// any `.`/`?`/`!`, +10 with a `?`.
///
/// Penalties accumulate unclamped; the result is clamped to `0..=100` once.
pub fn evaluate_clarity(text: &str) -> u8 {
    let mut score: i64 = 100;

    let long_sentences = text
        .split(['.', '!', '?'])
        .filter(|sentence| sentence.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count();
    score -= 20 * long_sentences as i64;

    if !text.contains(['.', '?', '!']) {
        score -= 20;
    }
    if text.contains('?') {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

fn completeness_score(text: &str, has_context_and_objective: bool) -> u8 {
    let mut score: u8 = match text.chars().count() {
        n if n >= 50 => 50,
        n if n >= 30 => 30,
        n if n >= 20 => 10,
        _ => 0,
    };
    if text.contains('?') {
        score += 30;
    }
    if has_context_and_objective {
        score += 20;
    }
    score.min(100)
}
