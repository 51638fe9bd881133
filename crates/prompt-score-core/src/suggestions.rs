//! Improvement suggestions derived from a [`ScoreReport`].
//!
//! Advice is fixed text keyed by criterion. A criterion below
//! [`SUGGESTION_THRESHOLD`] contributes its line; a total below
//! [`TEMPLATE_THRESHOLD`] adds the fill-in-the-blank prompt skeleton.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scoring::{Criterion, ScoreReport};

/// Sub-scores below this value produce a suggestion.
pub const SUGGESTION_THRESHOLD: u8 = 60;

/// Totals below this value produce an improved-prompt template.
pub const TEMPLATE_THRESHOLD: u8 = 50;

/// Advice for each criterion, in priority order.
const ADVICE: &[(Criterion, &str)] = &[
    (
        Criterion::Context,
        "Agrega más contexto sobre tu experimento (tipo de valoración, reactivos utilizados)",
    ),
    (
        Criterion::Specificity,
        "Incluye datos específicos: concentraciones, volúmenes, valores de pH",
    ),
    (
        Criterion::Clarity,
        "Estructura mejor tu pregunta, usa puntuación adecuada",
    ),
    (
        Criterion::Objective,
        "Especifica claramente qué necesitas: calcular, entender, verificar",
    ),
    (
        Criterion::Completeness,
        "Desarrolla más tu pregunta, proporciona toda la información relevante",
    ),
];

/// Prompt skeleton offered when the total score is low.
pub const IMPROVED_TEMPLATE: &str = "Estoy realizando una valoración de [especifica el ácido] \
    con [especifica la base]. He usado [X mL] de [reactivo] con concentración [X M]. \
    Observé que [describe tu observación]. ¿Podrías ayudarme a [objetivo específico]?";

/// A single piece of advice tied to the criterion that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Criterion that scored below the threshold.
    pub criterion: Criterion,
    /// Advice text.
    pub text: String,
}

/// Ordered suggestions plus an optional rewritten-prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestionSet {
    /// Suggestions in priority order.
    pub suggestions: Vec<Suggestion>,
    /// Fill-in-the-blank prompt, present only when the total is below 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_template: Option<String>,
}

impl SuggestionSet {
    /// Returns `true` when there is nothing to suggest.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.improved_template.is_none()
    }
}

/// Fixed advice text for a criterion.
pub fn advice_for(criterion: Criterion) -> &'static str {
    ADVICE
        .iter()
        .find_map(|(c, text)| (*c == criterion).then_some(*text))
        .unwrap_or_default()
}

/// Derive suggestions from a report.
///
/// The prompt text is accepted for API symmetry with [`crate::analyze`]; the
/// advice and the template are constants and do not depend on its content.
#[tracing::instrument(skip(_text), fields(total = report.total))]
pub fn suggest(report: &ScoreReport, _text: &str) -> SuggestionSet {
    let suggestions = report
        .iter()
        .filter(|(_, score)| *score < SUGGESTION_THRESHOLD)
        .map(|(criterion, _)| Suggestion {
            criterion,
            text: advice_for(criterion).to_string(),
        })
        .collect::<Vec<_>>();

    let improved_template =
        (report.total < TEMPLATE_THRESHOLD).then(|| IMPROVED_TEMPLATE.to_string());

    tracing::debug!(
        suggestions = suggestions.len(),
        template = improved_template.is_some(),
        "suggestions generated"
    );

    SuggestionSet {
        suggestions,
        improved_template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::analyze;

    fn criteria(set: &SuggestionSet) -> Vec<Criterion> {
        set.suggestions.iter().map(|s| s.criterion).collect()
    }

    #[test]
    fn every_criterion_has_advice() {
        for criterion in Criterion::ALL {
            assert!(!advice_for(criterion).is_empty(), "{criterion}");
        }
    }

    #[test]
    fn all_low_scores_give_all_suggestions_in_order() {
        let report = ScoreReport::from_scores(0, 0, 0, 0, 0);
        let set = suggest(&report, "");
        assert_eq!(criteria(&set), Criterion::ALL.to_vec());
        assert_eq!(set.improved_template.as_deref(), Some(IMPROVED_TEMPLATE));
    }

    #[test]
    fn threshold_is_exclusive() {
        let report = ScoreReport::from_scores(60, 59, 60, 59, 60);
        let set = suggest(&report, "");
        assert_eq!(
            criteria(&set),
            vec![Criterion::Specificity, Criterion::Objective]
        );
    }

    #[test]
    fn template_only_below_fifty() {
        // total = 50
        let at = ScoreReport::from_scores(50, 50, 50, 50, 50);
        assert_eq!(at.total, 50);
        assert!(suggest(&at, "").improved_template.is_none());

        // total = 49
        let below = ScoreReport::from_scores(49, 49, 49, 49, 49);
        assert_eq!(below.total, 49);
        assert!(suggest(&below, "").improved_template.is_some());
    }

    #[test]
    fn perfect_report_has_no_suggestions() {
        let report = ScoreReport::from_scores(100, 100, 100, 100, 100);
        assert!(suggest(&report, "").is_empty());
    }

    #[test]
    fn greeting_gets_template_and_skips_clarity() {
        let text = "hola como estas";
        let set = suggest(&analyze(text), text);
        assert_eq!(
            criteria(&set),
            vec![
                Criterion::Context,
                Criterion::Specificity,
                Criterion::Objective,
                Criterion::Completeness,
            ]
        );
        assert!(set.improved_template.is_some());
    }

    #[test]
    fn template_does_not_depend_on_text() {
        let report = ScoreReport::from_scores(0, 0, 0, 0, 0);
        assert_eq!(suggest(&report, "uno"), suggest(&report, "otro texto"));
    }

    #[test]
    fn template_has_four_sentences() {
        let terminators = IMPROVED_TEMPLATE
            .chars()
            .filter(|c| matches!(c, '.' | '?'))
            .count();
        assert_eq!(terminators, 4);
        assert!(IMPROVED_TEMPLATE.starts_with("Estoy realizando una valoración"));
    }

    #[test]
    fn template_omitted_from_json_when_absent() {
        let report = ScoreReport::from_scores(100, 100, 100, 100, 100);
        let json = serde_json::to_string(&suggest(&report, "")).unwrap();
        assert!(!json.contains("improved_template"));
    }
}
