//! Built-in sample prompts showing what a well-formed question looks like.

use schemars::JsonSchema;
use serde::Serialize;

/// A curated example prompt.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
pub struct Sample {
    /// Short title describing the kind of question.
    pub title: &'static str,
    /// Prompt text.
    pub text: &'static str,
    /// Score advertised alongside the sample.
    pub advertised_score: u8,
}

/// Sample prompts in display order.
pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "Cálculo de concentración",
        text: "Estoy titulando 25 mL de HCl con NaOH 0.1M. El indicador fenolftaleína viró \
               a rosa a los 23.5 mL. ¿Cómo calculo la concentración exacta del HCl?",
        advertised_score: 95,
    },
    Sample {
        title: "Problema experimental",
        text: "En mi valoración de 20 mL de H2SO4 con KOH 0.15M, esperaba un viraje cerca \
               de 25 mL pero ocurrió a 35 mL. ¿Qué pudo salir mal?",
        advertised_score: 90,
    },
    Sample {
        title: "Comprensión conceptual",
        text: "No entiendo por qué el pH en el punto de equivalencia de una valoración de \
               ácido débil con base fuerte no es 7. ¿Puedes explicármelo con un ejemplo?",
        advertised_score: 85,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{ScoreClass, classify};
    use crate::input::{InputPolicy, validate_prompt};
    use crate::scoring::analyze;

    #[test]
    fn samples_pass_input_policy() {
        for sample in SAMPLES {
            assert!(validate_prompt(sample.text, &InputPolicy::default()).is_ok());
        }
    }

    #[test]
    fn samples_score_excellent() {
        for sample in SAMPLES {
            let report = analyze(sample.text);
            assert!(
                matches!(classify(report.total), ScoreClass::Excellent),
                "{} scored {}",
                sample.title,
                report.total
            );
        }
    }

    #[test]
    fn sample_scores() {
        let totals: Vec<u8> = SAMPLES.iter().map(|s| analyze(s.text).total).collect();
        assert_eq!(totals, vec![85, 80, 91]);
    }

    #[test]
    fn continuation_lines_join_with_single_space() {
        assert!(SAMPLES[0].text.contains("viró a rosa"));
        assert!(!SAMPLES.iter().any(|s| s.text.contains("  ")));
    }
}
