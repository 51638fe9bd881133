//! Score bands and tier messages for presentation layers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse quality band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScoreClass {
    /// 80 and above.
    Excellent,
    /// 60–79.
    Good,
    /// 40–59.
    Fair,
    /// Below 40.
    NeedsImprovement,
}

impl ScoreClass {
    /// Returns the class as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs-improvement",
        }
    }
}

impl std::fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band a score falls into.
pub const fn classify(score: u8) -> ScoreClass {
    match score {
        80.. => ScoreClass::Excellent,
        60..=79 => ScoreClass::Good,
        40..=59 => ScoreClass::Fair,
        _ => ScoreClass::NeedsImprovement,
    }
}

/// Feedback line for a total score.
pub const fn message(score: u8) -> &'static str {
    match score {
        90.. => "¡Excelente! Este prompt obtendrá respuestas muy útiles",
        70..=89 => "Buen prompt, obtendrás buenas respuestas",
        50..=69 => "Prompt aceptable, pero puede mejorar",
        30..=49 => "Necesita mejoras significativas",
        _ => "Prompt muy vago, necesita reescribirse",
    }
}

/// Five-star rating for a sub-score: `round(score / 20)`.
pub const fn stars(score: u8) -> u8 {
    let score = if score > 100 { 100 } else { score };
    (score + 10) / 20
}
