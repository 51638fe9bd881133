//! Complete assessment of a prompt: scores, band, message, stars, advice.
//!
//! This is the shape both the CLI (`score --json`) and the MCP server return.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grading::{self, ScoreClass};
use crate::scoring::{ScoreReport, ScoringEngine};
use crate::suggestions::{self, SuggestionSet};

/// Star rating (0–5) per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StarRatings {
    /// Context stars.
    pub context: u8,
    /// Specificity stars.
    pub specificity: u8,
    /// Clarity stars.
    pub clarity: u8,
    /// Objective stars.
    pub objective: u8,
    /// Completeness stars.
    pub completeness: u8,
}

impl From<&ScoreReport> for StarRatings {
    fn from(report: &ScoreReport) -> Self {
        Self {
            context: grading::stars(report.context),
            specificity: grading::stars(report.specificity),
            clarity: grading::stars(report.clarity),
            objective: grading::stars(report.objective),
            completeness: grading::stars(report.completeness),
        }
    }
}

/// Everything a presentation layer needs to render one scored prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    /// Sub-scores and total.
    pub report: ScoreReport,
    /// Band of the total score.
    pub class: ScoreClass,
    /// Feedback line for the total score.
    pub message: String,
    /// Five-star rating per criterion.
    pub stars: StarRatings,
    /// Improvement advice.
    #[serde(flatten)]
    pub suggestions: SuggestionSet,
}

impl Assessment {
    /// Assemble an assessment from an existing report.
    pub fn from_report(report: ScoreReport, text: &str) -> Self {
        Self {
            class: grading::classify(report.total),
            message: grading::message(report.total).to_string(),
            stars: StarRatings::from(&report),
            suggestions: suggestions::suggest(&report, text),
            report,
        }
    }
}

impl ScoringEngine {
    /// Score a prompt and derive band, message, stars, and suggestions.
    pub fn assess(&self, text: &str) -> Assessment {
        Assessment::from_report(self.analyze(text), text)
    }
}
