//! Core library for prompt-score.
//!
//! Scores free-text titration questions on five heuristic criteria and turns
//! the scores into improvement advice. The engine is deterministic, stateless,
//! and never fails; input policy (minimum length, size limit) is applied by
//! callers through [`validate_prompt`].
//!
//! # Modules
//!
//! - [`scoring`] - Sub-score evaluators, weighted total, [`ScoringEngine`]
//! - [`assessment`] - Scores, band, message, stars, and advice in one value
//! - [`suggestions`] - Fixed advice and the improved-prompt template
//! - [`grading`] - Score bands, tier messages, star ratings
//! - [`lexicon`] - Keyword, verb, and unit word lists
//! - [`input`] - Prompt validation policy
//! - [`samples`] - Built-in example prompts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prompt_score_core::{analyze, classify, suggest};
//!
//! let text = "Estoy titulando 25 mL de HCl con NaOH 0.1M. ¿Cómo calculo la concentración?";
//! let report = analyze(text);
//! let advice = suggest(&report, text);
//!
//! println!("{} ({})", report.total, classify(report.total));
//! for s in &advice.suggestions {
//!     println!("- {}", s.text);
//! }
//! ```
#![deny(unsafe_code)]

pub mod assessment;
pub mod config;
pub mod error;
pub mod grading;
pub mod input;
pub mod lexicon;
pub mod samples;
pub mod scoring;
pub mod suggestions;

pub use assessment::{Assessment, StarRatings};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use grading::{ScoreClass, classify, message, stars};
pub use input::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_MIN_PROMPT_CHARS, InputPolicy, validate_prompt};
pub use lexicon::{Lexicon, LexiconConfig};
pub use scoring::{Criterion, ScoreReport, ScoringEngine, aggregate, analyze};
pub use suggestions::{Suggestion, SuggestionSet, suggest};
