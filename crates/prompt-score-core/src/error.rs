//! Error types for prompt-score-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A setting holds a value outside its accepted range.
    #[error("invalid configuration: {field} = {value} (maximum: {max})")]
    OutOfRange {
        /// Name of the offending setting.
        field: &'static str,
        /// Configured value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },

    /// The configured lexicon could not be compiled into a matcher.
    #[error("invalid lexicon: {0}")]
    Lexicon(#[source] aho_corasick::BuildError),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a prompt is rejected before it reaches the scoring engine.
///
/// The engine itself never fails; these errors belong to the input policy
/// applied by callers (see [`crate::input::validate_prompt`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The prompt is empty or whitespace-only.
    #[error("prompt is empty")]
    Empty,

    /// The prompt is shorter than the minimum length.
    #[error("prompt too short: {chars} characters (minimum: {min})")]
    TooShort {
        /// Characters in the trimmed prompt.
        chars: usize,
        /// Minimum accepted characters.
        min: usize,
    },

    /// The prompt exceeds the input size limit.
    #[error("input too large: {bytes} bytes (limit: {max} bytes)")]
    TooLarge {
        /// Size of the input in bytes.
        bytes: usize,
        /// Maximum accepted bytes.
        max: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
