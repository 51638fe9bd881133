//! Input policy applied by callers before scoring.
//!
//! The scoring engine accepts any string. Presentation layers reject prompts
//! that are too short to be worth scoring, and inputs too large to process,
//! through [`validate_prompt`].

use crate::error::{InputError, InputResult};

/// Minimum prompt length in characters.
pub const DEFAULT_MIN_PROMPT_CHARS: usize = 10;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Limits applied to prompts before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    /// Minimum characters after trimming.
    pub min_chars: usize,
    /// Maximum input size in bytes, or `None` for no limit.
    pub max_bytes: Option<usize>,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_PROMPT_CHARS,
            max_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

/// Trim a prompt and check it against the policy.
///
/// Returns the trimmed prompt on success.
pub fn validate_prompt<'a>(text: &'a str, policy: &InputPolicy) -> InputResult<&'a str> {
    if let Some(max) = policy.max_bytes
        && text.len() > max
    {
        return Err(InputError::TooLarge {
            bytes: text.len(),
            max,
        });
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let chars = trimmed.chars().count();
    if chars < policy.min_chars {
        return Err(InputError::TooShort {
            chars,
            min: policy.min_chars,
        });
    }

    Ok(trimmed)
}
