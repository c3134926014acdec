mod heuristic;
mod tiktoken;

#[cfg(test)]
mod tests;

pub use heuristic::HeuristicCounter;
pub use tiktoken::TiktokenCounter;

use thiserror::Error;

/// Model whose encoding is used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A token-counting capability failed, e.g. the encoding could not be
/// resolved. Carries the backend's reason verbatim.
#[derive(Error, Debug, Clone)]
#[error("{reason}")]
pub struct TokenCountError {
    reason: String,
}

impl TokenCountError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Pluggable token counting.
///
/// The chunker calls this once per input character with a one-character
/// string; implementations are free to batch or cache internally.
pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> Result<usize, TokenCountError>;
}

/// Counter for [`DEFAULT_MODEL`], for callers that do not care which
/// encoding backs their budgets.
pub fn default_counter() -> Result<TiktokenCounter, TokenCountError> {
    TiktokenCounter::for_model(DEFAULT_MODEL)
}
