mod error;
mod scanner;


pub use error::ChunkError;
pub use scanner::{chunk_text, ChunkIter};

use serde::{Deserialize, Serialize};

/// Default line budget per chunk
pub const DEFAULT_LINES_PER_CHUNK: usize = 20;

/// Default token budget per chunk
pub const DEFAULT_TOKENS_PER_CHUNK: usize = 500;

/// Budgets for a single chunking pass.
///
/// Both budgets are inclusive lower bounds for triggering a flush, not hard
/// caps: a chunk is cut at the first safe boundary (newline or deferred
/// punctuation) at which the running line count and token count have *both*
/// reached their budget. If no safe boundary appears, the chunk keeps
/// growing until one does or the input ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    pub lines_per_chunk: usize,
    pub tokens_per_chunk: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            lines_per_chunk: DEFAULT_LINES_PER_CHUNK,
            tokens_per_chunk: DEFAULT_TOKENS_PER_CHUNK,
        }
    }
}

impl ChunkOptions {
    /// Both budgets must be at least 1; a zero budget would make every
    /// safe boundary a flush point regardless of content.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.lines_per_chunk == 0 || self.tokens_per_chunk == 0 {
            return Err(ChunkError::InvalidBudget {
                lines: self.lines_per_chunk,
                tokens: self.tokens_per_chunk,
            });
        }
        Ok(())
    }
}

/// Sentence-ending and separating punctuation (half- and full-width) that is
/// carried into the preceding chunk rather than allowed to start a new one.
/// Half-width `.` is absent: it doubles as a decimal point and abbreviation
/// marker.
pub fn is_deferred_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '。' | '？' | '！' | '!' | '?' | ';' | '；' | ':' | '：' | ',' | '，' | '、' | '…'
    )
}

/// A meaning character is anything that may start a chunk: not whitespace
/// and not deferred punctuation.
pub fn is_meaning(ch: char) -> bool {
    !ch.is_whitespace() && !is_deferred_punctuation(ch)
}
