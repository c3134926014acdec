use thiserror::Error;

use crate::tokenizer::TokenCountError;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error(
        "chunk budgets must be positive (lines_per_chunk={lines}, tokens_per_chunk={tokens})"
    )]
    InvalidBudget { lines: usize, tokens: usize },

    #[error("token counting failed: {0}")]
    TokenCountingFailed(#[from] TokenCountError),
}
