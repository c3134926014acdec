use tiktoken_rs::{get_bpe_from_model, CoreBPE};

use super::{TokenCountError, TokenCounter};

/// Exact BPE token counting via `tiktoken-rs`.
pub struct TiktokenCounter {
    bpe: CoreBPE,
}

impl TiktokenCounter {
    /// Build a counter using the encoding registered for `model`
    /// (e.g. `"gpt-4o-mini"`).
    pub fn for_model(model: &str) -> Result<Self, TokenCountError> {
        let bpe = get_bpe_from_model(model)
            .map_err(|e| TokenCountError::new(format!("no encoding for {model}: {e}")))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> Result<usize, TokenCountError> {
        Ok(self.bpe.encode_ordinary(text).len())
    }
}
