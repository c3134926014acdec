// Public API exports
pub mod chunker;
pub mod tokenizer;

// Re-export main types for convenience
pub use chunker::{
    chunk_text, is_deferred_punctuation, is_meaning, ChunkError, ChunkIter, ChunkOptions,
    DEFAULT_LINES_PER_CHUNK, DEFAULT_TOKENS_PER_CHUNK,
};

pub use tokenizer::{
    default_counter, HeuristicCounter, TiktokenCounter, TokenCountError, TokenCounter,
    DEFAULT_MODEL,
};
