use std::mem;
use std::str::Chars;

use log::{debug, trace};

use super::{is_deferred_punctuation, ChunkError, ChunkOptions};
use crate::tokenizer::{TokenCountError, TokenCounter};

/// Split `text` into reader-friendly chunks that stay within both the line
/// and the token budget, cutting only at safe boundaries.
///
/// Rules:
/// - A chunk is flushed at the first newline or deferred-punctuation
///   character at which both running counts have reached their budgets.
/// - A flushed chunk keeps absorbing trailing whitespace and deferred
///   punctuation until the next meaning character, so no chunk after the
///   first ever starts with either.
/// - A blank line (two consecutive newlines) forces a flush regardless of
///   the budgets; the blank-line newline itself is dropped from the output.
/// - Tokens are counted one character at a time through `counter`, keeping
///   the whole pass O(n).
///
/// The returned iterator is lazy: nothing is scanned until it is pulled,
/// and dropping it early abandons the rest of the input. Each item is the
/// next chunk, or the error that aborted the scan. Chunks yielded before an
/// error stand.
///
/// Zero budgets are rejected up front with [`ChunkError::InvalidBudget`];
/// construction never fails for positive budgets.
pub fn chunk_text<'a, C>(
    text: &'a str,
    options: ChunkOptions,
    counter: &'a C,
) -> Result<ChunkIter<'a, C>, ChunkError>
where
    C: TokenCounter + ?Sized,
{
    options.validate()?;
    debug!(
        "chunking {} bytes (lines_per_chunk={}, tokens_per_chunk={})",
        text.len(),
        options.lines_per_chunk,
        options.tokens_per_chunk
    );

    Ok(ChunkIter {
        chars: text.chars(),
        counter,
        options,
        buffer: String::new(),
        line_count: 0,
        token_count: 0,
        pending: None,
        carry: None,
        prev: None,
        done: false,
    })
}

/// Lazy single-pass scanner over the input characters.
///
/// State between pulls is exactly the in-progress buffer with its two
/// counters, the pending completed-but-still-absorbing chunk, a one-character
/// lookahead slot, and the previously seen character (for blank-line
/// detection).
pub struct ChunkIter<'a, C: TokenCounter + ?Sized> {
    chars: Chars<'a>,
    counter: &'a C,
    options: ChunkOptions,
    buffer: String,
    line_count: usize,
    token_count: usize,
    pending: Option<String>,
    carry: Option<char>,
    prev: Option<char>,
    done: bool,
}

impl<C: TokenCounter + ?Sized> ChunkIter<'_, C> {
    fn take_char(&mut self) -> Option<char> {
        self.carry.take().or_else(|| self.chars.next())
    }

    /// Move the in-progress buffer into the pending slot. No-op on an empty
    /// buffer, so a blank line at a flush boundary never yields an empty
    /// chunk.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        trace!(
            "flushed chunk: {} lines, {} tokens, {} bytes",
            self.line_count,
            self.token_count,
            self.buffer.len()
        );
        self.pending = Some(mem::take(&mut self.buffer));
        self.line_count = 0;
        self.token_count = 0;
    }

    fn count_char(&self, ch: char) -> Result<usize, TokenCountError> {
        let mut utf8 = [0u8; 4];
        self.counter.count(ch.encode_utf8(&mut utf8))
    }
}

impl<C: TokenCounter + ?Sized> Iterator for ChunkIter<'_, C> {
    type Item = Result<String, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(ch) = self.take_char() {
            // A completed chunk keeps absorbing whitespace and deferred
            // punctuation; the first meaning character ends the absorption
            // and is re-processed on the next pull.
            if self.buffer.is_empty() {
                if let Some(pending) = self.pending.as_mut() {
                    if ch.is_whitespace() || is_deferred_punctuation(ch) {
                        pending.push(ch);
                        self.prev = Some(ch);
                        continue;
                    }
                    self.carry = Some(ch);
                    return self.pending.take().map(Ok);
                }
            }

            // Second newline of a blank line: force a flush and drop the
            // newline itself.
            if ch == '\n' && self.prev == Some('\n') {
                self.flush();
                self.prev = Some(ch);
                continue;
            }

            self.buffer.push(ch);
            if ch == '\n' {
                self.line_count += 1;
            }
            match self.count_char(ch) {
                Ok(n) => self.token_count += n,
                Err(err) => {
                    self.done = true;
                    return Some(Err(ChunkError::TokenCountingFailed(err)));
                }
            }
            self.prev = Some(ch);

            if self.line_count >= self.options.lines_per_chunk
                && self.token_count >= self.options.tokens_per_chunk
                && (ch == '\n' || is_deferred_punctuation(ch))
            {
                self.flush();
            }
        }

        // Input exhausted: whatever is left comes out as the final chunk.
        self.done = true;
        if !self.buffer.is_empty() {
            let mut last = self.pending.take().unwrap_or_default();
            last.push_str(&self.buffer);
            self.buffer.clear();
            return Some(Ok(last));
        }
        self.pending.take().map(Ok)
    }
}
